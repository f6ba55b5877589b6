//! Content record shapes edited by the back-office forms.
//!
//! Each backend table has exactly one shape, so these are plain tagged
//! structs with no polymorphism. The only invariant is "required fields
//! present"; Vestry never interprets these rows beyond carrying the
//! `media_url` strings committed by the upload coordinator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered member of the congregation or organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Row identifier.
    pub id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number, if provided.
    pub phone: Option<String>,
    /// Tribe the member belongs to, if assigned.
    pub tribe_id: Option<Uuid>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

/// A public event (service, outreach, fundraiser).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Row identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Longer description shown on the public site.
    pub description: Option<String>,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Venue or address.
    pub location: Option<String>,
    /// Poster or banner media URL committed by the upload widget.
    pub media_url: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

/// A blog post on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Row identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body (markdown or rich text, opaque here).
    pub body: String,
    /// Author attribution.
    pub author: Option<String>,
    /// Cover media URL committed by the upload widget.
    pub media_url: Option<String>,
    /// Publication timestamp; unset while drafted.
    pub published_at: Option<DateTime<Utc>>,
}

/// An NGO project or initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Row identifier.
    pub id: Uuid,
    /// Project name.
    pub name: String,
    /// Project summary.
    pub summary: Option<String>,
    /// Cover media URL committed by the upload widget.
    pub media_url: Option<String>,
    /// Whether the project is shown on the public site.
    pub active: bool,
}

/// A recorded sermon, usually referencing a YouTube or Drive URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sermon {
    /// Row identifier.
    pub id: Uuid,
    /// Sermon title.
    pub title: String,
    /// Preacher attribution.
    pub preacher: Option<String>,
    /// Date the sermon was delivered.
    pub date: NaiveDate,
    /// Video URL; resolved to an embed URL at render time.
    pub media_url: String,
}

/// A staff or volunteer team member shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Row identifier.
    pub id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Role or title.
    pub role: String,
    /// Portrait media URL committed by the upload widget.
    pub media_url: Option<String>,
}

/// A recurring program (youth group, food bank, choir).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Row identifier.
    pub id: Uuid,
    /// Program name.
    pub name: String,
    /// Program description.
    pub description: Option<String>,
    /// Meeting schedule, free-form.
    pub schedule: Option<String>,
}

/// A tribe (small-group subdivision of the membership).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tribe {
    /// Row identifier.
    pub id: Uuid,
    /// Tribe name.
    pub name: String,
    /// Leader of the tribe, if assigned.
    pub leader_id: Option<Uuid>,
}

/// A leadership entry (pastor, board member, tribe head).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    /// Row identifier.
    pub id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Leadership title.
    pub title: String,
    /// Portrait media URL committed by the upload widget.
    pub media_url: Option<String>,
}
