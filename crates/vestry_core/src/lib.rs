//! Core data types for the Vestry media subsystem.
//!
//! This crate provides the foundation data types shared across the Vestry
//! crates: the media kind enumeration, the authenticated actor identity,
//! and the plain content-record shapes edited by the back-office forms.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod kind;
mod records;
mod telemetry;

pub use actor::Actor;
pub use kind::MediaKind;
pub use records::{
    BlogPost, EventRecord, Leader, Member, Program, Project, Sermon, TeamMember, Tribe,
};
pub use telemetry::{init_telemetry, shutdown_telemetry, SERVICE_NAME};
