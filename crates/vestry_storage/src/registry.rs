//! Metadata registry trait and record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vestry_core::MediaKind;
use vestry_error::VestryResult;

/// A metadata row recorded after a successful upload.
///
/// This is secondary bookkeeping: the durable artifact is the uploaded
/// object and its URL, so registry failures never fail a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Row identifier.
    pub id: Uuid,
    /// Original filename as selected by the user.
    pub file_name: String,
    /// Declared media kind.
    pub kind: MediaKind,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Resolved public URL of the stored object.
    pub url: String,
    /// Identifier of the uploading actor, for attribution.
    pub actor_id: String,
    /// When the record was created.
    pub recorded_at: DateTime<Utc>,
}

impl UploadRecord {
    /// Create a record with a fresh id and the current timestamp.
    pub fn new(
        file_name: impl Into<String>,
        kind: MediaKind,
        size_bytes: u64,
        url: impl Into<String>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            kind,
            size_bytes,
            url: url.into(),
            actor_id: actor_id.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Trait for pluggable upload metadata registries.
#[async_trait::async_trait]
pub trait MediaRegistry: Send + Sync {
    /// Insert a record.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be persisted. Callers on
    /// the commit path swallow this by design and log it instead.
    async fn insert(&self, record: &UploadRecord) -> VestryResult<()>;
}
