//! Vestry - media handling for a church/NGO CMS back office
//!
//! Vestry implements the media subsystem behind a content-managed
//! marketing and membership website: classifying user-supplied media URLs
//! (YouTube, Google Drive, direct assets), coordinating the choice between
//! "enter a URL" and "upload a file", and talking to the object-storage
//! and metadata-registry collaborators that make an upload durable.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vestry::{
//!     FileSystemStorage, JsonlRegistry, MediaKind, UploadConfig, UploadCoordinator,
//! };
//!
//! # fn main() -> vestry::VestryResult<()> {
//! let storage = Arc::new(FileSystemStorage::new("media", "https://media.example.org")?);
//! let registry = Arc::new(JsonlRegistry::new("media/uploads.jsonl"));
//!
//! let mut widget = UploadCoordinator::new(
//!     UploadConfig::new(MediaKind::Image, "site-media"),
//!     storage,
//!     registry,
//!     |url| println!("form received: {url}"),
//! );
//!
//! widget.select_url_mode();
//! widget.set_typed_url("https://youtu.be/dQw4w9WgXcQ");
//! widget.commit_url()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Vestry is organized as a workspace with focused crates:
//!
//! - `vestry_error` - Error types
//! - `vestry_core` - Core data types (MediaKind, Actor, content records)
//! - `vestry_media` - Pure media reference resolution
//! - `vestry_storage` - Object storage and metadata registry boundaries
//! - `vestry_upload` - The upload coordinator state machine
//!
//! This crate (`vestry`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use vestry_core::{
    Actor, BlogPost, EventRecord, Leader, MediaKind, Member, Program, Project, Sermon,
    TeamMember, Tribe, init_telemetry, shutdown_telemetry,
};
pub use vestry_error::{
    ConfigError, MediaError, MediaErrorKind, RegistryError, RegistryErrorKind, StorageError,
    StorageErrorKind, UploadError, UploadErrorKind, VestryError, VestryErrorKind, VestryResult,
};
pub use vestry_media::{
    MediaReference, classify, embed_url, extract_drive_file_id, extract_youtube_video_id,
    file_extension, is_google_drive_url, is_youtube_url, kind_for_extension,
};
pub use vestry_storage::{
    FileSystemStorage, JsonlRegistry, MediaRegistry, ObjectStorage, StorageSettings,
    UploadOptions, UploadRecord,
};
pub use vestry_upload::{
    PendingFile, PreviewHandle, PreviewUrl, Stage, UploadConfig, UploadCoordinator,
};
