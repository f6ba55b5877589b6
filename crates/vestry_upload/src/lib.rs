//! Media upload coordination for the Vestry media subsystem.
//!
//! The [`UploadCoordinator`] is the state machine behind the media widget
//! embedded in the back-office forms (event creation, blog editing, team
//! portraits). It mediates between two mutually exclusive input modes
//! (typing a URL, or uploading a local file) and a single output contract:
//! the embedding form receives a durable URL string through its
//! `on_media_committed` callback, exactly once per successful commit, and
//! the empty string on removal.
//!
//! All side effects are confined to [`UploadCoordinator::commit_upload`]:
//! a bucket existence check, the upload itself, public URL resolution,
//! and a best-effort metadata registry insert. The calls run sequentially
//! with no retries; a busy flag rejects re-entrant commits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod coordinator;
mod preview;

pub use config::UploadConfig;
pub use coordinator::{PendingFile, Stage, UploadCoordinator};
pub use preview::{PreviewHandle, PreviewUrl};
