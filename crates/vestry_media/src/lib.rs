//! Media reference resolution for the Vestry media subsystem.
//!
//! This crate classifies an arbitrary user-supplied URL string as a direct
//! media asset, a YouTube video, or a Google Drive file, and produces a
//! renderable reference (the URL itself, or an iframe-embeddable URL).
//!
//! Everything here is pure and side-effect free. The resolver never errors:
//! an absent result means "render nothing", not "failure". Malformed
//! platform URLs deliberately degrade to no preview rather than surfacing
//! diagnostics.
//!
//! # Examples
//!
//! ```
//! use vestry_media::{classify, embed_url, MediaReference};
//!
//! let reference = classify("https://youtu.be/dQw4w9WgXcQ");
//! assert!(matches!(reference, MediaReference::YouTube { .. }));
//! assert_eq!(
//!     embed_url(&reference),
//!     Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extension;
mod reference;
mod resolve;

pub use extension::{file_extension, kind_for_extension};
pub use reference::MediaReference;
pub use resolve::{
    classify, embed_url, extract_drive_file_id, extract_youtube_video_id, is_google_drive_url,
    is_youtube_url,
};
