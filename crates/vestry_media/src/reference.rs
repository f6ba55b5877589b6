//! The media reference union.

use serde::{Deserialize, Serialize};
use vestry_core::MediaKind;

/// A classified media reference.
///
/// Created transiently while the user is choosing media; only the plain URL
/// string a variant carries is ever persisted. A reference is never
/// simultaneously a local file and a URL variant; the upload coordinator
/// clears one mode's working state when the other is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaReference {
    /// Any URL not recognized as YouTube or Drive; renderable as-is in an
    /// `<img>`/`<video>` source.
    Direct {
        /// The URL string as supplied.
        url: String,
    },
    /// A YouTube link, recognized by substring containment.
    YouTube {
        /// The URL string as supplied.
        url: String,
        /// Extracted 11-character video id, when the fixed pattern matched.
        video_id: Option<String>,
    },
    /// A Google Drive link, recognized by substring containment.
    GoogleDrive {
        /// The URL string as supplied.
        url: String,
        /// File id from the path segment following `/d/`, when present.
        file_id: Option<String>,
    },
    /// An in-memory pending upload. Never persisted as-is; always either
    /// discarded or converted into a `Direct` URL after a successful
    /// upload.
    LocalFile {
        /// Raw file bytes.
        bytes: Vec<u8>,
        /// The kind the upload widget was configured for.
        kind: MediaKind,
        /// Declared MIME type of the selected file.
        mime_type: String,
        /// Size in bytes, as reported at selection time.
        size_bytes: u64,
        /// Original filename, used to derive the stored extension.
        file_name: String,
    },
}

impl MediaReference {
    /// The URL carried by this reference, if it is a URL variant.
    pub fn url(&self) -> Option<&str> {
        match self {
            MediaReference::Direct { url }
            | MediaReference::YouTube { url, .. }
            | MediaReference::GoogleDrive { url, .. } => Some(url),
            MediaReference::LocalFile { .. } => None,
        }
    }
}
