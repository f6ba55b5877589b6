//! Media kind enumeration.

use vestry_error::{MediaError, MediaErrorKind};

/// The declared kind of an uploaded media asset.
///
/// The upload widget is configured for exactly one kind; selected files
/// must carry a MIME type in the matching family.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Image content (PNG, JPEG, WebP, etc.)
    #[display("image")]
    Image,
    /// Video content (MP4, WebM, etc.)
    #[display("video")]
    Video,
}

impl MediaKind {
    /// Convert to string representation for registry storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// The MIME type family (prefix) files of this kind must declare.
    pub fn mime_family(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/",
            MediaKind::Video => "video/",
        }
    }

    /// The storage namespace for objects of this kind.
    pub fn namespace(&self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(MediaError::new(MediaErrorKind::UnknownKind(s.to_string()))),
        }
    }
}
