//! URL classification and embed-URL construction.

use crate::MediaReference;
use regex::Regex;
use std::sync::LazyLock;

/// The single fixed pattern for YouTube video ids. Captures the segment
/// after `youtu.be/`, `/v/`, `/u/<slot>/`, `/embed/`, or a `v=` query
/// parameter (ignoring a leading `&`), delimited by `#`, `&`, or `?`.
static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|[?&]v=)([^#&?]*)").expect("Valid video id regex")
});

/// First path segment after the literal `/d/` in a Drive URL.
static DRIVE_FILE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/d/([^/#?]+)").expect("Valid drive file id regex")
});

/// True iff the string contains `youtube.com` or `youtu.be`.
///
/// Deliberately permissive: no scheme or host validation beyond substring
/// containment.
pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// True iff the string contains `drive.google.com`.
pub fn is_google_drive_url(url: &str) -> bool {
    url.contains("drive.google.com")
}

/// Extract a YouTube video id from a URL string.
///
/// Applies the fixed capture pattern and accepts the captured group only
/// when it is exactly 11 characters. The length check is the sole validity
/// guard; malformed or truncated ids are silently rejected rather than
/// reported, and no character-class restriction is applied to the capture.
///
/// # Examples
///
/// ```
/// use vestry_media::extract_youtube_video_id;
///
/// assert_eq!(
///     extract_youtube_video_id("https://youtu.be/dQw4w9WgXcQ"),
///     Some("dQw4w9WgXcQ".to_string())
/// );
/// assert_eq!(extract_youtube_video_id("https://youtu.be/short"), None);
/// ```
pub fn extract_youtube_video_id(url: &str) -> Option<String> {
    let captures = YOUTUBE_ID.captures(url)?;
    let id = captures.get(1)?.as_str();
    if id.len() == 11 {
        Some(id.to_string())
    } else {
        None
    }
}

/// Extract a Google Drive file id: the first path segment following the
/// literal `/d/`, up to the next `/`.
pub fn extract_drive_file_id(url: &str) -> Option<String> {
    let captures = DRIVE_FILE_ID.captures(url)?;
    Some(captures.get(1)?.as_str().to_string())
}

/// Classify a URL string into a media reference.
///
/// Recognition order is YouTube, then Drive, then direct. Never errors;
/// platform URLs whose id cannot be extracted still classify as their
/// platform variant with an absent id.
pub fn classify(url: &str) -> MediaReference {
    if is_youtube_url(url) {
        MediaReference::YouTube {
            url: url.to_string(),
            video_id: extract_youtube_video_id(url),
        }
    } else if is_google_drive_url(url) {
        MediaReference::GoogleDrive {
            url: url.to_string(),
            file_id: extract_drive_file_id(url),
        }
    } else {
        MediaReference::Direct {
            url: url.to_string(),
        }
    }
}

/// Produce a renderable URL for a reference.
///
/// YouTube and Drive references become iframe-embeddable URLs; direct URLs
/// pass through unchanged. Returns `None` when a platform id could not be
/// extracted, and for local files; callers preview those through an
/// ephemeral object URL owned by the upload coordinator, not through the
/// resolver.
///
/// # Examples
///
/// ```
/// use vestry_media::{classify, embed_url};
///
/// let drive = classify("https://drive.google.com/file/d/ABC123/view");
/// assert_eq!(
///     embed_url(&drive),
///     Some("https://drive.google.com/file/d/ABC123/preview".to_string())
/// );
/// ```
pub fn embed_url(reference: &MediaReference) -> Option<String> {
    match reference {
        MediaReference::Direct { url } => Some(url.clone()),
        MediaReference::YouTube { video_id, .. } => video_id
            .as_ref()
            .map(|id| format!("https://www.youtube.com/embed/{id}")),
        MediaReference::GoogleDrive { file_id, .. } => file_id
            .as_ref()
            .map(|id| format!("https://drive.google.com/file/d/{id}/preview")),
        MediaReference::LocalFile { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_youtube_by_containment() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=abc"));
        assert!(is_youtube_url("https://youtu.be/abc"));
        assert!(is_youtube_url("prefix youtu.be suffix"));
        assert!(!is_youtube_url("https://vimeo.com/12345"));
        assert!(!is_youtube_url("https://drive.google.com/file/d/x/view"));
    }

    #[test]
    fn recognizes_drive_by_containment() {
        assert!(is_google_drive_url("https://drive.google.com/file/d/x/view"));
        assert!(!is_google_drive_url("https://docs.google.com/document/d/x"));
    }

    #[test]
    fn extracts_id_from_short_link() {
        assert_eq!(
            extract_youtube_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_id_from_watch_query() {
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=5s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_id_from_embed_and_v_paths() {
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/u/1/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn rejects_wrong_length_without_error() {
        assert_eq!(extract_youtube_video_id("https://youtu.be/short"), None);
        assert_eq!(
            extract_youtube_video_id("https://youtu.be/dQw4w9WgXcQtoolong"),
            None
        );
        assert_eq!(
            extract_youtube_video_id("https://example.com/not-youtube"),
            None
        );
    }

    #[test]
    fn length_is_the_only_guard() {
        // Non-alphanumeric 11-character captures pass; deliberately lenient.
        assert_eq!(
            extract_youtube_video_id("https://youtu.be/a-b_c.d!e~f"),
            Some("a-b_c.d!e~f".to_string())
        );
    }

    #[test]
    fn extracts_drive_file_id_up_to_next_slash() {
        assert_eq!(
            extract_drive_file_id("https://drive.google.com/file/d/ABC123/view"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            extract_drive_file_id("https://drive.google.com/file/d/ABC123"),
            Some("ABC123".to_string())
        );
        assert_eq!(extract_drive_file_id("https://drive.google.com/file"), None);
    }

    #[test]
    fn classifies_in_priority_order() {
        assert!(matches!(
            classify("https://youtu.be/dQw4w9WgXcQ"),
            MediaReference::YouTube { .. }
        ));
        assert!(matches!(
            classify("https://drive.google.com/file/d/ABC/view"),
            MediaReference::GoogleDrive { .. }
        ));
        assert!(matches!(
            classify("https://example.com/banner.png"),
            MediaReference::Direct { .. }
        ));
    }

    #[test]
    fn embed_url_round_trips_extracted_ids() {
        let reference = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(
            embed_url(&reference),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn embed_url_is_absent_for_unextractable_ids() {
        let reference = classify("https://www.youtube.com/channel/VestryMedia");
        assert!(matches!(reference, MediaReference::YouTube { .. }));
        assert_eq!(embed_url(&reference), None);
    }

    #[test]
    fn local_files_have_no_embed_url() {
        let reference = MediaReference::LocalFile {
            bytes: b"PNG bytes".to_vec(),
            kind: vestry_core::MediaKind::Image,
            mime_type: "image/png".to_string(),
            size_bytes: 9,
            file_name: "banner.png".to_string(),
        };
        assert_eq!(reference.url(), None);
        assert_eq!(embed_url(&reference), None);
    }

    #[test]
    fn direct_urls_pass_through_unchanged() {
        let reference = classify("https://example.com/photo.jpg");
        assert_eq!(
            embed_url(&reference),
            Some("https://example.com/photo.jpg".to_string())
        );
    }
}
