//! Filename extension helpers for local files.

use vestry_core::MediaKind;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "avi", "mov", "flv", "m3u8", "ts"];

/// The lowercased extension of a filename, if it has one.
///
/// # Examples
///
/// ```
/// use vestry_media::file_extension;
///
/// assert_eq!(file_extension("Easter Banner.PNG"), Some("png".to_string()));
/// assert_eq!(file_extension("notes"), None);
/// ```
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// The media kind conventionally associated with an extension, if known.
pub fn kind_for_extension(ext: &str) -> Option<MediaKind> {
    let ext = ext.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}
