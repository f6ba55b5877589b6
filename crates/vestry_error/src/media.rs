//! Media reference error types.

/// Kinds of media reference errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaErrorKind {
    /// The string could not be parsed as a URL
    #[display("Invalid URL: {}", _0)]
    InvalidUrl(String),
    /// The reference cannot be rendered or embedded
    #[display("Unsupported media reference: {}", _0)]
    Unsupported(String),
    /// The media kind string is not recognized
    #[display("Unknown media kind: {}", _0)]
    UnknownKind(String),
}

/// Media reference error with location tracking.
///
/// # Examples
///
/// ```
/// use vestry_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::InvalidUrl("not a url".to_string()));
/// assert!(format!("{}", err).contains("Invalid URL"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new media error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
