//! Upload coordinator error types.

/// Kinds of upload failures surfaced to the embedding form.
///
/// Every kind is terminal for the current attempt; the coordinator returns
/// to its pre-commit interactive state so the user may retry manually.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// The typed URL is not syntactically well-formed
    #[display("Invalid URL: {}", _0)]
    Validation(String),
    /// The selected file's MIME family does not match the configured kind
    #[display("Expected a {} file, got {}", expected, actual)]
    TypeMismatch {
        /// The MIME family required by the widget's configured kind
        expected: String,
        /// The MIME type of the rejected file
        actual: String,
    },
    /// No authenticated actor is present
    #[display("Authentication required to upload media")]
    AuthRequired,
    /// The destination bucket is missing or could not be checked
    #[display("Storage unavailable: {}", _0)]
    StorageUnavailable(String),
    /// The write to object storage was rejected
    #[display("Upload failed: {}", _0)]
    UploadFailed(String),
    /// The requested operation is not valid in the current stage
    #[display("No pending file to upload")]
    NothingPending,
    /// A commit is already in flight
    #[display("An upload is already in progress")]
    Busy,
}

/// Upload error with location tracking.
///
/// # Examples
///
/// ```
/// use vestry_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::AuthRequired);
/// assert!(format!("{}", err).contains("Authentication required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
