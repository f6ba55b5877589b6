//! Metadata registry error types.

/// Kinds of metadata registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RegistryErrorKind {
    /// Failed to serialize the record
    #[display("Failed to serialize record: {}", _0)]
    Serialization(String),
    /// Failed to append the record to the registry
    #[display("Failed to write record: {}", _0)]
    Write(String),
    /// Registry backend is unavailable
    #[display("Registry unavailable: {}", _0)]
    Unavailable(String),
}

/// Metadata registry error with location tracking.
///
/// Registry failures are best-effort from the uploader's perspective: the
/// coordinator logs them but never fails a commit over them.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Registry Error: {} at line {} in {}", kind, line, file)]
pub struct RegistryError {
    /// The kind of error that occurred
    pub kind: RegistryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RegistryError {
    /// Create a new registry error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RegistryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
