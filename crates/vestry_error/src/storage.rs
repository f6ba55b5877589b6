//! Object storage error types.

/// Kinds of object storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// The named bucket does not exist
    #[display("Bucket not found: {}", _0)]
    BucketNotFound(String),
    /// The bucket existence check itself failed
    #[display("Bucket check failed: {}", _0)]
    BucketCheckFailed(String),
    /// A key already exists and overwriting is disabled
    #[display("Key collision: {}", _0)]
    KeyCollision(String),
    /// The storage key is not acceptable to the backend
    #[display("Invalid storage key: {}", _0)]
    InvalidKey(String),
    /// Failed to create a storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write an object
    #[display("Failed to write object: {}", _0)]
    ObjectWrite(String),
    /// Failed to read an object
    #[display("Failed to read object: {}", _0)]
    ObjectRead(String),
    /// Object not found at the specified key
    #[display("Object not found: {}", _0)]
    NotFound(String),
    /// Storage backend is unavailable
    #[display("Storage unavailable: {}", _0)]
    Unavailable(String),
}

/// Object storage error with location tracking.
///
/// # Examples
///
/// ```
/// use vestry_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::BucketNotFound("media".to_string()));
/// assert!(format!("{}", err).contains("Bucket not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
