//! Top-level error wrapper types.

use crate::{ConfigError, MediaError, RegistryError, StorageError, UploadError};

/// This is the foundation error enum. Each Vestry crate contributes the
/// variant covering its own failure domain.
///
/// # Examples
///
/// ```
/// use vestry_error::{VestryError, ConfigError};
///
/// let cfg_err = ConfigError::new("Missing bucket name");
/// let err: VestryError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VestryErrorKind {
    /// Media reference error
    #[from(MediaError)]
    Media(MediaError),
    /// Upload coordinator error
    #[from(UploadError)]
    Upload(UploadError),
    /// Object storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Metadata registry error
    #[from(RegistryError)]
    Registry(RegistryError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Vestry error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vestry_error::{VestryResult, UploadError, UploadErrorKind};
///
/// fn might_fail() -> VestryResult<()> {
///     Err(UploadError::new(UploadErrorKind::AuthRequired))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vestry Error: {}", _0)]
pub struct VestryError(Box<VestryErrorKind>);

impl VestryError {
    /// Create a new error from a kind.
    pub fn new(kind: VestryErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VestryErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VestryErrorKind
impl<T> From<T> for VestryError
where
    T: Into<VestryErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vestry operations.
///
/// # Examples
///
/// ```
/// use vestry_error::{VestryResult, StorageError, StorageErrorKind};
///
/// fn check_bucket() -> VestryResult<bool> {
///     Err(StorageError::new(StorageErrorKind::Unavailable("offline".to_string())))?
/// }
/// ```
pub type VestryResult<T> = std::result::Result<T, VestryError>;
