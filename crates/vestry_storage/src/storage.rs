//! Object storage trait definition.

use vestry_error::VestryResult;

/// Write options for a single upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Whether an existing object at the same key may be replaced. The
    /// upload coordinator always disables this: a name collision is an
    /// upload failure, not a silent replace.
    pub overwrite: bool,
    /// Cache-control hint for downstream caches, in seconds.
    pub cache_control_seconds: u32,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            cache_control_seconds: 3600,
        }
    }
}

/// Trait for pluggable object storage backends.
///
/// Implementations hold the durable media bytes; metadata is recorded
/// separately through [`crate::MediaRegistry`].
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Check whether the named bucket exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the existence check itself fails (transport
    /// or backend fault), which callers must treat differently from a
    /// confirmed-absent bucket.
    async fn bucket_exists(&self, bucket: &str) -> VestryResult<bool>;

    /// Upload bytes to a bucket at the given key.
    ///
    /// # Errors
    ///
    /// Returns an error when the write is rejected, including a name
    /// collision while `options.overwrite` is false.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: &[u8],
        options: &UploadOptions,
    ) -> VestryResult<()>;

    /// Resolve the public URL for a stored key.
    ///
    /// Pure address construction; does not verify the object exists.
    fn public_url(&self, bucket: &str, key: &str) -> String;
}
