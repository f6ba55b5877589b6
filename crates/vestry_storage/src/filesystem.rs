//! Filesystem-based object storage implementation.
//!
//! Buckets are directories under a base path; keys are relative paths
//! within a bucket. Writes are atomic (temp file + rename), and public
//! URLs are joined onto a configured base so a static file server in
//! front of the base path can serve committed media directly.

use crate::{ObjectStorage, UploadOptions};
use sha2::{Digest, Sha256};
use std::path::{Component, Path, PathBuf};
use vestry_error::{StorageError, StorageErrorKind, VestryResult};

/// Object storage backed by the local filesystem.
///
/// # Example Structure
///
/// ```text
/// /var/vestry/media/
/// └── site-media/              (bucket)
///     ├── images/
///     │   └── 3f2a…-1717….png
///     └── videos/
///         └── 9c41…-1717….mp4
/// ```
pub struct FileSystemStorage {
    base_path: PathBuf,
    public_base: String,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist. `public_base` is
    /// the URL prefix under which the base path is served.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path, public_base))]
    pub fn new(
        base_path: impl Into<PathBuf>,
        public_base: impl Into<String>,
    ) -> VestryResult<Self> {
        let base_path = base_path.into();
        let public_base = public_base.into().trim_end_matches('/').to_string();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem storage");
        Ok(Self {
            base_path,
            public_base,
        })
    }

    /// Create a bucket directory.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    pub async fn create_bucket(&self, bucket: &str) -> VestryResult<()> {
        let path = self.base_path.join(bucket);
        tokio::fs::create_dir_all(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(())
    }

    /// Compute SHA-256 hash of data, for audit logging.
    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// Resolve a bucket/key pair to a filesystem path, rejecting keys that
    /// would escape the bucket directory.
    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(
                "empty key".to_string(),
            )));
        }
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(
                key.to_string(),
            )));
        }
        Ok(self.base_path.join(bucket).join(relative))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for FileSystemStorage {
    #[tracing::instrument(skip(self))]
    async fn bucket_exists(&self, bucket: &str) -> VestryResult<bool> {
        let path = self.base_path.join(bucket);
        let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::BucketCheckFailed(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(exists)
    }

    #[tracing::instrument(
        skip(self, bytes, options),
        fields(size = bytes.len(), cache_control = options.cache_control_seconds)
    )]
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: &[u8],
        options: &UploadOptions,
    ) -> VestryResult<()> {
        let path = self.object_path(bucket, key)?;

        if !options.overwrite {
            let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
                StorageError::new(StorageErrorKind::ObjectWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            if exists {
                return Err(
                    StorageError::new(StorageErrorKind::KeyCollision(key.to_string())).into(),
                );
            }
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::ObjectWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::ObjectWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            hash = %Self::compute_hash(bytes),
            path = %path.display(),
            size = bytes.len(),
            "Stored media object"
        );

        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.public_base, bucket, key)
    }
}
