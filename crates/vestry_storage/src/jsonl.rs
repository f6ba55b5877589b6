//! Append-only JSON-lines metadata registry.

use crate::{MediaRegistry, UploadRecord};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use vestry_error::{RegistryError, RegistryErrorKind, VestryResult};

/// Metadata registry backed by a JSON-lines file, one record per line.
pub struct JsonlRegistry {
    path: PathBuf,
}

impl JsonlRegistry {
    /// Create a registry writing to the given file.
    ///
    /// The file is created on first insert; the parent directory must
    /// exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read back all records, skipping unparseable lines.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read.
    pub async fn records(&self) -> VestryResult<Vec<UploadRecord>> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RegistryError::new(RegistryErrorKind::Unavailable(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        Ok(contents
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }
}

#[async_trait::async_trait]
impl MediaRegistry for JsonlRegistry {
    #[tracing::instrument(skip(self, record), fields(file_name = %record.file_name, kind = %record.kind))]
    async fn insert(&self, record: &UploadRecord) -> VestryResult<()> {
        let mut line = serde_json::to_string(record)
            .map_err(|e| RegistryError::new(RegistryErrorKind::Serialization(e.to_string())))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                RegistryError::new(RegistryErrorKind::Write(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?;

        file.write_all(line.as_bytes()).await.map_err(|e| {
            RegistryError::new(RegistryErrorKind::Write(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(url = %record.url, "Recorded upload metadata");
        Ok(())
    }
}
