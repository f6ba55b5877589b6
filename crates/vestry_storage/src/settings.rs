//! Storage settings loaded from environment and optional TOML file.

use serde::Deserialize;
use vestry_error::{ConfigError, VestryResult};

/// Configuration for the storage layer.
///
/// Loaded from `VESTRY_`-prefixed environment variables layered over an
/// optional `vestry.toml`, with `.env` files honored via dotenvy.
///
/// # Examples
///
/// ```
/// use vestry_storage::StorageSettings;
///
/// let settings = StorageSettings::default();
/// assert_eq!(settings.bucket, "site-media");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageSettings {
    /// Root directory for the filesystem backend.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// URL prefix under which the base path is served.
    #[serde(default = "default_public_base")]
    pub public_base: String,
    /// Destination bucket for committed media.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Path of the JSON-lines metadata registry.
    #[serde(default = "default_registry_path")]
    pub registry_path: String,
}

fn default_base_path() -> String {
    "media".to_string()
}

fn default_public_base() -> String {
    "http://localhost:8080/media".to_string()
}

fn default_bucket() -> String {
    "site-media".to_string()
}

fn default_registry_path() -> String {
    "media/uploads.jsonl".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            public_base: default_public_base(),
            bucket: default_bucket(),
            registry_path: default_registry_path(),
        }
    }
}

impl StorageSettings {
    /// Load settings from `vestry.toml` (if present) and the environment.
    ///
    /// Environment variables take precedence, e.g. `VESTRY_BUCKET`
    /// overrides the `bucket` key.
    ///
    /// # Errors
    ///
    /// Returns error if a source is malformed or deserialization fails.
    pub fn load() -> VestryResult<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("vestry").required(false))
            .add_source(config::Environment::with_prefix("VESTRY"))
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        let settings: StorageSettings = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        Ok(settings)
    }
}
