//! Error types for the Vestry media subsystem.
//!
//! This crate provides the foundation error types used throughout the Vestry
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vestry_error::{VestryResult, ConfigError};
//!
//! fn load_settings() -> VestryResult<String> {
//!     Err(ConfigError::new("Missing bucket name"))?
//! }
//!
//! match load_settings() {
//!     Ok(name) => println!("Bucket: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod media;
mod registry;
mod storage;
mod upload;

pub use config::ConfigError;
pub use error::{VestryError, VestryErrorKind, VestryResult};
pub use media::{MediaError, MediaErrorKind};
pub use registry::{RegistryError, RegistryErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use upload::{UploadError, UploadErrorKind};
