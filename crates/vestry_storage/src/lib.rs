//! Object storage and metadata registry boundaries for Vestry.
//!
//! This crate defines the two external collaborator seams the upload
//! coordinator drives: an object store holding media bytes and a
//! metadata registry recording who uploaded what. It also ships local
//! implementations of both so the system is exercisable without a hosted
//! backend.
//!
//! # Example
//!
//! ```rust
//! use vestry_storage::{FileSystemStorage, ObjectStorage, UploadOptions};
//!
//! # async fn example() -> vestry_error::VestryResult<()> {
//! let storage = FileSystemStorage::new("/tmp/vestry-media", "https://media.example.org")?;
//! storage.create_bucket("site-media").await?;
//!
//! let options = UploadOptions::default();
//! storage
//!     .upload("site-media", "images/banner.png", b"PNG bytes", &options)
//!     .await?;
//!
//! let url = storage.public_url("site-media", "images/banner.png");
//! assert_eq!(url, "https://media.example.org/site-media/images/banner.png");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod jsonl;
mod registry;
mod settings;
mod storage;

pub use filesystem::FileSystemStorage;
pub use jsonl::JsonlRegistry;
pub use registry::{MediaRegistry, UploadRecord};
pub use settings::StorageSettings;
pub use storage::{ObjectStorage, UploadOptions};
