//! The upload coordinator state machine.

use crate::{PreviewUrl, UploadConfig};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use vestry_core::Actor;
use vestry_error::{UploadError, UploadErrorKind};
use vestry_media::{classify, embed_url, file_extension};
use vestry_storage::{MediaRegistry, ObjectStorage, UploadOptions, UploadRecord};

/// The widget's position in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, derive_more::Display)]
pub enum Stage {
    /// No media yet.
    #[display("empty")]
    Empty,
    /// The URL-entry tab is active.
    #[display("url")]
    UrlMode,
    /// The file-upload tab is active.
    #[display("upload")]
    UploadMode,
    /// A durable URL has been handed to the embedding form.
    #[display("committed")]
    Committed,
}

/// A local file selected for upload, held in memory until committed or
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// Original filename.
    pub file_name: String,
    /// Declared MIME type.
    pub mime_type: String,
}

/// State machine mediating between URL entry and file upload.
///
/// See the crate docs for the lifecycle. The coordinator owns the pending
/// file and its preview URL; every transition that discards the file also
/// revokes the preview.
///
/// # Examples
///
/// ```no_run
/// use std::sync::{Arc, Mutex};
/// use vestry_core::MediaKind;
/// use vestry_storage::{FileSystemStorage, JsonlRegistry};
/// use vestry_upload::{UploadConfig, UploadCoordinator};
///
/// # fn main() -> vestry_error::VestryResult<()> {
/// let storage = Arc::new(FileSystemStorage::new("media", "https://media.example.org")?);
/// let registry = Arc::new(JsonlRegistry::new("media/uploads.jsonl"));
/// let committed = Arc::new(Mutex::new(String::new()));
///
/// let sink = Arc::clone(&committed);
/// let mut widget = UploadCoordinator::new(
///     UploadConfig::new(MediaKind::Image, "site-media"),
///     storage,
///     registry,
///     move |url| *sink.lock().unwrap() = url.to_string(),
/// );
///
/// widget.select_url_mode();
/// widget.set_typed_url("https://example.com/banner.png");
/// widget.commit_url().unwrap();
/// assert_eq!(*committed.lock().unwrap(), "https://example.com/banner.png");
/// # Ok(())
/// # }
/// ```
pub struct UploadCoordinator {
    config: UploadConfig,
    storage: Arc<dyn ObjectStorage>,
    registry: Arc<dyn MediaRegistry>,
    on_media_committed: Box<dyn FnMut(&str) + Send>,
    stage: Stage,
    typed_url: Option<String>,
    pending: Option<PendingFile>,
    preview: Option<PreviewUrl>,
    committed_url: Option<String>,
    last_error: Option<UploadError>,
    busy: bool,
    registry_failures: AtomicU64,
}

impl UploadCoordinator {
    /// Mount a widget with the given collaborators and callback.
    ///
    /// When `config.initial_url` is set the widget starts committed on
    /// that value; the callback is not invoked for it.
    pub fn new(
        config: UploadConfig,
        storage: Arc<dyn ObjectStorage>,
        registry: Arc<dyn MediaRegistry>,
        on_media_committed: impl FnMut(&str) + Send + 'static,
    ) -> Self {
        let committed_url = config.initial_url.clone();
        let stage = if committed_url.is_some() {
            Stage::Committed
        } else {
            Stage::Empty
        };
        Self {
            config,
            storage,
            registry,
            on_media_committed: Box::new(on_media_committed),
            stage,
            typed_url: None,
            pending: None,
            preview: None,
            committed_url,
            last_error: None,
            busy: false,
            registry_failures: AtomicU64::new(0),
        }
    }

    /// Current lifecycle stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The committed URL, when the widget is in [`Stage::Committed`].
    pub fn committed_url(&self) -> Option<&str> {
        self.committed_url.as_deref()
    }

    /// The error from the last failed operation, cleared on mode changes.
    pub fn last_error(&self) -> Option<&UploadError> {
        self.last_error.as_ref()
    }

    /// The pending local file, if one is selected.
    pub fn pending(&self) -> Option<&PendingFile> {
        self.pending.as_ref()
    }

    /// The preview URL for the pending file, if one is selected.
    pub fn preview(&self) -> Option<&PreviewUrl> {
        self.preview.as_ref()
    }

    /// Whether a commit is in flight; the interface disables the commit
    /// action while true.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// How many best-effort registry inserts have failed since mount.
    pub fn registry_failures(&self) -> u64 {
        self.registry_failures.load(Ordering::Relaxed)
    }

    /// A renderable preview for the typed URL, if it classifies to one.
    pub fn url_preview(&self) -> Option<String> {
        let typed = self.typed_url.as_deref()?;
        embed_url(&classify(typed))
    }

    /// Switch to the URL-entry tab, discarding any pending file and its
    /// preview, and resetting any displayed error.
    pub fn select_url_mode(&mut self) {
        self.pending = None;
        self.preview = None;
        self.last_error = None;
        self.stage = Stage::UrlMode;
    }

    /// Switch to the file-upload tab, clearing any typed URL and
    /// resetting any displayed error.
    pub fn select_upload_mode(&mut self) {
        self.typed_url = None;
        self.last_error = None;
        self.stage = Stage::UploadMode;
    }

    /// Store the candidate URL text. Not validated until commit.
    pub fn set_typed_url(&mut self, text: impl Into<String>) {
        self.typed_url = Some(text.into());
    }

    /// Validate the typed URL and hand it to the embedding form.
    ///
    /// Pure client-side parse; no network. On success the callback fires
    /// with the URL as typed and the widget transitions to committed. On
    /// failure the widget stays in URL mode with a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`UploadErrorKind::Validation`] when the candidate is
    /// absent or not a syntactically well-formed URL.
    pub fn commit_url(&mut self) -> Result<(), UploadError> {
        let candidate = self.typed_url.clone().unwrap_or_default();
        if let Err(e) = url::Url::parse(&candidate) {
            return Err(self.fail(UploadErrorKind::Validation(format!("{candidate}: {e}"))));
        }

        (self.on_media_committed)(&candidate);
        self.committed_url = Some(candidate);
        self.typed_url = None;
        self.last_error = None;
        self.stage = Stage::Committed;
        Ok(())
    }

    /// Select a local file for upload.
    ///
    /// The declared MIME type must begin with the family matching the
    /// widget's configured kind (`image/` or `video/`). On match the file
    /// becomes pending and a fresh preview URL is minted, revoking any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns [`UploadErrorKind::TypeMismatch`] on the wrong MIME family;
    /// the pending-file state is left unchanged.
    pub fn select_local_file(
        &mut self,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), UploadError> {
        let file_name = file_name.into();
        let mime_type = mime_type.into();

        let family = self.config.kind.mime_family();
        if !mime_type.starts_with(family) {
            return Err(self.fail(UploadErrorKind::TypeMismatch {
                expected: self.config.kind.to_string(),
                actual: mime_type,
            }));
        }

        self.preview = Some(PreviewUrl::mint(&file_name));
        self.pending = Some(PendingFile {
            bytes,
            file_name,
            mime_type,
        });
        self.last_error = None;
        self.stage = Stage::UploadMode;
        Ok(())
    }

    /// Upload the pending file and hand its public URL to the embedding
    /// form.
    ///
    /// Runs the side-effect sequence of the commit: bucket existence
    /// check, upload with overwrite disabled and a one-hour cache-control
    /// hint, public URL resolution, then a best-effort registry insert
    /// whose failure is logged and counted but never surfaced. The calls
    /// are sequential and not retried. The callback fires exactly once,
    /// on confirmed success.
    ///
    /// # Errors
    ///
    /// Fails without any storage call when a commit is already in flight,
    /// the pending file is absent, or `actor` is `None`. Otherwise
    /// returns [`UploadErrorKind::StorageUnavailable`] when the bucket is
    /// missing or its check fails, and [`UploadErrorKind::UploadFailed`]
    /// when the write is rejected. Every failure leaves the pending file
    /// in place so the user may retry.
    #[tracing::instrument(skip(self, actor), fields(kind = %self.config.kind, bucket = %self.config.bucket))]
    pub async fn commit_upload(&mut self, actor: Option<&Actor>) -> Result<String, UploadError> {
        // `&mut self` is the actual re-entrancy guard: a second caller
        // cannot reach this method while a commit holds the borrow. The
        // flag only carries the in-flight state out through `is_busy` so
        // the interface can disable the commit control, and the check
        // keeps the refusal if the widget is ever driven through shared
        // interior mutability.
        if self.busy {
            return Err(self.fail(UploadErrorKind::Busy));
        }
        if self.pending.is_none() {
            return Err(self.fail(UploadErrorKind::NothingPending));
        }
        let Some(actor) = actor else {
            return Err(self.fail(UploadErrorKind::AuthRequired));
        };
        let actor_id = actor.id().clone();

        self.busy = true;
        let Some(pending) = self.pending.take() else {
            self.busy = false;
            return Err(self.fail(UploadErrorKind::NothingPending));
        };
        let result = self.run_commit(&pending, &actor_id).await;
        self.busy = false;

        match result {
            Ok(url) => {
                self.preview = None;
                self.last_error = None;
                (self.on_media_committed)(&url);
                self.committed_url = Some(url.clone());
                self.stage = Stage::Committed;
                Ok(url)
            }
            Err(kind) => {
                // Failure is terminal for this attempt only; the file
                // stays pending so the user may retry.
                self.pending = Some(pending);
                Err(self.fail(kind))
            }
        }
    }

    /// Clear all working state and report removal to the embedding form.
    ///
    /// The callback fires with the empty string and the widget returns to
    /// [`Stage::Empty`], from any prior stage.
    pub fn remove(&mut self) {
        self.typed_url = None;
        self.pending = None;
        self.preview = None;
        self.committed_url = None;
        self.last_error = None;
        (self.on_media_committed)("");
        self.stage = Stage::Empty;
    }

    /// The sequential side-effect pipeline of a commit.
    async fn run_commit(
        &self,
        pending: &PendingFile,
        actor_id: &str,
    ) -> Result<String, UploadErrorKind> {
        let key = self.storage_key(&pending.file_name);
        let bucket = &self.config.bucket;

        match self.storage.bucket_exists(bucket).await {
            Ok(true) => {}
            Ok(false) => {
                return Err(UploadErrorKind::StorageUnavailable(format!(
                    "bucket {bucket} does not exist"
                )));
            }
            Err(e) => {
                return Err(UploadErrorKind::StorageUnavailable(e.to_string()));
            }
        }

        let options = UploadOptions {
            overwrite: false,
            cache_control_seconds: 3600,
        };
        self.storage
            .upload(bucket, &key, &pending.bytes, &options)
            .await
            .map_err(|e| UploadErrorKind::UploadFailed(e.to_string()))?;

        let url = self.storage.public_url(bucket, &key);
        tracing::info!(key = %key, url = %url, "Upload committed");

        let record = UploadRecord::new(
            &pending.file_name,
            self.config.kind,
            pending.bytes.len() as u64,
            &url,
            actor_id,
        );
        if let Err(e) = self.registry.insert(&record).await {
            self.registry_failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(error = %e, url = %url, "Metadata registry insert failed");
        }

        Ok(url)
    }

    /// Collision-resistant storage key: kind namespace, random token,
    /// timestamp, original extension.
    fn storage_key(&self, file_name: &str) -> String {
        let ext = file_extension(file_name)
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        format!(
            "{}/{}-{}{}",
            self.config.kind.namespace(),
            uuid::Uuid::new_v4(),
            chrono::Utc::now().timestamp_millis(),
            ext
        )
    }

    /// Record and return an error for display in the widget's error area.
    fn fail(&mut self, kind: UploadErrorKind) -> UploadError {
        let err = UploadError::new(kind);
        self.last_error = Some(err.clone());
        err
    }
}
