//! Tests for the upload coordinator state machine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use vestry_core::{Actor, MediaKind};
use vestry_error::{StorageError, StorageErrorKind, UploadErrorKind, VestryResult};
use vestry_storage::{MediaRegistry, ObjectStorage, UploadOptions, UploadRecord};
use vestry_upload::{Stage, UploadConfig, UploadCoordinator};

/// Object storage double that counts calls and records upload keys.
struct CountingStorage {
    bucket_present: bool,
    fail_bucket_check: bool,
    fail_upload: bool,
    bucket_checks: AtomicU64,
    uploads: AtomicU64,
    keys: Mutex<Vec<String>>,
}

impl CountingStorage {
    fn healthy() -> Self {
        Self {
            bucket_present: true,
            fail_bucket_check: false,
            fail_upload: false,
            bucket_checks: AtomicU64::new(0),
            uploads: AtomicU64::new(0),
            keys: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStorage for CountingStorage {
    async fn bucket_exists(&self, _bucket: &str) -> VestryResult<bool> {
        self.bucket_checks.fetch_add(1, Ordering::SeqCst);
        if self.fail_bucket_check {
            return Err(StorageError::new(StorageErrorKind::BucketCheckFailed(
                "transport error".to_string(),
            ))
            .into());
        }
        Ok(self.bucket_present)
    }

    async fn upload(
        &self,
        _bucket: &str,
        key: &str,
        _bytes: &[u8],
        _options: &UploadOptions,
    ) -> VestryResult<()> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        if self.fail_upload {
            return Err(
                StorageError::new(StorageErrorKind::KeyCollision(key.to_string())).into(),
            );
        }
        self.keys.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("https://cdn.test/{bucket}/{key}")
    }
}

/// Registry double that counts inserts and can fail on demand.
struct CountingRegistry {
    fail: bool,
    inserts: AtomicU64,
    records: Mutex<Vec<UploadRecord>>,
}

impl CountingRegistry {
    fn healthy() -> Self {
        Self {
            fail: false,
            inserts: AtomicU64::new(0),
            records: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            inserts: AtomicU64::new(0),
            records: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl MediaRegistry for CountingRegistry {
    async fn insert(&self, record: &UploadRecord) -> VestryResult<()> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StorageError::new(StorageErrorKind::Unavailable(
                "registry quota exceeded".to_string(),
            ))
            .into());
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

fn widget(
    kind: MediaKind,
    storage: Arc<CountingStorage>,
    registry: Arc<CountingRegistry>,
) -> (UploadCoordinator, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let coordinator = UploadCoordinator::new(
        UploadConfig::new(kind, "site-media"),
        storage,
        registry,
        move |url| sink.lock().unwrap().push(url.to_string()),
    );
    (coordinator, calls)
}

#[tokio::test]
async fn test_mode_switch_discards_pending_file_and_preview() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, _calls) = widget(MediaKind::Image, storage, registry);

    widget.select_upload_mode();
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();
    let handle = widget.preview().unwrap().handle();
    assert!(!handle.is_revoked());

    widget.select_url_mode();
    assert!(widget.pending().is_none());
    assert!(widget.preview().is_none());
    assert!(handle.is_revoked(), "preview object URL leaked");
    assert_eq!(widget.stage(), Stage::UrlMode);
}

#[tokio::test]
async fn test_type_mismatch_leaves_pending_state_unchanged() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, _calls) = widget(MediaKind::Image, storage, registry);

    widget.select_upload_mode();
    let err = widget
        .select_local_file("report.pdf", "application/pdf", b"%PDF".to_vec())
        .unwrap_err();
    assert!(matches!(err.kind, UploadErrorKind::TypeMismatch { .. }));
    assert!(widget.pending().is_none());

    // A previously accepted file survives a later mismatch
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();
    let _ = widget
        .select_local_file("report.pdf", "application/pdf", b"%PDF".to_vec())
        .unwrap_err();
    assert_eq!(widget.pending().unwrap().file_name, "banner.png");
}

#[tokio::test]
async fn test_commit_without_actor_attempts_no_storage_calls() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, calls) = widget(MediaKind::Image, Arc::clone(&storage), registry);

    widget.select_upload_mode();
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();

    let err = widget.commit_upload(None).await.unwrap_err();
    assert!(matches!(err.kind, UploadErrorKind::AuthRequired));
    assert_eq!(storage.bucket_checks.load(Ordering::SeqCst), 0);
    assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
    assert!(calls.lock().unwrap().is_empty());
    assert!(widget.pending().is_some(), "file must survive for retry");
}

#[tokio::test]
async fn test_missing_bucket_prevents_upload() {
    let storage = Arc::new(CountingStorage {
        bucket_present: false,
        ..CountingStorage::healthy()
    });
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, calls) = widget(MediaKind::Image, Arc::clone(&storage), registry);
    let actor = Actor::new("user-42");

    widget.select_upload_mode();
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();

    let err = widget.commit_upload(Some(&actor)).await.unwrap_err();
    assert!(matches!(err.kind, UploadErrorKind::StorageUnavailable(_)));
    assert_eq!(storage.bucket_checks.load(Ordering::SeqCst), 1);
    assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_bucket_check_prevents_upload() {
    let storage = Arc::new(CountingStorage {
        fail_bucket_check: true,
        ..CountingStorage::healthy()
    });
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, _calls) = widget(MediaKind::Image, Arc::clone(&storage), registry);
    let actor = Actor::new("user-42");

    widget.select_upload_mode();
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();

    let err = widget.commit_upload(Some(&actor)).await.unwrap_err();
    assert!(matches!(err.kind, UploadErrorKind::StorageUnavailable(_)));
    assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_successful_commit_reports_public_url_once() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, calls) =
        widget(MediaKind::Image, Arc::clone(&storage), Arc::clone(&registry));
    let actor = Actor::new("user-42");

    widget.select_upload_mode();
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();
    let handle = widget.preview().unwrap().handle();

    let url = widget.commit_upload(Some(&actor)).await.unwrap();

    let keys = storage.keys.lock().unwrap();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].starts_with("images/"), "key {:?}", keys[0]);
    assert!(keys[0].ends_with(".png"), "key {:?}", keys[0]);
    assert_eq!(url, format!("https://cdn.test/site-media/{}", keys[0]));

    assert_eq!(*calls.lock().unwrap(), vec![url.clone()]);

    assert_eq!(widget.stage(), Stage::Committed);
    assert_eq!(widget.committed_url(), Some(url.as_str()));
    assert!(widget.pending().is_none());
    assert!(handle.is_revoked());

    let records = registry.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].file_name, "banner.png");
    assert_eq!(records[0].actor_id, "user-42");
    assert_eq!(records[0].url, url);
}

#[tokio::test]
async fn test_registry_failure_does_not_fail_commit() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::failing());
    let (mut widget, calls) =
        widget(MediaKind::Video, Arc::clone(&storage), Arc::clone(&registry));
    let actor = Actor::new("user-42");

    widget.select_upload_mode();
    widget
        .select_local_file("sermon.mp4", "video/mp4", b"MP4".to_vec())
        .unwrap();

    let url = widget.commit_upload(Some(&actor)).await.unwrap();

    assert_eq!(registry.inserts.load(Ordering::SeqCst), 1);
    assert_eq!(widget.registry_failures(), 1);
    assert_eq!(*calls.lock().unwrap(), vec![url]);
    assert_eq!(widget.stage(), Stage::Committed);

    let keys = storage.keys.lock().unwrap();
    assert!(keys[0].starts_with("videos/"), "key {:?}", keys[0]);
}

#[tokio::test]
async fn test_upload_failure_is_terminal_but_retryable() {
    let storage = Arc::new(CountingStorage {
        fail_upload: true,
        ..CountingStorage::healthy()
    });
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, calls) =
        widget(MediaKind::Image, Arc::clone(&storage), Arc::clone(&registry));
    let actor = Actor::new("user-42");

    widget.select_upload_mode();
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();

    let err = widget.commit_upload(Some(&actor)).await.unwrap_err();
    assert!(matches!(err.kind, UploadErrorKind::UploadFailed(_)));
    assert_eq!(storage.uploads.load(Ordering::SeqCst), 1, "no retry");
    assert_eq!(registry.inserts.load(Ordering::SeqCst), 0);
    assert!(calls.lock().unwrap().is_empty());

    assert_eq!(widget.stage(), Stage::UploadMode);
    assert!(widget.pending().is_some());
    assert!(widget.last_error().is_some());
    assert!(!widget.is_busy());
}

#[tokio::test]
async fn test_busy_flag_clears_after_successful_commit() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, _calls) = widget(MediaKind::Image, storage, registry);
    let actor = Actor::new("user-42");

    assert!(!widget.is_busy());
    widget.select_upload_mode();
    widget
        .select_local_file("banner.png", "image/png", b"PNG".to_vec())
        .unwrap();
    widget.commit_upload(Some(&actor)).await.unwrap();
    assert!(!widget.is_busy(), "flag must clear once the commit settles");
}

#[tokio::test]
async fn test_commit_url_validates_before_callback() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, calls) = widget(MediaKind::Image, storage, registry);

    widget.select_url_mode();
    widget.set_typed_url("not a url");
    let err = widget.commit_url().unwrap_err();
    assert!(matches!(err.kind, UploadErrorKind::Validation(_)));
    assert_eq!(widget.stage(), Stage::UrlMode);
    assert!(calls.lock().unwrap().is_empty());

    widget.set_typed_url("https://youtu.be/dQw4w9WgXcQ");
    widget.commit_url().unwrap();
    assert_eq!(widget.stage(), Stage::Committed);
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["https://youtu.be/dQw4w9WgXcQ".to_string()]
    );
}

#[tokio::test]
async fn test_url_preview_resolves_through_classifier() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, _calls) = widget(MediaKind::Video, storage, registry);

    widget.select_url_mode();
    widget.set_typed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(
        widget.url_preview(),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
    );
}

#[tokio::test]
async fn test_remove_reports_empty_string_from_any_stage() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let (mut widget, calls) = widget(MediaKind::Image, storage, registry);

    widget.select_url_mode();
    widget.set_typed_url("https://example.com/banner.png");
    widget.commit_url().unwrap();
    assert_eq!(widget.stage(), Stage::Committed);

    widget.remove();
    assert_eq!(widget.stage(), Stage::Empty);
    assert!(widget.committed_url().is_none());
    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            "https://example.com/banner.png".to_string(),
            String::new()
        ]
    );
}

#[tokio::test]
async fn test_initial_url_starts_committed_without_callback() {
    let storage = Arc::new(CountingStorage::healthy());
    let registry = Arc::new(CountingRegistry::healthy());
    let calls = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&calls);

    let widget = UploadCoordinator::new(
        UploadConfig::new(MediaKind::Image, "site-media")
            .with_initial_url("https://cdn.test/site-media/images/existing.png"),
        storage,
        registry,
        move |url| sink.lock().unwrap().push(url.to_string()),
    );

    assert_eq!(widget.stage(), Stage::Committed);
    assert_eq!(
        widget.committed_url(),
        Some("https://cdn.test/site-media/images/existing.png")
    );
    assert!(calls.lock().unwrap().is_empty());
}
