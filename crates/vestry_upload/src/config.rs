//! Upload widget configuration.

use vestry_core::MediaKind;

/// Configuration supplied by the embedding form when mounting the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// The kind of media this widget accepts.
    pub kind: MediaKind,
    /// Destination bucket for committed uploads.
    pub bucket: String,
    /// URL already stored on the record being edited, if any. The widget
    /// starts committed on this value without invoking the callback.
    pub initial_url: Option<String>,
}

impl UploadConfig {
    /// Configuration for a widget with no pre-existing value.
    pub fn new(kind: MediaKind, bucket: impl Into<String>) -> Self {
        Self {
            kind,
            bucket: bucket.into(),
            initial_url: None,
        }
    }

    /// Start from an already-stored URL (editing an existing record).
    pub fn with_initial_url(mut self, url: impl Into<String>) -> Self {
        self.initial_url = Some(url.into());
        self
    }
}
