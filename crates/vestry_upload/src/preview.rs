//! Ephemeral local-preview URLs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// An ephemeral URL for previewing a pending local file.
///
/// Models a browser object URL: valid only while the pending file is
/// alive, and revoked on every state transition that discards the file so
/// client-side memory stays bounded. Revocation also happens on drop, so
/// unmounting the coordinator cleans up automatically.
#[derive(Debug)]
pub struct PreviewUrl {
    url: String,
    revoked: Arc<AtomicBool>,
}

impl PreviewUrl {
    /// Mint a preview URL for the named pending file.
    pub(crate) fn mint(file_name: &str) -> Self {
        Self {
            url: format!("preview://{}/{}", Uuid::new_v4(), file_name),
            revoked: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The preview address, usable as an `<img>`/`<video>` source while
    /// unrevoked.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Explicitly revoke the preview.
    pub fn revoke(&self) {
        self.revoked.store(true, Ordering::SeqCst);
    }

    /// A handle that observes this preview's lifecycle, for callers that
    /// need to verify no preview outlives its file.
    pub fn handle(&self) -> PreviewHandle {
        PreviewHandle {
            revoked: Arc::clone(&self.revoked),
        }
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.revoke();
    }
}

/// Observer for a [`PreviewUrl`]'s revocation state.
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    revoked: Arc<AtomicBool>,
}

impl PreviewHandle {
    /// Whether the observed preview has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::SeqCst)
    }
}
