//! Authenticated actor identity.

use serde::{Deserialize, Serialize};

/// The authenticated user performing an upload.
///
/// Supplied by the hosting application's authentication layer and passed
/// explicitly into the upload coordinator; Vestry never reads ambient
/// session state. The identifier is opaque to this crate and is used only
/// for attribution in the metadata registry.
///
/// # Examples
///
/// ```
/// use vestry_core::Actor;
///
/// let actor = Actor::new("user-42").with_display_name("Amara O.");
/// assert_eq!(actor.id().as_str(), "user-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Actor {
    /// Opaque identifier from the authentication collaborator.
    id: String,
    /// Human-readable name, if the hosting application has one.
    display_name: Option<String>,
}

impl Actor {
    /// Create an actor from an opaque identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }

    /// Attach a display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
