//! Overlay service trait and the values it exchanges.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::OverlayError;

/// Opaque identity of the user whose overlays are queried or changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        UserId(id)
    }
}

/// State of one overlay for one user, as reported by the service.
///
/// A returned `OverlayInfo` means the overlay exists for that user; the
/// service returns `None` for overlays it does not know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInfo {
    overlay: String,
    user: UserId,
    enabled: bool,
}

impl OverlayInfo {
    /// Creates an overlay snapshot.
    pub fn new(overlay: impl Into<String>, user: UserId, enabled: bool) -> Self {
        Self {
            overlay: overlay.into(),
            user,
            enabled,
        }
    }

    /// Returns the overlay identifier.
    pub fn overlay(&self) -> &str {
        &self.overlay
    }

    /// Returns the user this snapshot belongs to.
    pub fn user(&self) -> UserId {
        self.user
    }

    /// Returns whether the overlay is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// The external collaborator that owns overlay state.
///
/// Implementations talk to whatever actually applies overlays. Both
/// methods may fail with [`OverlayError`]; callers in this crate never
/// let that failure escape.
///
/// Methods take `&self`: the service is shared and handles its own
/// consistency between concurrent callers.
pub trait OverlayService {
    /// Looks up an overlay for a user. `Ok(None)` means the overlay is unknown.
    fn overlay_info(&self, overlay: &str, user: UserId) -> Result<Option<OverlayInfo>, OverlayError>;

    /// Enables or disables an overlay for a user.
    fn set_enabled(&self, overlay: &str, enabled: bool, user: UserId) -> Result<(), OverlayError>;
}

impl<T: OverlayService + ?Sized> OverlayService for &T {
    fn overlay_info(&self, overlay: &str, user: UserId) -> Result<Option<OverlayInfo>, OverlayError> {
        (**self).overlay_info(overlay, user)
    }

    fn set_enabled(&self, overlay: &str, enabled: bool, user: UserId) -> Result<(), OverlayError> {
        (**self).set_enabled(overlay, enabled, user)
    }
}

impl<T: OverlayService + ?Sized> OverlayService for Box<T> {
    fn overlay_info(&self, overlay: &str, user: UserId) -> Result<Option<OverlayInfo>, OverlayError> {
        (**self).overlay_info(overlay, user)
    }

    fn set_enabled(&self, overlay: &str, enabled: bool, user: UserId) -> Result<(), OverlayError> {
        (**self).set_enabled(overlay, enabled, user)
    }
}

impl<T: OverlayService + ?Sized> OverlayService for Arc<T> {
    fn overlay_info(&self, overlay: &str, user: UserId) -> Result<Option<OverlayInfo>, OverlayError> {
        (**self).overlay_info(overlay, user)
    }

    fn set_enabled(&self, overlay: &str, enabled: bool, user: UserId) -> Result<(), OverlayError> {
        (**self).set_enabled(overlay, enabled, user)
    }
}
