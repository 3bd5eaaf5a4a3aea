//! Overlay service errors.

/// Error returned when a call to the overlay service fails.
///
/// This is the only runtime failure the coordinator deals with. It is
/// never propagated out of coordinator operations: queries read it as
/// "not enabled" and writes record it in an [`ApplyReport`](crate::ApplyReport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// The remote call did not complete.
    #[error("remote call for overlay '{overlay}' failed: {message}")]
    Remote {
        /// Overlay the call was made for.
        overlay: String,
        /// Transport-level description of the failure.
        message: String,
    },
}

impl OverlayError {
    /// Creates a remote-communication error for `overlay`.
    pub fn remote(overlay: impl Into<String>, message: impl Into<String>) -> Self {
        OverlayError::Remote {
            overlay: overlay.into(),
            message: message.into(),
        }
    }

    /// Returns the overlay the failed call targeted.
    pub fn overlay(&self) -> &str {
        match self {
            OverlayError::Remote { overlay, .. } => overlay,
        }
    }
}
