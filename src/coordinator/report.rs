//! Outcome of a coordinator write operation.

use std::fmt;

use crate::overlay::OverlayError;

/// What the coordinator was doing when a call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayAction {
    Query,
    Enable,
    Disable,
}

impl OverlayAction {
    pub(crate) fn for_write(enabled: bool) -> Self {
        if enabled {
            OverlayAction::Enable
        } else {
            OverlayAction::Disable
        }
    }
}

impl fmt::Display for OverlayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverlayAction::Query => "query",
            OverlayAction::Enable => "enable",
            OverlayAction::Disable => "disable",
        })
    }
}

/// A single failed call to the overlay service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayFailure {
    pub overlay: String,
    pub action: OverlayAction,
    pub error: OverlayError,
}

/// Summary of one coordinator operation.
///
/// Operations never stop at the first failed call. Every failure is
/// collected here and the rest of the work carries on, so a report with
/// failures still describes a partially applied state that the next
/// invocation will converge from.
///
/// # Example
///
/// ```rust
/// use theme_overlays::{MemoryOverlayService, OverlayCatalog, ThemeCoordinator, UserId};
///
/// let service = MemoryOverlayService::new();
/// service.install_catalog(OverlayCatalog::builtin(), UserId(0));
/// service.fail_on("com.accents.teal");
///
/// let report = ThemeCoordinator::new(&service).unload_accents(UserId(0));
/// assert_eq!(report.attempted(), 28);
/// assert_eq!(report.failures().len(), 1);
/// assert!(!report.is_clean());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "a report may carry failures that should be inspected or logged"]
pub struct ApplyReport {
    attempted: usize,
    skipped: usize,
    failures: Vec<OverlayFailure>,
}

impl ApplyReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of enable/disable calls issued.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of writes left out because the overlay was already in the
    /// wanted state, or because the operation had nothing to do.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Failed calls, in the order they happened.
    pub fn failures(&self) -> &[OverlayFailure] {
        &self.failures
    }

    /// Returns true if no call failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: ApplyReport) {
        self.attempted += other.attempted;
        self.skipped += other.skipped;
        self.failures.extend(other.failures);
    }

    pub(crate) fn record_write(&mut self) {
        self.attempted += 1;
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn record_failure(&mut self, overlay: &str, action: OverlayAction, error: OverlayError) {
        self.failures.push(OverlayFailure {
            overlay: overlay.to_string(),
            action,
            error,
        });
    }
}

impl<'a> IntoIterator for &'a ApplyReport {
    type Item = &'a OverlayFailure;
    type IntoIter = std::slice::Iter<'a, OverlayFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
