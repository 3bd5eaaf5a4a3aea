//! Theme coordination over an overlay service.
//!
//! [`ThemeCoordinator`] turns a requested appearance, notification style
//! or accent into enable/disable calls against an [`OverlayService`],
//! keeping conflicting overlays from being enabled together:
//!
//! - the dark and black theme groups are never both enabled
//! - at most one notification theme is enabled
//! - the black/white accent pair follows the active theme
//!
//! Nothing is cached. Every operation starts from freshly queried state,
//! so a partially applied operation converges on the next call.

mod accent;
mod appearance;
mod notification;
mod report;

pub use notification::NotificationTarget;
pub use report::{ApplyReport, OverlayAction, OverlayFailure};

use tracing::{debug, warn};

use crate::catalog::OverlayCatalog;
use crate::overlay::{OverlayError, OverlayService, UserId};
use crate::settings::AppearanceSettings;

/// Applies theme, notification and accent selections for a user.
///
/// The coordinator borrows the service and a catalog; it owns no state of
/// its own and can be created per call. Every operation takes the
/// [`UserId`] it acts for.
///
/// Queries return `false` when the service fails or does not know the
/// overlay. Writes return an [`ApplyReport`]; they never abort on a
/// failed call.
///
/// # Example
///
/// ```rust
/// use theme_overlays::{DarkStyle, MemoryOverlayService, OverlayCatalog, ThemeCoordinator, UserId};
///
/// let user = UserId(0);
/// let service = MemoryOverlayService::new();
/// service.install_catalog(OverlayCatalog::builtin(), user);
///
/// let coordinator = ThemeCoordinator::new(&service);
/// let report = coordinator.set_system_theme(user, true, DarkStyle::Black);
///
/// assert!(report.is_clean());
/// assert!(coordinator.is_using_black_theme(user));
/// assert!(!coordinator.is_using_dark_theme(user));
/// ```
pub struct ThemeCoordinator<'a, S: ?Sized> {
    service: &'a S,
    catalog: &'a OverlayCatalog,
}

impl<'a, S: OverlayService + ?Sized> ThemeCoordinator<'a, S> {
    /// Creates a coordinator over the built-in catalog.
    pub fn new(service: &'a S) -> Self {
        Self::with_catalog(service, OverlayCatalog::builtin())
    }

    /// Creates a coordinator over a specific catalog.
    pub fn with_catalog(service: &'a S, catalog: &'a OverlayCatalog) -> Self {
        Self { service, catalog }
    }

    /// Returns the catalog in use.
    pub fn catalog(&self) -> &'a OverlayCatalog {
        self.catalog
    }

    /// Returns true if the dark theme group is enabled.
    ///
    /// Only the group's first overlay is queried.
    pub fn is_using_dark_theme(&self, user: UserId) -> bool {
        self.enabled_or_false(self.catalog.dark_sentinel(), user)
    }

    /// Returns true if the black theme group is enabled.
    ///
    /// Only the group's first overlay is queried.
    pub fn is_using_black_theme(&self, user: UserId) -> bool {
        self.enabled_or_false(self.catalog.black_sentinel(), user)
    }

    /// Returns true if the dark notification theme is enabled.
    pub fn is_using_dark_notification_theme(&self, user: UserId) -> bool {
        self.enabled_or_false(&self.catalog.notification().dark, user)
    }

    /// Returns true if the black notification theme is enabled.
    pub fn is_using_black_notification_theme(&self, user: UserId) -> bool {
        self.enabled_or_false(&self.catalog.notification().black, user)
    }

    /// Applies a whole settings snapshot: system theme, then notification
    /// theme, then accent.
    pub fn apply(&self, user: UserId, settings: &AppearanceSettings) -> ApplyReport {
        let mut report = self.set_system_theme(user, settings.use_dark_theme, settings.dark_style);
        report.merge(self.set_notification_theme(
            user,
            settings.use_dark_theme,
            settings.dark_style,
            settings.notification_style,
        ));
        report.merge(self.update_accents(user, settings.accent));

        debug!(
            %user,
            attempted = report.attempted(),
            failed = report.failures().len(),
            "applied appearance settings"
        );
        report
    }

    fn overlay_enabled(&self, overlay: &str, user: UserId) -> Result<bool, OverlayError> {
        Ok(self
            .service
            .overlay_info(overlay, user)?
            .is_some_and(|info| info.is_enabled()))
    }

    fn enabled_or_false(&self, overlay: &str, user: UserId) -> bool {
        self.overlay_enabled(overlay, user).unwrap_or_else(|err| {
            warn!(%overlay, %user, error = %err, "overlay query failed, treating as disabled");
            false
        })
    }

    /// Like [`Self::enabled_or_false`], recording a failed query in `report`.
    fn probe(&self, overlay: &str, user: UserId, report: &mut ApplyReport) -> bool {
        match self.overlay_enabled(overlay, user) {
            Ok(enabled) => enabled,
            Err(err) => {
                warn!(%overlay, %user, error = %err, "overlay query failed, treating as disabled");
                report.record_failure(overlay, OverlayAction::Query, err);
                false
            }
        }
    }

    /// Whether either the dark or the black theme group is active.
    fn dark_theme_active(&self, user: UserId, report: &mut ApplyReport) -> bool {
        self.probe(self.catalog.dark_sentinel(), user, report)
            || self.probe(self.catalog.black_sentinel(), user, report)
    }

    /// Issues one write. Returns whether the service accepted it.
    fn set(&self, overlay: &str, enabled: bool, user: UserId, report: &mut ApplyReport) -> bool {
        report.record_write();
        match self.service.set_enabled(overlay, enabled, user) {
            Ok(()) => {
                debug!(%overlay, %user, enabled, "overlay updated");
                true
            }
            Err(err) => {
                warn!(%overlay, %user, enabled, error = %err, "overlay update failed");
                report.record_failure(overlay, OverlayAction::for_write(enabled), err);
                false
            }
        }
    }

    /// Writes every overlay of a group in order, continuing past failures.
    fn set_group(&self, group: &[String], enabled: bool, user: UserId, report: &mut ApplyReport) {
        for overlay in group {
            self.set(overlay, enabled, user, report);
        }
    }
}
