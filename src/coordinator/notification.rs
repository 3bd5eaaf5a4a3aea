//! Notification theme selection.

use tracing::debug;

use super::{ApplyReport, ThemeCoordinator};
use crate::overlay::{OverlayService, UserId};
use crate::settings::{DarkStyle, NotificationStyle};

/// Which notification overlay should end up enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationTarget {
    /// Neither notification overlay; light notifications.
    None,
    Dark,
    Black,
}

impl NotificationTarget {
    /// Resolves the requested notification style against the system
    /// appearance. An explicit style wins; `FollowSystem` mirrors the
    /// system theme.
    pub fn resolve(use_dark_theme: bool, dark_style: DarkStyle, style: NotificationStyle) -> Self {
        match (style, use_dark_theme, dark_style) {
            (NotificationStyle::Light, _, _) | (NotificationStyle::FollowSystem, false, _) => {
                NotificationTarget::None
            }
            (NotificationStyle::Dark, _, _) | (NotificationStyle::FollowSystem, true, DarkStyle::Dark) => {
                NotificationTarget::Dark
            }
            (NotificationStyle::Black, _, _) | (NotificationStyle::FollowSystem, true, DarkStyle::Black) => {
                NotificationTarget::Black
            }
        }
    }
}

impl<S: OverlayService + ?Sized> ThemeCoordinator<'_, S> {
    /// Applies the notification theme implied by the given settings.
    ///
    /// Only the two notification overlays are touched. The unwanted one is
    /// disabled before the wanted one is enabled.
    pub fn set_notification_theme(
        &self,
        user: UserId,
        use_dark_theme: bool,
        dark_style: DarkStyle,
        style: NotificationStyle,
    ) -> ApplyReport {
        let mut report = ApplyReport::new();
        let overlays = self.catalog.notification();
        let target = NotificationTarget::resolve(use_dark_theme, dark_style, style);

        match target {
            NotificationTarget::None => {
                self.set(&overlays.dark, false, user, &mut report);
                self.set(&overlays.black, false, user, &mut report);
            }
            NotificationTarget::Dark => {
                self.set(&overlays.black, false, user, &mut report);
                self.set(&overlays.dark, true, user, &mut report);
            }
            NotificationTarget::Black => {
                self.set(&overlays.dark, false, user, &mut report);
                self.set(&overlays.black, true, user, &mut report);
            }
        }

        debug!(%user, ?target, "notification theme set");
        report
    }
}
