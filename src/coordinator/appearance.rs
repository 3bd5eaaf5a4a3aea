//! System appearance (dark/black theme groups).

use tracing::{debug, trace};

use super::{ApplyReport, ThemeCoordinator};
use crate::overlay::{OverlayService, UserId};
use crate::settings::DarkStyle;

impl<S: OverlayService + ?Sized> ThemeCoordinator<'_, S> {
    /// Switches between light, dark and black system appearance.
    ///
    /// Groups that are not wanted are disabled before the wanted group is
    /// enabled, so the dark and black groups are never on together. The
    /// stock dark theme is always turned off first, and the black/white
    /// accent pair is reconciled last since it depends on the result.
    pub fn set_system_theme(&self, user: UserId, use_dark_theme: bool, dark_style: DarkStyle) -> ApplyReport {
        let mut report = ApplyReport::new();
        self.unload_stock_dark_theme(user, &mut report);

        if dark_style == DarkStyle::Black || !use_dark_theme {
            self.set_group(self.catalog.dark_themes(), false, user, &mut report);
        }
        if dark_style == DarkStyle::Dark || !use_dark_theme {
            self.set_group(self.catalog.black_themes(), false, user, &mut report);
        }

        if use_dark_theme {
            let group = match dark_style {
                DarkStyle::Dark => self.catalog.dark_themes(),
                DarkStyle::Black => self.catalog.black_themes(),
            };
            self.set_group(group, true, user, &mut report);
        }

        report.merge(self.check_black_white_accent(user));
        debug!(%user, use_dark_theme, ?dark_style, "system theme set");
        report
    }

    fn unload_stock_dark_theme(&self, user: UserId, report: &mut ApplyReport) {
        let overlay = self.catalog.stock_dark_theme();
        if self.probe(overlay, user, report) {
            self.set(overlay, false, user, report);
        } else {
            trace!(%overlay, %user, "stock dark theme not enabled");
            report.record_skip();
        }
    }
}
