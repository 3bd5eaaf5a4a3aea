//! Accent selection and the black/white accent pair.
//!
//! Selecting an ordinary accent only enables it. Exclusion between
//! ordinary accents is left to the overlay service, or to callers that
//! run [`ThemeCoordinator::unload_accents`] before switching.

use tracing::{debug, trace, warn};

use super::{ApplyReport, ThemeCoordinator};
use crate::overlay::{OverlayService, UserId};

impl<S: OverlayService + ?Sized> ThemeCoordinator<'_, S> {
    /// Returns true if the accent at `index` is enabled.
    ///
    /// Index 0 ("no accent") and out-of-range indices are never enabled.
    pub fn is_using_accent(&self, user: UserId, index: i32) -> bool {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.catalog.accent(index))
            .is_some_and(|overlay| self.enabled_or_false(overlay, user))
    }

    /// Selects an accent by index.
    ///
    /// - `0` unloads every accent.
    /// - The black accent index picks the member of the pair that suits
    ///   the current theme: white when a dark or black theme is active,
    ///   black otherwise.
    /// - The white accent index does nothing; it is only reached through
    ///   the black accent index.
    /// - Any other index in range enables that accent without disabling
    ///   the previous one.
    /// - Out-of-range values are ignored.
    pub fn update_accents(&self, user: UserId, accent_setting: i32) -> ApplyReport {
        let mut report = ApplyReport::new();
        let pair = self.catalog.paired_accents();

        let index = match usize::try_from(accent_setting) {
            Ok(index) if index < self.catalog.accent_count() => index,
            _ => {
                warn!(%user, accent = accent_setting, "accent setting out of range, ignoring");
                report.record_skip();
                return report;
            }
        };

        if index == 0 {
            return self.unload_accents(user);
        }
        if index == pair.white {
            debug!(%user, accent = index, "white accent is selected through the black accent, ignoring");
            report.record_skip();
            return report;
        }

        let target = if index == pair.black && self.dark_theme_active(user, &mut report) {
            pair.white
        } else {
            index
        };
        if let Some(overlay) = self.catalog.accent(target) {
            self.set(overlay, true, user, &mut report);
        }
        report
    }

    /// Disables every accent overlay, attempting all of them even when some fail.
    pub fn unload_accents(&self, user: UserId) -> ApplyReport {
        let mut report = ApplyReport::new();
        for (_, overlay) in self.catalog.accent_overlays() {
            self.set(overlay, false, user, &mut report);
        }
        debug!(%user, failed = report.failures().len(), "accents unloaded");
        report
    }

    /// Makes sure the black/white accent pair matches the current theme.
    ///
    /// With a dark or black theme active, an enabled black accent is
    /// swapped for the white one; otherwise an enabled white accent is
    /// swapped for the black one. Nothing happens when neither is enabled
    /// or the right one already is. The replacement is only enabled once
    /// the wrong member was disabled, so the pair is never on together.
    pub fn check_black_white_accent(&self, user: UserId) -> ApplyReport {
        let mut report = ApplyReport::new();
        let pair = self.catalog.paired_accents();

        let (wrong, right) = if self.dark_theme_active(user, &mut report) {
            (pair.black, pair.white)
        } else {
            (pair.white, pair.black)
        };
        let (Some(wrong), Some(right)) = (self.catalog.accent(wrong), self.catalog.accent(right)) else {
            return report;
        };

        if !self.probe(wrong, user, &mut report) {
            trace!(%user, accent = %wrong, "paired accent already consistent");
            report.record_skip();
            return report;
        }
        if self.set(wrong, false, user, &mut report) {
            self.set(right, true, user, &mut report);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::OverlayCatalog;
    use crate::coordinator::ThemeCoordinator;
    use crate::overlay::{MemoryOverlayService, UserId};

    const USER: UserId = UserId(0);
    const BLACK_ACCENT: &str = "com.accents.black";
    const WHITE_ACCENT: &str = "com.accents.white";

    fn installed() -> MemoryOverlayService {
        let service = MemoryOverlayService::new();
        service.install_catalog(OverlayCatalog::builtin(), USER);
        service
    }

    #[test]
    fn test_zero_unloads_all_accents() {
        let service = installed();
        for index in [1, 6, 21, 28] {
            service.install_with(OverlayCatalog::builtin().accent(index).unwrap(), USER, true);
        }

        let coordinator = ThemeCoordinator::new(&service);
        let report = coordinator.update_accents(USER, 0);
        assert_eq!(report.attempted(), 28);
        for index in 1..=28 {
            assert!(!coordinator.is_using_accent(USER, index), "accent {index}");
        }
    }

    #[test]
    fn test_unload_never_touches_slot_zero() {
        let service = installed();
        let _ = ThemeCoordinator::new(&service).unload_accents(USER);
        assert!(service.calls().iter().all(|call| call.overlay() != "default_accent"));
    }

    #[test]
    fn test_ordinary_accent_is_enabled_directly() {
        let service = installed();
        let coordinator = ThemeCoordinator::new(&service);

        for index in [1, 19, 22, 28] {
            let report = coordinator.update_accents(USER, index);
            assert_eq!(report.attempted(), 1);
            assert!(coordinator.is_using_accent(USER, index));
        }
    }

    #[test]
    fn test_ordinary_accent_does_not_disable_previous() {
        let service = installed();
        let coordinator = ThemeCoordinator::new(&service);
        let _ = coordinator.update_accents(USER, 2);
        let _ = coordinator.update_accents(USER, 5);
        assert!(coordinator.is_using_accent(USER, 2));
        assert!(coordinator.is_using_accent(USER, 5));
    }

    #[test]
    fn test_black_accent_in_light_mode() {
        let service = installed();
        let coordinator = ThemeCoordinator::new(&service);
        let _ = coordinator.update_accents(USER, 20);
        assert!(service.is_enabled(BLACK_ACCENT, USER));
        assert!(!service.is_enabled(WHITE_ACCENT, USER));
    }

    #[test]
    fn test_black_accent_with_black_theme_picks_white() {
        let service = installed();
        service.install_with("com.android.system.theme.black", USER, true);
        let coordinator = ThemeCoordinator::new(&service);

        let _ = coordinator.update_accents(USER, 20);
        assert!(service.is_enabled(WHITE_ACCENT, USER));
        assert!(!service.is_enabled(BLACK_ACCENT, USER));
    }

    #[test]
    fn test_white_accent_setting_is_a_no_op() {
        let service = installed();
        let coordinator = ThemeCoordinator::new(&service);
        let report = coordinator.update_accents(USER, 21);
        assert_eq!(report.attempted(), 0);
        assert!(service.calls().is_empty());
        assert!(service.enabled_overlays(USER).is_empty());
    }

    #[test]
    fn test_out_of_range_settings_are_ignored() {
        let service = installed();
        let coordinator = ThemeCoordinator::new(&service);
        for setting in [-1, 29, 1000] {
            let report = coordinator.update_accents(USER, setting);
            assert_eq!(report.attempted(), 0);
            assert!(!coordinator.is_using_accent(USER, setting));
        }
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_is_using_accent_zero_is_false() {
        let service = installed();
        service.install_with("default_accent", USER, true);
        assert!(!ThemeCoordinator::new(&service).is_using_accent(USER, 0));
    }

    #[test]
    fn test_reconcile_swaps_black_for_white_in_dark_mode() {
        let service = installed();
        service.install_with("com.android.system.theme.dark", USER, true);
        service.install_with(BLACK_ACCENT, USER, true);

        let report = ThemeCoordinator::new(&service).check_black_white_accent(USER);
        assert!(report.is_clean());
        assert!(!service.is_enabled(BLACK_ACCENT, USER));
        assert!(service.is_enabled(WHITE_ACCENT, USER));
    }

    #[test]
    fn test_reconcile_swaps_white_for_black_in_light_mode() {
        let service = installed();
        service.install_with(WHITE_ACCENT, USER, true);

        let _ = ThemeCoordinator::new(&service).check_black_white_accent(USER);
        assert!(service.is_enabled(BLACK_ACCENT, USER));
        assert!(!service.is_enabled(WHITE_ACCENT, USER));
    }

    #[test]
    fn test_reconcile_is_a_no_op_without_paired_accent() {
        let service = installed();
        service.install_with("com.android.system.theme.black", USER, true);
        service.install_with("com.accents.red", USER, true);

        let report = ThemeCoordinator::new(&service).check_black_white_accent(USER);
        assert_eq!(report.attempted(), 0);
        assert!(service.is_enabled("com.accents.red", USER));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let service = installed();
        service.install_with("com.android.system.theme.dark", USER, true);
        service.install_with(BLACK_ACCENT, USER, true);
        let coordinator = ThemeCoordinator::new(&service);

        let _ = coordinator.check_black_white_accent(USER);
        let before = service.enabled_overlays(USER);
        let report = coordinator.check_black_white_accent(USER);
        assert_eq!(report.attempted(), 0);
        assert_eq!(service.enabled_overlays(USER), before);
    }

    #[test]
    fn test_reconcile_keeps_pair_exclusive_when_disable_fails() {
        let service = installed();
        service.install_with("com.android.system.theme.dark", USER, true);
        service.install_with(BLACK_ACCENT, USER, true);
        service.fail_writes_on(BLACK_ACCENT);

        let report = ThemeCoordinator::new(&service).check_black_white_accent(USER);
        assert_eq!(report.failures().len(), 1);
        assert!(service.is_enabled(BLACK_ACCENT, USER));
        assert!(!service.is_enabled(WHITE_ACCENT, USER));
    }

    #[test]
    fn test_unload_continues_past_failures() {
        let service = installed();
        for (_, overlay) in OverlayCatalog::builtin().accent_overlays() {
            service.install_with(overlay, USER, true);
        }
        service.fail_on("com.accents.cyan");
        service.fail_on("com.accents.userthree");

        let report = ThemeCoordinator::new(&service).unload_accents(USER);
        assert_eq!(report.attempted(), 28);
        assert_eq!(report.failures().len(), 2);
        assert_eq!(
            service.enabled_overlays(USER),
            vec!["com.accents.cyan".to_string(), "com.accents.userthree".to_string()]
        );
    }
}
