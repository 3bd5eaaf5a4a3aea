//! In-process overlay service.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::error::OverlayError;
use super::service::{OverlayInfo, OverlayService, UserId};
use crate::catalog::OverlayCatalog;

/// A call received by a [`MemoryOverlayService`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayCall {
    /// An `overlay_info` lookup.
    Query { overlay: String, user: UserId },
    /// A `set_enabled` write.
    SetEnabled {
        overlay: String,
        enabled: bool,
        user: UserId,
    },
}

impl OverlayCall {
    /// Returns the overlay the call targeted.
    pub fn overlay(&self) -> &str {
        match self {
            OverlayCall::Query { overlay, .. } | OverlayCall::SetEnabled { overlay, .. } => overlay,
        }
    }

    /// Returns true for `set_enabled` calls.
    pub fn is_write(&self) -> bool {
        matches!(self, OverlayCall::SetEnabled { .. })
    }
}

#[derive(Debug, Default)]
struct State {
    overlays: BTreeMap<(UserId, String), bool>,
    failing_queries: HashSet<String>,
    failing_writes: HashSet<String>,
    calls: Vec<OverlayCall>,
}

/// An [`OverlayService`] that keeps overlay state in memory.
///
/// Overlays must be installed for a user before they exist. Lookups of
/// unknown overlays return `None`; writes to unknown overlays are accepted
/// and have no effect. Failures can be injected per overlay to exercise
/// partial-failure paths, and every call is recorded.
///
/// # Example
///
/// ```rust
/// use theme_overlays::{MemoryOverlayService, OverlayCatalog, ThemeCoordinator, UserId};
///
/// let service = MemoryOverlayService::new();
/// service.install_catalog(OverlayCatalog::builtin(), UserId(0));
///
/// let coordinator = ThemeCoordinator::new(&service);
/// let _ = coordinator.update_accents(UserId(0), 6);
/// assert!(coordinator.is_using_accent(UserId(0), 6));
/// ```
#[derive(Debug, Default)]
pub struct MemoryOverlayService {
    state: Mutex<State>,
}

impl MemoryOverlayService {
    /// Creates a service with no overlays installed.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs a disabled overlay for `user`. Existing state is kept.
    pub fn install(&self, overlay: impl Into<String>, user: UserId) {
        self.state()
            .overlays
            .entry((user, overlay.into()))
            .or_insert(false);
    }

    /// Installs an overlay for `user` with the given enabled flag.
    pub fn install_with(&self, overlay: impl Into<String>, user: UserId, enabled: bool) {
        self.state().overlays.insert((user, overlay.into()), enabled);
    }

    /// Installs every overlay named by `catalog`, disabled, for `user`.
    pub fn install_catalog(&self, catalog: &OverlayCatalog, user: UserId) {
        for overlay in catalog.overlays() {
            self.install(overlay, user);
        }
    }

    /// Makes every query and write for `overlay` fail.
    pub fn fail_on(&self, overlay: impl Into<String>) {
        let overlay = overlay.into();
        let mut state = self.state();
        state.failing_queries.insert(overlay.clone());
        state.failing_writes.insert(overlay);
    }

    /// Makes queries for `overlay` fail; writes still succeed.
    pub fn fail_queries_on(&self, overlay: impl Into<String>) {
        self.state().failing_queries.insert(overlay.into());
    }

    /// Makes writes for `overlay` fail; queries still succeed.
    pub fn fail_writes_on(&self, overlay: impl Into<String>) {
        self.state().failing_writes.insert(overlay.into());
    }

    /// Removes all injected failures.
    pub fn clear_failures(&self) {
        let mut state = self.state();
        state.failing_queries.clear();
        state.failing_writes.clear();
    }

    /// Returns the calls received so far.
    pub fn calls(&self) -> Vec<OverlayCall> {
        self.state().calls.clone()
    }

    /// Forgets the recorded calls.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Reads an overlay's enabled flag without recording a call.
    pub fn is_enabled(&self, overlay: &str, user: UserId) -> bool {
        self.state()
            .overlays
            .get(&(user, overlay.to_string()))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the enabled overlays for `user`, sorted by identifier.
    pub fn enabled_overlays(&self, user: UserId) -> Vec<String> {
        self.state()
            .overlays
            .iter()
            .filter(|((owner, _), enabled)| *owner == user && **enabled)
            .map(|((_, overlay), _)| overlay.clone())
            .collect()
    }
}

impl OverlayService for MemoryOverlayService {
    fn overlay_info(&self, overlay: &str, user: UserId) -> Result<Option<OverlayInfo>, OverlayError> {
        let mut state = self.state();
        state.calls.push(OverlayCall::Query {
            overlay: overlay.to_string(),
            user,
        });
        if state.failing_queries.contains(overlay) {
            return Err(OverlayError::remote(overlay, "injected query failure"));
        }
        Ok(state
            .overlays
            .get(&(user, overlay.to_string()))
            .map(|enabled| OverlayInfo::new(overlay, user, *enabled)))
    }

    fn set_enabled(&self, overlay: &str, enabled: bool, user: UserId) -> Result<(), OverlayError> {
        let mut state = self.state();
        state.calls.push(OverlayCall::SetEnabled {
            overlay: overlay.to_string(),
            enabled,
            user,
        });
        if state.failing_writes.contains(overlay) {
            return Err(OverlayError::remote(overlay, "injected write failure"));
        }
        if let Some(flag) = state.overlays.get_mut(&(user, overlay.to_string())) {
            *flag = enabled;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: UserId = UserId(0);

    #[test]
    fn test_unknown_overlay_has_no_info() {
        let service = MemoryOverlayService::new();
        assert_eq!(service.overlay_info("missing", USER).unwrap(), None);
    }

    #[test]
    fn test_write_to_unknown_overlay_is_ignored() {
        let service = MemoryOverlayService::new();
        service.set_enabled("missing", true, USER).unwrap();
        assert_eq!(service.overlay_info("missing", USER).unwrap(), None);
        assert!(service.enabled_overlays(USER).is_empty());
    }

    #[test]
    fn test_install_and_toggle() {
        let service = MemoryOverlayService::new();
        service.install("com.accents.red", USER);
        assert!(!service.is_enabled("com.accents.red", USER));

        service.set_enabled("com.accents.red", true, USER).unwrap();
        let info = service.overlay_info("com.accents.red", USER).unwrap().unwrap();
        assert!(info.is_enabled());
        assert_eq!(service.enabled_overlays(USER), vec!["com.accents.red".to_string()]);
    }

    #[test]
    fn test_install_keeps_existing_state() {
        let service = MemoryOverlayService::new();
        service.install_with("com.accents.red", USER, true);
        service.install("com.accents.red", USER);
        assert!(service.is_enabled("com.accents.red", USER));
    }

    #[test]
    fn test_users_are_isolated() {
        let service = MemoryOverlayService::new();
        service.install("com.accents.red", UserId(0));
        service.install("com.accents.red", UserId(10));

        service.set_enabled("com.accents.red", true, UserId(10)).unwrap();
        assert!(service.is_enabled("com.accents.red", UserId(10)));
        assert!(!service.is_enabled("com.accents.red", UserId(0)));
    }

    #[test]
    fn test_injected_failures() {
        let service = MemoryOverlayService::new();
        service.install("a", USER);
        service.install("b", USER);
        service.fail_on("a");
        service.fail_writes_on("b");

        assert!(service.overlay_info("a", USER).is_err());
        assert!(service.set_enabled("a", true, USER).is_err());
        assert!(service.overlay_info("b", USER).is_ok());
        assert!(service.set_enabled("b", true, USER).is_err());
        assert!(!service.is_enabled("b", USER));

        service.clear_failures();
        assert!(service.set_enabled("b", true, USER).is_ok());
        assert!(service.is_enabled("b", USER));
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let service = MemoryOverlayService::new();
        service.fail_queries_on("a");
        let _ = service.overlay_info("a", USER);
        service.set_enabled("b", false, USER).unwrap();

        let calls = service.calls();
        assert_eq!(
            calls,
            vec![
                OverlayCall::Query {
                    overlay: "a".into(),
                    user: USER
                },
                OverlayCall::SetEnabled {
                    overlay: "b".into(),
                    enabled: false,
                    user: USER
                },
            ]
        );
        assert!(!calls[0].is_write());
        assert_eq!(calls[1].overlay(), "b");

        service.clear_calls();
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_install_catalog_installs_everything_disabled() {
        let service = MemoryOverlayService::new();
        let catalog = OverlayCatalog::builtin();
        service.install_catalog(catalog, USER);

        for overlay in catalog.overlays() {
            assert!(service.overlay_info(overlay, USER).unwrap().is_some());
        }
        assert!(service.enabled_overlays(USER).is_empty());
    }
}
