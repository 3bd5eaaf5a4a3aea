//! # theme-overlays - mutually exclusive theme overlays
//!
//! `theme-overlays` decides which visual-theme overlays to enable and
//! disable for a user, and in which order, so that conflicting overlays
//! are never on together. The overlays themselves live in an external
//! service; this crate only coordinates them.
//!
//! Three families of overlays are managed:
//!
//! - **System themes**: a dark group and a black group, never both enabled
//! - **Notification themes**: a dark and a black overlay, at most one enabled
//! - **Accents**: a list of color accents where slot 0 means "no accent",
//!   plus a black/white pair whose correct member depends on the theme
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_overlays::{
//!     AppearanceSettings, DarkStyle, MemoryOverlayService, NotificationStyle, OverlayCatalog,
//!     ThemeCoordinator, UserId,
//! };
//!
//! let user = UserId(0);
//! let service = MemoryOverlayService::new();
//! service.install_catalog(OverlayCatalog::builtin(), user);
//!
//! let coordinator = ThemeCoordinator::new(&service);
//! let report = coordinator.apply(
//!     user,
//!     &AppearanceSettings {
//!         use_dark_theme: true,
//!         dark_style: DarkStyle::Dark,
//!         notification_style: NotificationStyle::FollowSystem,
//!         accent: 20,
//!     },
//! );
//!
//! assert!(report.is_clean());
//! assert!(coordinator.is_using_dark_theme(user));
//! // The black accent turns white on a dark theme.
//! assert!(coordinator.is_using_accent(user, 21));
//! ```
//!
//! ## Failure handling
//!
//! Calls to the overlay service can fail. Failures never abort an
//! operation and never reach the caller as errors: queries treat them as
//! "disabled", and write operations keep going and list every failed call
//! in the returned [`ApplyReport`]. Since each operation re-reads state
//! from the service, calling it again converges a partially applied state.
//!
//! ## Custom catalogs
//!
//! The overlay identifiers come from an [`OverlayCatalog`]. The built-in
//! one is used by default; others can be loaded from YAML or JSON with
//! [`OverlayCatalog::from_path`] and passed to
//! [`ThemeCoordinator::with_catalog`].

pub mod catalog;
pub mod coordinator;
pub mod overlay;
mod settings;

pub use catalog::{CatalogError, NotificationOverlays, OverlayCatalog, PairedAccents};
pub use coordinator::{ApplyReport, NotificationTarget, OverlayAction, OverlayFailure, ThemeCoordinator};
pub use overlay::{MemoryOverlayService, OverlayCall, OverlayError, OverlayInfo, OverlayService, UserId};
pub use settings::{AppearanceSettings, DarkStyle, NotificationStyle, SettingsError};
