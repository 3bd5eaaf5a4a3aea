//! Overlay catalogs.
//!
//! This module provides:
//!
//! - [`OverlayCatalog`]: The immutable tables of overlay identifiers the
//!   coordinator works over
//! - [`NotificationOverlays`] and [`PairedAccents`]: Parts of a catalog
//! - [`CatalogError`]: Errors from loading or validating a catalog
//!
//! The built-in catalog is available through [`OverlayCatalog::builtin`].
//! Other catalogs are loaded from YAML or JSON and validated on load.

mod builtin;
mod error;
mod tables;

pub use error::CatalogError;
pub use tables::{NotificationOverlays, OverlayCatalog, PairedAccents};
