//! The external overlay service seam.
//!
//! This module provides:
//!
//! - [`OverlayService`]: The query/enable primitives the coordinator drives
//! - [`OverlayInfo`]: Snapshot of one overlay's state for one user
//! - [`UserId`]: Opaque user identity scoping every call
//! - [`OverlayError`]: Remote-communication failures from the service
//! - [`MemoryOverlayService`]: An in-process service for embedding and tests
//!
//! The service owns the true overlay state. Nothing here caches it.

mod error;
mod memory;
mod service;

pub use error::OverlayError;
pub use memory::{MemoryOverlayService, OverlayCall};
pub use service::{OverlayInfo, OverlayService, UserId};
