//! # veneer-adapter-memory
//!
//! In-memory implementations of every `veneer-app` port, plus a
//! [`SimulatedPage`] that dispatches clicks, scrolls, color-scheme changes and
//! intersections the way the browser wiring does.
//!
//! ## Provided adapters
//!
//! | Port | Adapter | Notes |
//! |------|---------|-------|
//! | `Document` | [`MemoryDocument`] | Element tree with compound CSS selectors and optional layout |
//! | `PreferenceStore` | [`MemoryStorage`] | Can be switched off to simulate disabled storage |
//! | `Environment` | [`MemoryEnvironment`] | Settable color scheme and native lazy-loading support |
//! | `Viewport` | [`MemoryViewport`] | Settable offset and height; counts smooth scrolls |
//! | `Clock` | [`ManualClock`] | Advanced explicitly |
//!
//! ## Dependency rule
//!
//! Depends on `veneer-app` (port traits) and `veneer-domain` only.

mod clock;
mod document;
mod environment;
mod simulation;
mod storage;
mod viewport;

pub use clock::ManualClock;
pub use document::{ElementSpec, MemoryDocument, NodeId};
pub use environment::MemoryEnvironment;
pub use simulation::SimulatedPage;
pub use storage::MemoryStorage;
pub use viewport::MemoryViewport;
