//! # veneer-app
//!
//! Application layer — page features and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Document` — element lookup, attributes, classes, containment
//!   - `PreferenceStore` — the single persisted theme preference
//!   - `Environment` — color-scheme preference, native lazy-loading support
//!   - `Viewport` — scroll offset and scroll-to-top
//!   - `Clock` — current time for throttling
//! - Define the **feature services** driven by adapter event listeners:
//!   - `ThemeManager`, `MenuController`, `ScrollToTop`, `FadeInAnimator`,
//!     `LazyImageLoader`
//! - Compose them into a [`page::Page`] installed once at page load
//!
//! ## Dependency rule
//! Depends on `veneer-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod page;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod fakes;
