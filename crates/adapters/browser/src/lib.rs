//! # veneer-adapter-browser
//!
//! Binds the `veneer-app` ports to a live browser page through `web-sys`,
//! and wires DOM events, media-query changes and intersection observers to
//! the installed page features.
//!
//! ## Provided adapters
//!
//! | Port | Adapter | Backed by |
//! |------|---------|-----------|
//! | `Document` | [`WebDocument`] | `document`, `querySelectorAll`, `classList` |
//! | `PreferenceStore` | [`LocalStorage`] | `window.localStorage` |
//! | `Environment` | [`MediaEnvironment`] | `matchMedia`, `HTMLImageElement.prototype` |
//! | `Viewport` | [`WindowViewport`] | `scrollY`, smooth `scrollTo` |
//!
//! The clock is `veneer_app::ports::SystemClock`, which reads `Date.now()` on
//! `wasm32`.
//!
//! ## Dependency rule
//!
//! Depends on `veneer-app` and `veneer-domain` only.

mod document;
mod environment;
mod error;
mod install;
mod listener;
mod observer;
mod storage;
mod viewport;

pub use document::{WebDocument, window};
pub use environment::MediaEnvironment;
pub use error::BrowserError;
pub use install::{BrowserPage, Installation, install};
pub use listener::Listener;
pub use observer::Observer;
pub use storage::LocalStorage;
pub use viewport::WindowViewport;
