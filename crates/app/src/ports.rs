//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the page features and the host. They are
//! synchronous: every call happens inside an event callback on the single
//! browser event-loop thread and never suspends.

pub mod clock;
pub mod document;
pub mod environment;
pub mod storage;
pub mod viewport;

pub use clock::{Clock, SystemClock};
pub use document::Document;
pub use environment::Environment;
pub use storage::PreferenceStore;
pub use viewport::Viewport;
