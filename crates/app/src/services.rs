//! Application services — one per page feature.
//!
//! Each service accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.
//! Handlers take `&self`: services are shared by event callbacks on a single
//! thread, so per-feature state lives in `Cell`/`RefCell`.

pub mod fade_in;
pub mod lazy_images;
pub mod menu_controller;
pub mod scroll_to_top;
pub mod theme_manager;

pub use fade_in::{FadeInAnimator, FadeInSettings};
pub use lazy_images::{LazyImageLoader, LazyImageSettings};
pub use menu_controller::{MenuController, MenuSettings};
pub use scroll_to_top::{ScrollSettings, ScrollToTop};
pub use theme_manager::{ThemeManager, ThemeSettings};
