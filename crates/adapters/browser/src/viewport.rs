use veneer_app::ports::Viewport;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::error::describe;

/// The window's vertical scroll position.
#[derive(Debug, Clone)]
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_else(|err| {
            tracing::warn!(reason = %describe(&err), "scroll offset unavailable");
            0.0
        })
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
