use std::cell::Cell;

use veneer_app::ports::Viewport;
use veneer_domain::observer::Span;

/// Scrollable window of a fixed height.
#[derive(Debug)]
pub struct MemoryViewport {
    offset: Cell<f64>,
    height: f64,
    smooth_scrolls: Cell<u32>,
}

impl Default for MemoryViewport {
    fn default() -> Self {
        Self::new(800.0)
    }
}

impl MemoryViewport {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            offset: Cell::new(0.0),
            height,
            smooth_scrolls: Cell::new(0),
        }
    }

    pub fn set_offset(&self, offset: f64) {
        self.offset.set(offset.max(0.0));
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Visible vertical range in document coordinates.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.offset.get(), self.height)
    }

    /// Number of smooth scrolls back to the top requested so far.
    #[must_use]
    pub fn smooth_scrolls(&self) -> u32 {
        self.smooth_scrolls.get()
    }
}

impl Viewport for MemoryViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn scroll_to_top(&self) {
        self.smooth_scrolls.set(self.smooth_scrolls.get() + 1);
        self.offset.set(0.0);
    }
}
