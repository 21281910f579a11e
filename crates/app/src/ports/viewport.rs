//! Viewport port — scroll position of the hosting window.

use std::rc::Rc;

pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Smoothly animate the viewport back to offset 0.
    fn scroll_to_top(&self);
}

impl<T: Viewport> Viewport for Rc<T> {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn scroll_to_top(&self) {
        (**self).scroll_to_top();
    }
}
