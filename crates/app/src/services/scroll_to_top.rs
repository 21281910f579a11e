//! Scroll-to-top control — shows a "back to top" button once the page is
//! scrolled past a threshold and scrolls back up when it is clicked.

use std::cell::RefCell;

use serde::Deserialize;

use veneer_domain::error::MissingElementError;
use veneer_domain::scroll::ScrollThreshold;
use veneer_domain::throttle::Throttle;
use veneer_domain::time;

use crate::ports::{Clock, Document, Viewport};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub button_id: String,
    /// Class carried by the button while visible.
    pub visible_class: String,
    pub threshold: ScrollThreshold,
    /// Minimum spacing between two handled scroll events.
    pub throttle_ms: u32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            button_id: "to-top-button".to_string(),
            visible_class: "visible".to_string(),
            threshold: ScrollThreshold::default(),
            throttle_ms: 100,
        }
    }
}

pub struct ScrollToTop<D: Document, V, C> {
    document: D,
    viewport: V,
    clock: C,
    button: D::Element,
    settings: ScrollSettings,
    throttle: RefCell<Throttle>,
}

impl<D: Document, V: Viewport, C: Clock> ScrollToTop<D, V, C> {
    /// Locate the button and compute its initial visibility.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElementError`] when the button is absent.
    pub fn install(
        document: D,
        viewport: V,
        clock: C,
        settings: ScrollSettings,
    ) -> Result<Self, MissingElementError> {
        let button = document
            .element_by_id(&settings.button_id)
            .ok_or_else(|| MissingElementError {
                id: settings.button_id.clone(),
            })?;
        let throttle = RefCell::new(Throttle::new(time::millis(settings.throttle_ms)));
        let control = Self {
            document,
            viewport,
            clock,
            button,
            settings,
            throttle,
        };
        control.refresh();
        Ok(control)
    }

    pub fn button(&self) -> &D::Element {
        &self.button
    }

    pub fn is_visible(&self) -> bool {
        self.document
            .has_class(&self.button, &self.settings.visible_class)
    }

    /// Recompute visibility from the current offset, bypassing the throttle.
    pub fn refresh(&self) -> bool {
        let visible = self
            .settings
            .threshold
            .is_visible(self.viewport.scroll_offset());
        self.document
            .set_class(&self.button, &self.settings.visible_class, visible);
        visible
    }

    /// Handle a scroll event.
    ///
    /// Returns the new visibility, or `None` when the event fell inside the
    /// throttle window and was dropped.
    pub fn on_scroll(&self) -> Option<bool> {
        let admitted = self.throttle.borrow_mut().try_acquire(self.clock.now());
        if !admitted {
            tracing::trace!("scroll event throttled");
            return None;
        }
        Some(self.refresh())
    }

    /// Handle a click on the button.
    pub fn on_click(&self) {
        tracing::debug!("scrolling back to top");
        self.viewport.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::fakes::{FakeClock, FakeDocument, FakeViewport};

    type Control = ScrollToTop<FakeDocument, Rc<FakeViewport>, Rc<FakeClock>>;

    fn make_control(initial_offset: f64) -> (Control, Rc<FakeViewport>, Rc<FakeClock>) {
        let doc = FakeDocument::new();
        doc.add(0, "button", Some("to-top-button"), &[]);
        let viewport = Rc::new(FakeViewport::default());
        viewport.offset.set(initial_offset);
        let clock = Rc::new(FakeClock::default());
        let control = ScrollToTop::install(
            doc,
            Rc::clone(&viewport),
            Rc::clone(&clock),
            ScrollSettings::default(),
        )
        .unwrap();
        (control, viewport, clock)
    }

    #[test]
    fn should_start_hidden_at_top() {
        let (control, _, _) = make_control(0.0);
        assert!(!control.is_visible());
    }

    #[test]
    fn should_start_visible_when_page_loads_scrolled() {
        let (control, _, _) = make_control(1_200.0);
        assert!(control.is_visible());
    }

    #[test]
    fn should_apply_strict_threshold() {
        let (control, viewport, clock) = make_control(0.0);
        for (t, offset, expected) in [(0, 299.0, false), (200, 301.0, true), (400, 300.0, false)] {
            clock.set_millis(t);
            viewport.offset.set(offset);
            assert_eq!(control.on_scroll(), Some(expected));
            assert_eq!(control.is_visible(), expected);
        }
    }

    #[test]
    fn should_drop_scroll_events_inside_window() {
        let (control, viewport, clock) = make_control(0.0);
        let mut handled = Vec::new();
        for (t, offset) in [(0, 10.0), (40, 500.0), (90, 500.0), (120, 500.0)] {
            clock.set_millis(t);
            viewport.offset.set(offset);
            if control.on_scroll().is_some() {
                handled.push(t);
            }
        }
        assert_eq!(handled, vec![0, 120]);
        assert!(control.is_visible());
    }

    #[test]
    fn should_keep_stale_visibility_when_event_dropped() {
        let (control, viewport, clock) = make_control(0.0);
        clock.set_millis(0);
        control.on_scroll();
        clock.set_millis(50);
        viewport.offset.set(900.0);
        assert_eq!(control.on_scroll(), None);
        assert!(!control.is_visible());
    }

    #[test]
    fn should_scroll_viewport_to_top_on_click() {
        let (control, viewport, _) = make_control(800.0);
        control.on_click();
        assert_eq!(viewport.scroll_to_top_calls.get(), 1);
        assert!(viewport.scroll_offset().abs() < f64::EPSILON);
    }

    #[test]
    fn should_fail_install_when_button_missing() {
        let result = ScrollToTop::install(
            FakeDocument::new(),
            FakeViewport::default(),
            FakeClock::default(),
            ScrollSettings::default(),
        );
        assert_eq!(result.err().unwrap().id, "to-top-button");
    }
}
