//! Event dispatch over an installed [`Page`] without a browser.
//!
//! [`SimulatedPage`] plays the role of the browser wiring: it routes clicks to
//! the handlers whose element contains the click target, fires throttled
//! scroll handling, and recomputes intersections from element layout the way
//! an intersection observer would.

use std::cell::RefCell;
use std::rc::Rc;

use veneer_app::page::{Host, Page, PageSettings};
use veneer_app::ports::Document;
use veneer_domain::observer::{self, Intersection, ObserverOptions};
use veneer_domain::theme::{ColorScheme, Theme};

use crate::{
    ManualClock, MemoryDocument, MemoryEnvironment, MemoryStorage, MemoryViewport, NodeId,
};

type MemoryPage =
    Page<MemoryDocument, Rc<MemoryStorage>, Rc<MemoryViewport>, Rc<ManualClock>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observer {
    FadeIn,
    LazyImages,
}

#[derive(Debug)]
struct Observation {
    observer: Observer,
    target: NodeId,
    /// Last reported state; `None` until the first report.
    intersecting: Option<bool>,
}

pub struct SimulatedPage {
    document: MemoryDocument,
    storage: Rc<MemoryStorage>,
    environment: Rc<MemoryEnvironment>,
    viewport: Rc<MemoryViewport>,
    clock: Rc<ManualClock>,
    page: MemoryPage,
    observations: RefCell<Vec<Observation>>,
}

impl SimulatedPage {
    /// Install every feature on `document` and start observing the
    /// fade-in and lazy-image targets.
    pub fn load(
        document: MemoryDocument,
        storage: MemoryStorage,
        environment: MemoryEnvironment,
        viewport: MemoryViewport,
        settings: PageSettings,
    ) -> Self {
        let storage = Rc::new(storage);
        let environment = Rc::new(environment);
        let viewport = Rc::new(viewport);
        let clock = Rc::new(ManualClock::new());
        let page = Page::install(
            Host {
                document: document.clone(),
                store: Rc::clone(&storage),
                environment: Rc::clone(&environment),
                viewport: Rc::clone(&viewport),
                clock: Rc::clone(&clock),
            },
            settings,
        );

        let observations = page
            .fade_in
            .targets()
            .into_iter()
            .map(|target| (Observer::FadeIn, target))
            .chain(
                page.lazy_images
                    .targets()
                    .into_iter()
                    .map(|target| (Observer::LazyImages, target)),
            )
            .map(|(observer, target)| Observation {
                observer,
                target,
                intersecting: None,
            })
            .collect();

        let simulated = Self {
            document,
            storage,
            environment,
            viewport,
            clock,
            page,
            observations: RefCell::new(observations),
        };
        simulated.refresh_intersections();
        simulated
    }

    pub fn document(&self) -> &MemoryDocument {
        &self.document
    }

    pub fn storage(&self) -> &MemoryStorage {
        &self.storage
    }

    pub fn environment(&self) -> &MemoryEnvironment {
        &self.environment
    }

    pub fn viewport(&self) -> &MemoryViewport {
        &self.viewport
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn page(&self) -> &MemoryPage {
        &self.page
    }

    /// Current theme marker on the root element.
    pub fn theme_marker(&self) -> Option<String> {
        self.page.theme.marker()
    }

    /// Whether `target` is still watched by an observer.
    pub fn is_observed(&self, target: NodeId) -> bool {
        self.observations
            .borrow()
            .iter()
            .any(|observation| observation.target == target)
    }

    pub fn advance(&self, ms: u32) {
        self.clock.advance(ms);
    }

    /// Dispatch a click on `target`.
    ///
    /// Element handlers run first, then the document-level handler, matching
    /// event bubbling order.
    pub fn click(&self, target: NodeId) {
        let inside = |element: &NodeId| self.document.contains(element, &target);

        if self.page.theme_controls.iter().any(inside) {
            match self.page.theme.toggle_theme() {
                Ok(theme) => tracing::debug!(%theme, "theme toggled"),
                Err(err) => tracing::warn!(error = %err, "theme toggle not persisted"),
            }
        }

        if let Some(menu) = &self.page.menu {
            if inside(menu.trigger()) {
                menu.toggle();
            }
            if menu.links().iter().any(inside) {
                menu.on_link_click();
            }
        }

        if let Some(scroll) = &self.page.scroll
            && inside(scroll.button())
        {
            scroll.on_click();
            self.fire_scroll();
        }

        if let Some(menu) = &self.page.menu {
            menu.on_document_click(Some(&target));
        }
    }

    /// Move the viewport and fire a scroll event.
    ///
    /// Returns the button visibility computed by the scroll handler, or
    /// `None` when the event was throttled or the control is not installed.
    pub fn scroll_to(&self, offset: f64) -> Option<bool> {
        self.viewport.set_offset(offset);
        self.fire_scroll()
    }

    /// Change the environment's color scheme and notify the theme manager.
    pub fn change_color_scheme(&self, prefers_dark: bool) -> Option<Theme> {
        let scheme = ColorScheme::from_prefers_dark(prefers_dark);
        self.environment.set_color_scheme(Some(scheme));
        self.page.theme.on_color_scheme_change(scheme)
    }

    /// Deliver an intersection entry for `target` to every observer still
    /// watching it, bypassing layout.
    ///
    /// Returns `false` when nothing observes `target`.
    pub fn report_intersection(&self, target: NodeId, is_intersecting: bool) -> bool {
        let observers: Vec<Observer> = self
            .observations
            .borrow_mut()
            .iter_mut()
            .filter(|observation| observation.target == target)
            .map(|observation| {
                observation.intersecting = Some(is_intersecting);
                observation.observer
            })
            .collect();
        for observer in &observers {
            self.deliver(
                *observer,
                vec![Intersection {
                    target,
                    is_intersecting,
                }],
            );
        }
        !observers.is_empty()
    }

    fn fire_scroll(&self) -> Option<bool> {
        let visibility = self.page.scroll.as_ref().and_then(|scroll| scroll.on_scroll());
        self.refresh_intersections();
        visibility
    }

    /// Recompute intersections for observed targets that have a layout and
    /// deliver the ones whose state changed.
    fn refresh_intersections(&self) {
        let viewport = self.viewport.span();
        let mut batches: Vec<(Observer, Vec<Intersection<NodeId>>)> = Vec::new();
        for observation in self.observations.borrow_mut().iter_mut() {
            let Some(layout) = self.document.layout(observation.target) else {
                continue;
            };
            let options = self.options(observation.observer);
            let ratio = observer::intersection_ratio(layout, viewport, &options.root_margin);
            let is_intersecting = options.qualifies(ratio);
            if observation.intersecting == Some(is_intersecting) {
                continue;
            }
            observation.intersecting = Some(is_intersecting);
            let entry = Intersection {
                target: observation.target,
                is_intersecting,
            };
            match batches.iter_mut().find(|(o, _)| *o == observation.observer) {
                Some((_, entries)) => entries.push(entry),
                None => batches.push((observation.observer, vec![entry])),
            }
        }
        for (observer, entries) in batches {
            self.deliver(observer, entries);
        }
    }

    fn options(&self, observer: Observer) -> ObserverOptions {
        match observer {
            Observer::FadeIn => self.page.fade_in.options(),
            Observer::LazyImages => self.page.lazy_images.options(),
        }
    }

    fn deliver(&self, observer: Observer, entries: Vec<Intersection<NodeId>>) {
        let done = match observer {
            Observer::FadeIn => self.page.fade_in.on_intersections(entries),
            Observer::LazyImages => self.page.lazy_images.on_intersections(entries),
        };
        self.observations.borrow_mut().retain(|observation| {
            observation.observer != observer || !done.contains(&observation.target)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementSpec;
    use veneer_app::ports::Environment;

    fn load(document: MemoryDocument) -> SimulatedPage {
        SimulatedPage::load(
            document,
            MemoryStorage::new(),
            MemoryEnvironment::default(),
            MemoryViewport::new(800.0),
            PageSettings::default(),
        )
    }

    #[test]
    fn should_observe_only_laid_out_targets_on_refresh() {
        let doc = MemoryDocument::new();
        let near = doc.append(doc.body(), ElementSpec::new("section").class("fade-in-section"));
        let far = doc.append(doc.body(), ElementSpec::new("section").class("fade-in-section"));
        doc.set_layout(near, 100.0, 300.0);
        doc.set_layout(far, 3_000.0, 300.0);

        let page = load(doc.clone());

        assert!(doc.has_class(&near, "is-visible"));
        assert!(!page.is_observed(near));
        assert!(page.is_observed(far));
    }

    #[test]
    fn should_ignore_reports_for_unobserved_targets() {
        let doc = MemoryDocument::new();
        let stray = doc.append(doc.body(), ElementSpec::new("div"));
        let page = load(doc.clone());
        assert!(!page.report_intersection(stray, true));
        assert!(!doc.has_class(&stray, "is-visible"));
    }

    #[test]
    fn should_leave_environment_signal_in_sync_after_scheme_change() {
        let page = load(MemoryDocument::new());
        page.change_color_scheme(false);
        assert_eq!(page.environment().color_scheme(), Some(ColorScheme::Light));
    }
}
