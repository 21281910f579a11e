//! Fade-in animator — reveals tagged sections the first time they scroll into
//! view.

use std::cell::RefCell;

use serde::Deserialize;

use veneer_domain::observer::{Intersection, ObserverOptions, RootMargin};
use veneer_domain::watch::WatchSet;

use crate::ports::Document;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeInSettings {
    /// Selector for the sections to reveal.
    pub selector: String,
    /// Class added once a section is revealed.
    pub revealed_class: String,
    pub observer: ObserverOptions,
}

impl Default for FadeInSettings {
    fn default() -> Self {
        Self {
            selector: ".fade-in-section".to_string(),
            revealed_class: "is-visible".to_string(),
            observer: ObserverOptions::new(0.1, RootMargin::bottom(-50.0)),
        }
    }
}

pub struct FadeInAnimator<D: Document> {
    document: D,
    settings: FadeInSettings,
    watch: RefCell<WatchSet<D::Element>>,
}

impl<D: Document> FadeInAnimator<D> {
    /// Collect every section matching the selector as pending.
    pub fn install(document: D, settings: FadeInSettings) -> Self {
        let mut watch = WatchSet::new();
        for section in document.select_all(&settings.selector) {
            watch.register(section);
        }
        tracing::debug!(sections = watch.pending_count(), "fade-in sections registered");
        Self {
            document,
            settings,
            watch: RefCell::new(watch),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.settings.observer
    }

    /// Sections still waiting to be revealed; these are the ones to observe.
    pub fn targets(&self) -> Vec<D::Element> {
        self.watch.borrow().pending().cloned().collect()
    }

    /// Handle an observer notification batch.
    ///
    /// Returns the sections revealed by this batch; the caller stops observing
    /// them.
    pub fn on_intersections<I>(&self, entries: I) -> Vec<D::Element>
    where
        I: IntoIterator<Item = Intersection<D::Element>>,
    {
        let mut watch = self.watch.borrow_mut();
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || !watch.settle(&entry.target) {
                continue;
            }
            self.document
                .set_class(&entry.target, &self.settings.revealed_class, true);
            revealed.push(entry.target);
        }
        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), "sections revealed");
        }
        revealed
    }
}
