//! Lazy image loader — defers off-screen images, natively when the host can.

use std::cell::RefCell;

use serde::Deserialize;

use veneer_domain::lazy_image::LoadPolicy;
use veneer_domain::observer::{Intersection, ObserverOptions};
use veneer_domain::watch::WatchSet;

use crate::ports::{Document, Environment};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LazyImageSettings {
    /// Tag selector for images.
    pub image_selector: String,
    /// Attribute holding the real source of a deferred image.
    pub deferred_attribute: String,
    pub observer: ObserverOptions,
}

impl Default for LazyImageSettings {
    fn default() -> Self {
        Self {
            image_selector: "img".to_string(),
            deferred_attribute: "data-src".to_string(),
            observer: ObserverOptions::default(),
        }
    }
}

impl LazyImageSettings {
    /// Selector matching images that carry a deferred source.
    pub fn deferred_selector(&self) -> String {
        format!("{}[{}]", self.image_selector, self.deferred_attribute)
    }
}

pub struct LazyImageLoader<D: Document> {
    document: D,
    policy: LoadPolicy,
    settings: LazyImageSettings,
    watch: RefCell<WatchSet<D::Element>>,
}

impl<D: Document> LazyImageLoader<D> {
    /// Choose the loading policy and prepare the page's images for it.
    ///
    /// Under [`LoadPolicy::Native`] every image is marked `loading="lazy"` and
    /// nothing is observed. Under [`LoadPolicy::Deferred`] only images with a
    /// deferred source become targets.
    pub fn install<E: Environment>(
        document: D,
        environment: &E,
        settings: LazyImageSettings,
    ) -> Self {
        let policy = LoadPolicy::select(environment.supports_native_lazy_loading());
        let mut watch = WatchSet::new();
        match policy {
            LoadPolicy::Native => {
                for image in document.select_all(&settings.image_selector) {
                    document.set_attribute(&image, "loading", "lazy");
                }
            }
            LoadPolicy::Deferred => {
                for image in document.select_all(&settings.deferred_selector()) {
                    watch.register(image);
                }
            }
        }
        tracing::debug!(?policy, deferred = watch.pending_count(), "lazy images prepared");
        Self {
            document,
            policy,
            settings,
            watch: RefCell::new(watch),
        }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn options(&self) -> ObserverOptions {
        self.settings.observer
    }

    /// Images still waiting for their source.
    pub fn targets(&self) -> Vec<D::Element> {
        self.watch.borrow().pending().cloned().collect()
    }

    /// Handle an observer notification batch.
    ///
    /// Returns the images whose source was assigned; the caller stops
    /// observing them.
    pub fn on_intersections<I>(&self, entries: I) -> Vec<D::Element>
    where
        I: IntoIterator<Item = Intersection<D::Element>>,
    {
        let mut watch = self.watch.borrow_mut();
        let mut loaded = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || !watch.settle(&entry.target) {
                continue;
            }
            match self
                .document
                .attribute(&entry.target, &self.settings.deferred_attribute)
            {
                Some(source) => {
                    tracing::debug!(%source, "loading deferred image");
                    self.document.set_attribute(&entry.target, "src", &source);
                }
                None => tracing::warn!("deferred image lost its source attribute"),
            }
            loaded.push(entry.target);
        }
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeDocument, FakeEnvironment};

    struct Page {
        doc: FakeDocument,
        deferred: usize,
        eager: usize,
    }

    fn page() -> Page {
        let doc = FakeDocument::new();
        let deferred = doc.add(0, "img", None, &[]);
        doc.set_attribute(&deferred, "data-src", "/images/hero.webp");
        let eager = doc.add(0, "img", None, &[]);
        doc.set_attribute(&eager, "src", "/images/logo.svg");
        Page {
            doc,
            deferred,
            eager,
        }
    }

    fn native(native_lazy: bool) -> FakeEnvironment {
        FakeEnvironment {
            native_lazy,
            ..FakeEnvironment::default()
        }
    }

    fn entry(target: usize, is_intersecting: bool) -> Intersection<usize> {
        Intersection {
            target,
            is_intersecting,
        }
    }

    #[test]
    fn should_mark_every_image_lazy_under_native_policy() {
        let p = page();
        let loader =
            LazyImageLoader::install(p.doc.clone(), &native(true), LazyImageSettings::default());
        assert_eq!(loader.policy(), LoadPolicy::Native);
        assert_eq!(p.doc.attribute(&p.deferred, "loading").as_deref(), Some("lazy"));
        assert_eq!(p.doc.attribute(&p.eager, "loading").as_deref(), Some("lazy"));
        assert!(loader.targets().is_empty());
    }

    #[test]
    fn should_target_only_deferred_images_under_fallback_policy() {
        let p = page();
        let loader =
            LazyImageLoader::install(p.doc.clone(), &native(false), LazyImageSettings::default());
        assert_eq!(loader.policy(), LoadPolicy::Deferred);
        assert_eq!(loader.targets(), vec![p.deferred]);
        assert_eq!(p.doc.attribute(&p.deferred, "loading"), None);
    }

    #[test]
    fn should_assign_source_only_after_intersection() {
        let p = page();
        let loader =
            LazyImageLoader::install(p.doc.clone(), &native(false), LazyImageSettings::default());

        assert!(loader.on_intersections([entry(p.deferred, false)]).is_empty());
        assert_eq!(p.doc.attribute(&p.deferred, "src"), None);

        assert_eq!(loader.on_intersections([entry(p.deferred, true)]), vec![p.deferred]);
        assert_eq!(
            p.doc.attribute(&p.deferred, "src").as_deref(),
            Some("/images/hero.webp")
        );
        assert!(loader.targets().is_empty());
    }

    #[test]
    fn should_never_touch_images_without_deferred_source() {
        let p = page();
        let loader =
            LazyImageLoader::install(p.doc.clone(), &native(false), LazyImageSettings::default());
        assert!(loader.on_intersections([entry(p.eager, true)]).is_empty());
        assert_eq!(p.doc.attribute(&p.eager, "src").as_deref(), Some("/images/logo.svg"));
    }

    #[test]
    fn should_build_deferred_selector_from_settings() {
        assert_eq!(LazyImageSettings::default().deferred_selector(), "img[data-src]");
    }
}
