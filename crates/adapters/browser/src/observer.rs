use js_sys::Array;
use veneer_domain::observer::{Intersection, ObserverOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::BrowserError;

/// An `IntersectionObserver` feeding batches to a handler.
///
/// The handler returns the targets it is done with; they are unobserved
/// before the next batch. Dropping the guard disconnects the observer.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// # Errors
    ///
    /// Returns [`BrowserError::Js`] when the browser rejects the options.
    pub fn new<F>(options: ObserverOptions, mut handler: F) -> Result<Self, BrowserError>
    where
        F: FnMut(Vec<Intersection<Element>>) -> Vec<Element> + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Intersection {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                for done in handler(batch) {
                    observer.unobserve(&done);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| BrowserError::js("failed to create intersection observer", &err))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
