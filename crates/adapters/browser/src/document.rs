use veneer_app::ports::Document;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node, NodeList, Window};

use crate::error::{BrowserError, describe};

/// The global window of the running page.
///
/// # Errors
///
/// Returns [`BrowserError::NoWindow`] outside a window context, such as a
/// worker.
pub fn window() -> Result<Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

/// The live page document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// # Errors
    ///
    /// Returns [`BrowserError::NoDocument`] when the window has no document.
    pub fn from_window(window: &Window) -> Result<Self, BrowserError> {
        window
            .document()
            .map(Self::new)
            .ok_or(BrowserError::NoDocument)
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Document for WebDocument {
    type Element = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                tracing::warn!(selector, reason = %describe(&err), "invalid selector");
                Vec::new()
            }
        }
    }

    fn select_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        match scope.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                tracing::warn!(selector, reason = %describe(&err), "invalid selector");
                Vec::new()
            }
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            tracing::warn!(name, reason = %describe(&err), "failed to set attribute");
        }
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&self, element: &Element, class: &str, present: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, present) {
            tracing::warn!(class, reason = %describe(&err), "failed to update class list");
        }
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }
}
