//! Document port — the slice of the DOM the page features touch.

/// Access to the hosting document.
///
/// Element handles are cheap to clone and compare by identity.
pub trait Document {
    type Element: Clone + PartialEq;

    /// The root (`<html>`) element.
    fn root(&self) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements in the document matching a CSS selector, in tree order.
    fn select_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Descendants of `scope` matching a CSS selector, in tree order.
    fn select_within(&self, scope: &Self::Element, selector: &str) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add (`present = true`) or remove a class.
    fn set_class(&self, element: &Self::Element, class: &str, present: bool);

    /// Whether `node` is `ancestor` itself or one of its descendants.
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;
}
