//! Mobile menu controller — opens, closes and dismisses the navigation panel.

use std::cell::Cell;

use serde::Deserialize;

use veneer_domain::error::MissingElementError;
use veneer_domain::menu::{ClickOrigin, MenuState};

use crate::ports::Document;

/// Names the menu controller relies on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    pub button_id: String,
    pub panel_id: String,
    /// Class carried by the panel while open.
    pub open_class: String,
    /// Selector for links that dismiss the panel when clicked.
    pub link_selector: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            button_id: "mobile-menu-button".to_string(),
            panel_id: "mobile-menu".to_string(),
            open_class: "open".to_string(),
            link_selector: "a".to_string(),
        }
    }
}

/// Application service for the mobile navigation panel.
///
/// [`MenuState`] is the single source of truth; the panel class and both ARIA
/// attributes are rewritten from it on every transition.
pub struct MenuController<D: Document> {
    document: D,
    trigger: D::Element,
    panel: D::Element,
    settings: MenuSettings,
    state: Cell<MenuState>,
}

impl<D: Document> MenuController<D> {
    /// Locate the trigger and panel and render the closed state.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElementError`] when either element is absent.
    pub fn install(document: D, settings: MenuSettings) -> Result<Self, MissingElementError> {
        let lookup = |id: &str| {
            document
                .element_by_id(id)
                .ok_or_else(|| MissingElementError { id: id.to_string() })
        };
        let trigger = lookup(&settings.button_id)?;
        let panel = lookup(&settings.panel_id)?;
        let controller = Self {
            document,
            trigger,
            panel,
            settings,
            state: Cell::new(MenuState::closed()),
        };
        controller.render();
        Ok(controller)
    }

    pub fn trigger(&self) -> &D::Element {
        &self.trigger
    }

    pub fn panel(&self) -> &D::Element {
        &self.panel
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    /// Links inside the panel that close it when clicked.
    pub fn links(&self) -> Vec<D::Element> {
        self.document
            .select_within(&self.panel, &self.settings.link_selector)
    }

    /// Handle a click on the trigger. Returns the new open state.
    pub fn toggle(&self) -> bool {
        self.transition(self.state.get().toggled())
    }

    /// Handle a click anywhere in the document.
    ///
    /// `target` is the clicked element; `None` counts as outside.
    pub fn on_document_click(&self, target: Option<&D::Element>) {
        let origin = target.map_or(ClickOrigin::Outside, |target| self.origin_of(target));
        self.transition(self.state.get().after_document_click(origin));
    }

    /// Handle a click on one of the panel's links.
    pub fn on_link_click(&self) {
        self.transition(MenuState::closed());
    }

    fn origin_of(&self, target: &D::Element) -> ClickOrigin {
        if self.document.contains(&self.panel, target) {
            ClickOrigin::Panel
        } else if self.document.contains(&self.trigger, target) {
            ClickOrigin::Trigger
        } else {
            ClickOrigin::Outside
        }
    }

    fn transition(&self, next: MenuState) -> bool {
        if next != self.state.get() {
            tracing::debug!(open = next.is_open(), "mobile menu transition");
            self.state.set(next);
            self.render();
        }
        next.is_open()
    }

    fn render(&self) {
        let presentation = self.state.get().presentation();
        self.document.set_class(
            &self.panel,
            &self.settings.open_class,
            presentation.panel_open,
        );
        self.document
            .set_attribute(&self.trigger, "aria-expanded", presentation.aria_expanded);
        self.document
            .set_attribute(&self.panel, "aria-hidden", presentation.aria_hidden);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeDocument;

    struct Fixture {
        doc: FakeDocument,
        controller: MenuController<FakeDocument>,
        icon: usize,
        link: usize,
        outside: usize,
    }

    fn fixture() -> Fixture {
        let doc = FakeDocument::new();
        let button = doc.add(0, "button", Some("mobile-menu-button"), &[]);
        let icon = doc.add(button, "span", None, &["icon"]);
        let panel = doc.add(0, "nav", Some("mobile-menu"), &[]);
        let list = doc.add(panel, "ul", None, &[]);
        let link = doc.add(list, "a", None, &[]);
        let outside = doc.add(0, "main", None, &[]);
        let controller = MenuController::install(doc.clone(), MenuSettings::default()).unwrap();
        Fixture {
            doc,
            controller,
            icon,
            link,
            outside,
        }
    }

    fn assert_consistent(f: &Fixture) {
        let c = &f.controller;
        let open = f.doc.has_class(c.panel(), "open");
        let expanded = f.doc.attribute(c.trigger(), "aria-expanded");
        let hidden = f.doc.attribute(c.panel(), "aria-hidden");
        assert_eq!(open, c.is_open());
        assert_eq!(expanded.as_deref(), Some(if open { "true" } else { "false" }));
        assert_eq!(hidden.as_deref(), Some(if open { "false" } else { "true" }));
    }

    #[test]
    fn should_render_closed_state_on_install() {
        let f = fixture();
        assert!(!f.controller.is_open());
        assert_consistent(&f);
    }

    #[test]
    fn should_open_and_close_on_trigger_clicks() {
        let f = fixture();
        assert!(f.controller.toggle());
        assert_consistent(&f);
        assert!(!f.controller.toggle());
        assert_consistent(&f);
    }

    #[test]
    fn should_close_when_clicking_outside_open_menu() {
        let f = fixture();
        f.controller.toggle();
        f.controller.on_document_click(Some(&f.outside));
        assert!(!f.controller.is_open());
        assert_consistent(&f);
    }

    #[test]
    fn should_ignore_outside_click_when_closed() {
        let f = fixture();
        f.controller.on_document_click(Some(&f.outside));
        assert!(!f.controller.is_open());
        assert_consistent(&f);
    }

    #[test]
    fn should_not_treat_trigger_descendant_as_outside() {
        let f = fixture();
        f.controller.toggle();
        f.controller.on_document_click(Some(&f.icon));
        assert!(f.controller.is_open());
    }

    #[test]
    fn should_stay_open_when_clicking_inside_panel() {
        let f = fixture();
        f.controller.toggle();
        f.controller.on_document_click(Some(&f.link));
        assert!(f.controller.is_open());
    }

    #[test]
    fn should_close_when_link_clicked() {
        let f = fixture();
        f.controller.toggle();
        f.controller.on_link_click();
        assert!(!f.controller.is_open());
        assert_consistent(&f);
    }

    #[test]
    fn should_list_links_inside_panel() {
        let f = fixture();
        assert_eq!(f.controller.links(), vec![f.link]);
    }

    #[test]
    fn should_fail_install_when_panel_missing() {
        let doc = FakeDocument::new();
        doc.add(0, "button", Some("mobile-menu-button"), &[]);
        let err = MenuController::install(doc, MenuSettings::default())
            .err()
            .unwrap();
        assert_eq!(err.id, "mobile-menu");
    }
}
