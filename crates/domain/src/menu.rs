//! Mobile menu — a single open/closed flag and the presentation derived from it.
//!
//! The panel class and both ARIA attributes are never stored; they are always
//! computed from [`MenuState`], so they cannot disagree.

/// Where a document click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Inside the menu panel (including its links).
    Panel,
    /// On the trigger button or one of its descendants.
    Trigger,
    /// Anywhere else on the page.
    Outside,
}

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state, as a click on the trigger does.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    #[must_use]
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// State after a document-level click.
    ///
    /// Only a click outside both the panel and the trigger closes the menu;
    /// trigger clicks are handled by the trigger itself.
    #[must_use]
    pub fn after_document_click(self, origin: ClickOrigin) -> Self {
        match origin {
            ClickOrigin::Outside => Self::closed(),
            ClickOrigin::Panel | ClickOrigin::Trigger => self,
        }
    }

    /// Markers to write on the panel and trigger for this state.
    #[must_use]
    pub fn presentation(self) -> MenuPresentation {
        MenuPresentation {
            panel_open: self.open,
            aria_expanded: bool_attr(self.open),
            aria_hidden: bool_attr(!self.open),
        }
    }
}

/// Derived DOM markers for a [`MenuState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPresentation {
    /// Whether the panel carries the open class.
    pub panel_open: bool,
    /// Value of `aria-expanded` on the trigger.
    pub aria_expanded: &'static str,
    /// Value of `aria-hidden` on the panel.
    pub aria_hidden: &'static str,
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
