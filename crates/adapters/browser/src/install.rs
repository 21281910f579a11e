//! Wiring of the installed page features to browser events.

use std::rc::Rc;

use veneer_app::page::{Host, Page, PageSettings};
use veneer_app::ports::SystemClock;
use veneer_domain::theme::ColorScheme;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MediaQueryListEvent, Window};

use crate::{
    BrowserError, Listener, LocalStorage, MediaEnvironment, Observer, WebDocument, WindowViewport,
};

pub type BrowserPage = Page<WebDocument, LocalStorage, WindowViewport, SystemClock>;

/// A page whose features are installed and listening.
///
/// Listeners and observers are removed when this is dropped.
pub struct Installation {
    page: Rc<BrowserPage>,
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
}

impl Installation {
    pub fn page(&self) -> &BrowserPage {
        &self.page
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Install every page feature on `window`'s document and attach its event
/// handlers.
///
/// # Errors
///
/// Returns [`BrowserError`] when the window has no document or the browser
/// refuses a listener or observer.
pub fn install(window: &Window, settings: PageSettings) -> Result<Installation, BrowserError> {
    let document = WebDocument::from_window(window)?;
    let environment = Rc::new(MediaEnvironment::new(
        window.clone(),
        settings.theme.color_scheme_query.clone(),
    ));
    let page = Rc::new(Page::install(
        Host {
            document: document.clone(),
            store: LocalStorage::from_window(window),
            environment: Rc::clone(&environment),
            viewport: WindowViewport::new(window.clone()),
            clock: SystemClock,
        },
        settings,
    ));

    let mut listeners = Vec::new();
    wire_theme(&page, &environment, &mut listeners)?;
    wire_menu(&page, &document, &mut listeners)?;
    wire_scroll(&page, window, &mut listeners)?;
    let observers = wire_observers(&page)?;

    tracing::info!(
        listeners = listeners.len(),
        observers = observers.len(),
        "browser wiring complete"
    );
    Ok(Installation {
        page,
        listeners,
        observers,
    })
}

fn wire_theme(
    page: &Rc<BrowserPage>,
    environment: &MediaEnvironment,
    listeners: &mut Vec<Listener>,
) -> Result<(), BrowserError> {
    for control in &page.theme_controls {
        let page = Rc::clone(page);
        listeners.push(Listener::new(control, "click", move |_| {
            match page.theme.toggle_theme() {
                Ok(theme) => tracing::debug!(%theme, "theme toggled"),
                Err(err) => tracing::warn!(error = %err, "theme toggle not persisted"),
            }
        })?);
    }

    if let Some(list) = environment.color_scheme_list() {
        let page = Rc::clone(page);
        listeners.push(Listener::new(&list, "change", move |event: Event| {
            let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            let scheme = ColorScheme::from_prefers_dark(change.matches());
            page.theme.on_color_scheme_change(scheme);
        })?);
    }
    Ok(())
}

fn wire_menu(
    page: &Rc<BrowserPage>,
    document: &WebDocument,
    listeners: &mut Vec<Listener>,
) -> Result<(), BrowserError> {
    let Some(menu) = &page.menu else {
        return Ok(());
    };

    let handle = Rc::clone(page);
    listeners.push(Listener::new(menu.trigger(), "click", move |_| {
        if let Some(menu) = &handle.menu {
            menu.toggle();
        }
    })?);

    for link in menu.links() {
        let handle = Rc::clone(page);
        listeners.push(Listener::new(&link, "click", move |_| {
            if let Some(menu) = &handle.menu {
                menu.on_link_click();
            }
        })?);
    }

    let handle = Rc::clone(page);
    listeners.push(Listener::new(document.inner(), "click", move |event: Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok());
        if let Some(menu) = &handle.menu {
            menu.on_document_click(target.as_ref());
        }
    })?);
    Ok(())
}

fn wire_scroll(
    page: &Rc<BrowserPage>,
    window: &Window,
    listeners: &mut Vec<Listener>,
) -> Result<(), BrowserError> {
    let Some(scroll) = &page.scroll else {
        return Ok(());
    };

    let handle = Rc::clone(page);
    listeners.push(Listener::new(window, "scroll", move |_| {
        if let Some(scroll) = &handle.scroll {
            scroll.on_scroll();
        }
    })?);

    let handle = Rc::clone(page);
    listeners.push(Listener::new(scroll.button(), "click", move |_| {
        if let Some(scroll) = &handle.scroll {
            scroll.on_click();
        }
    })?);
    Ok(())
}

fn wire_observers(page: &Rc<BrowserPage>) -> Result<Vec<Observer>, BrowserError> {
    let mut observers = Vec::new();

    let sections = page.fade_in.targets();
    if !sections.is_empty() {
        let handle = Rc::clone(page);
        let observer = Observer::new(page.fade_in.options(), move |batch| {
            handle.fade_in.on_intersections(batch)
        })?;
        for section in &sections {
            observer.observe(section);
        }
        observers.push(observer);
    }

    let images = page.lazy_images.targets();
    if !images.is_empty() {
        let handle = Rc::clone(page);
        let observer = Observer::new(page.lazy_images.options(), move |batch| {
            handle.lazy_images.on_intersections(batch)
        })?;
        for image in &images {
            observer.observe(image);
        }
        observers.push(observer);
    }

    Ok(observers)
}
