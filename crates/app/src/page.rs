//! Page — every feature installed together at page load.
//!
//! Features are independent: one failing to find its elements is logged and
//! skipped while the others install normally.

use serde::Deserialize;

use veneer_domain::error::{MissingElementError, VeneerError};

use crate::ports::{Clock, Document, Environment, PreferenceStore, Viewport};
use crate::services::{
    FadeInAnimator, FadeInSettings, LazyImageLoader, LazyImageSettings, MenuController,
    MenuSettings, ScrollSettings, ScrollToTop, ThemeManager, ThemeSettings,
};

/// Settings for every page feature.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub theme: ThemeSettings,
    pub menu: MenuSettings,
    pub scroll: ScrollSettings,
    pub fade_in: FadeInSettings,
    pub lazy_images: LazyImageSettings,
}

/// Host services handed to [`Page::install`].
pub struct Host<D, S, E, V, C> {
    pub document: D,
    pub store: S,
    pub environment: E,
    pub viewport: V,
    pub clock: C,
}

/// The installed page features.
pub struct Page<D: Document, S, V, C> {
    pub theme: ThemeManager<D, S>,
    /// Theme toggle controls; empty when one of them is missing.
    pub theme_controls: Vec<D::Element>,
    pub menu: Option<MenuController<D>>,
    pub scroll: Option<ScrollToTop<D, V, C>>,
    pub fade_in: FadeInAnimator<D>,
    pub lazy_images: LazyImageLoader<D>,
}

impl<D, S, V, C> Page<D, S, V, C>
where
    D: Document + Clone,
    S: PreferenceStore,
    V: Viewport,
    C: Clock,
{
    /// Install every feature against `host`.
    #[tracing::instrument(skip_all)]
    pub fn install<E: Environment>(host: Host<D, S, E, V, C>, settings: PageSettings) -> Self {
        let Host {
            document,
            store,
            environment,
            viewport,
            clock,
        } = host;
        let PageSettings {
            theme,
            menu,
            scroll,
            fade_in,
            lazy_images,
        } = settings;

        let theme = ThemeManager::new(document.clone(), store, theme);
        theme.initialize(environment.color_scheme());
        let theme_controls = theme
            .toggle_controls()
            .unwrap_or_else(|err| skipped("theme toggle", err));

        let menu = MenuController::install(document.clone(), menu)
            .map_or_else(|err| skipped("mobile menu", err), Some);

        let scroll = ScrollToTop::install(document.clone(), viewport, clock, scroll)
            .map_or_else(|err| skipped("scroll to top", err), Some);

        let fade_in = FadeInAnimator::install(document.clone(), fade_in);
        let lazy_images = LazyImageLoader::install(document, &environment, lazy_images);

        tracing::info!(
            menu = menu.is_some(),
            scroll_to_top = scroll.is_some(),
            theme_controls = theme_controls.len(),
            "page features installed"
        );

        Self {
            theme,
            theme_controls,
            menu,
            scroll,
            fade_in,
            lazy_images,
        }
    }
}

fn skipped<T: Default>(feature: &str, err: MissingElementError) -> T {
    let err = VeneerError::from(err);
    tracing::warn!(feature, error = %err, "feature skipped");
    T::default()
}
