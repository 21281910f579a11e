use veneer_app::ports::Environment;
use veneer_domain::theme::ColorScheme;
use wasm_bindgen::JsValue;
use web_sys::{MediaQueryList, Window};

use crate::error::describe;

/// Host capabilities read from the window.
#[derive(Debug, Clone)]
pub struct MediaEnvironment {
    window: Window,
    color_scheme_query: String,
}

impl MediaEnvironment {
    /// `color_scheme_query` is a media query that matches when the user
    /// prefers a dark color scheme.
    pub fn new(window: Window, color_scheme_query: impl Into<String>) -> Self {
        Self {
            window,
            color_scheme_query: color_scheme_query.into(),
        }
    }

    /// The media query list for the dark-scheme query, to listen on for
    /// changes.
    pub fn color_scheme_list(&self) -> Option<MediaQueryList> {
        match self.window.match_media(&self.color_scheme_query) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(
                    query = %self.color_scheme_query,
                    reason = %describe(&err),
                    "media query rejected"
                );
                None
            }
        }
    }
}

impl Environment for MediaEnvironment {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.color_scheme_list()
            .map(|list| ColorScheme::from_prefers_dark(list.matches()))
    }

    fn supports_native_lazy_loading(&self) -> bool {
        let prototype = js_sys::Reflect::get(&self.window, &JsValue::from_str("HTMLImageElement"))
            .and_then(|image| js_sys::Reflect::get(&image, &JsValue::from_str("prototype")));
        match prototype {
            Ok(prototype) if prototype.is_object() => {
                js_sys::Reflect::has(&prototype, &JsValue::from_str("loading")).unwrap_or(false)
            }
            _ => false,
        }
    }
}
