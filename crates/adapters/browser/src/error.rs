//! Browser adapter error types.

use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while binding to the browser page.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// Not running in a window context.
    #[error("no global window")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// A DOM call threw.
    #[error("{context}: {reason}")]
    Js {
        context: &'static str,
        reason: String,
    },
}

impl BrowserError {
    pub(crate) fn js(context: &'static str, value: &JsValue) -> Self {
        Self::Js {
            context,
            reason: describe(value),
        }
    }
}

/// Human-readable form of a thrown JavaScript value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
