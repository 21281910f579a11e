//! # veneer-web
//!
//! Composition root compiled to WebAssembly and started by the hosting page.
//!
//! ## Responsibilities
//! - Install the panic hook and console logger
//! - Read configuration embedded in the page
//! - Install every page feature through the browser adapter
//! - Keep the resulting listeners and observers alive for the page lifetime
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the browser adapter's wiring.
//! No feature logic belongs here.

mod config;

use std::cell::RefCell;

use veneer_adapter_browser::{BrowserError, Installation, WebDocument};
use wasm_bindgen::prelude::*;

pub use config::{CONFIG_ELEMENT_ID, Config, ConfigError, LoggingConfig};

thread_local! {
    static INSTALLATION: RefCell<Option<Installation>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(err) = run() {
        init_logging(log::Level::Info);
        tracing::error!(error = %err, "veneer not started");
    }
}

fn run() -> Result<(), BrowserError> {
    let window = veneer_adapter_browser::window()?;
    let document = WebDocument::from_window(&window)?;

    let loaded = Config::load(document.inner());
    init_logging(
        loaded
            .as_ref()
            .map_or(log::Level::Info, Config::log_level),
    );
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring embedded configuration");
        Config::default()
    });

    let installation = veneer_adapter_browser::install(&window, config.page)?;
    INSTALLATION.with(|slot| *slot.borrow_mut() = Some(installation));
    Ok(())
}

fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        tracing::debug!("console logger already installed");
    }
}
