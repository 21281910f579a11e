use std::cell::Cell;

use veneer_app::ports::Environment;
use veneer_domain::theme::ColorScheme;

/// Host capabilities with settable answers.
///
/// Defaults to no color-scheme signal and no native lazy loading.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    scheme: Cell<Option<ColorScheme>>,
    native_lazy: Cell<bool>,
}

impl MemoryEnvironment {
    #[must_use]
    pub fn new(scheme: Option<ColorScheme>, native_lazy: bool) -> Self {
        Self {
            scheme: Cell::new(scheme),
            native_lazy: Cell::new(native_lazy),
        }
    }

    pub fn set_color_scheme(&self, scheme: Option<ColorScheme>) {
        self.scheme.set(scheme);
    }

    pub fn set_native_lazy_loading(&self, supported: bool) {
        self.native_lazy.set(supported);
    }
}

impl Environment for MemoryEnvironment {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.scheme.get()
    }

    fn supports_native_lazy_loading(&self) -> bool {
        self.native_lazy.get()
    }
}
