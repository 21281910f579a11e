//! Environment port — capabilities and preferences reported by the host.

use std::rc::Rc;

use veneer_domain::theme::ColorScheme;

pub trait Environment {
    /// The color scheme the operating environment prefers, when it reports one.
    fn color_scheme(&self) -> Option<ColorScheme>;

    /// Whether image elements honour the native `loading` hint.
    fn supports_native_lazy_loading(&self) -> bool;
}

impl<T: Environment> Environment for Rc<T> {
    fn color_scheme(&self) -> Option<ColorScheme> {
        (**self).color_scheme()
    }

    fn supports_native_lazy_loading(&self) -> bool {
        (**self).supports_native_lazy_loading()
    }
}
