//! Lazy image loading policy.

/// How off-screen images are deferred on this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// The host honours the `loading` hint; every image is marked lazy and the
    /// browser takes over.
    Native,
    /// Images carrying a deferred source are observed and their real source is
    /// assigned once they intersect the viewport.
    Deferred,
}

impl LoadPolicy {
    /// Chosen once at startup from the host's capabilities.
    #[must_use]
    pub fn select(native_supported: bool) -> Self {
        if native_supported {
            Self::Native
        } else {
            Self::Deferred
        }
    }
}
