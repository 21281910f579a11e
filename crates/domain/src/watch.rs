//! One-way watch set for elements waiting on a single visibility event.
//!
//! An element is registered as pending, settles at most once, and is never
//! pending again afterwards. Fade-in reveals and lazy image loads both follow
//! this lifecycle.

/// Lifecycle of a watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Pending,
    Settled,
}

/// Elements tracked through `Pending → Settled`.
///
/// Lookup is by equality so element handles that are not hashable (browser
/// object references) can be stored directly.
#[derive(Debug, Clone)]
pub struct WatchSet<E> {
    entries: Vec<(E, WatchState)>,
}

impl<E> Default for WatchSet<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: PartialEq> WatchSet<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `element`.
    ///
    /// Returns `false` when the element is already known, pending or settled.
    pub fn register(&mut self, element: E) -> bool {
        if self.state(&element).is_some() {
            return false;
        }
        self.entries.push((element, WatchState::Pending));
        true
    }

    /// Settle `element`. Returns `true` only on the first transition.
    pub fn settle(&mut self, element: &E) -> bool {
        match self.entries.iter_mut().find(|(e, _)| e == element) {
            Some((_, state @ WatchState::Pending)) => {
                *state = WatchState::Settled;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn state(&self, element: &E) -> Option<WatchState> {
        self.entries
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, state)| *state)
    }

    /// Elements still waiting to settle.
    pub fn pending(&self) -> impl Iterator<Item = &E> {
        self.entries
            .iter()
            .filter(|(_, state)| *state == WatchState::Pending)
            .map(|(e, _)| e)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }
}
