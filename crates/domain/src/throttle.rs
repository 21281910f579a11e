//! Leading-edge throttle.
//!
//! The first call runs immediately and opens a window; calls arriving while the
//! window is open are dropped, never queued or replayed.

use chrono::TimeDelta;

use crate::time::Timestamp;

/// Rate limiter admitting at most one call per window.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: TimeDelta,
    last_call: Option<Timestamp>,
}

impl Throttle {
    #[must_use]
    pub fn new(window: TimeDelta) -> Self {
        Self {
            window,
            last_call: None,
        }
    }

    #[must_use]
    pub fn window(&self) -> TimeDelta {
        self.window
    }

    /// Decide whether a call at `now` runs, recording it when it does.
    pub fn try_acquire(&mut self, now: Timestamp) -> bool {
        let admitted = self
            .last_call
            .is_none_or(|last| now.signed_duration_since(last) >= self.window);
        if admitted {
            self.last_call = Some(now);
        }
        admitted
    }
}
