use std::cell::Cell;

use veneer_app::ports::Clock;
use veneer_domain::time::{self, Timestamp};

/// Clock that only moves when told to. Starts at the Unix epoch.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Cell::new(time::from_millis(0)),
        }
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get() + time::millis(ms));
    }

    pub fn set_millis(&self, millis: i64) {
        self.now.set(time::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
