//! Clock port — wall-clock time used by throttling.

use std::rc::Rc;

use veneer_domain::time::{self, Timestamp};

pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<T: Clock> Clock for Rc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Clock backed by the host's real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
