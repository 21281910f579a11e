//! Time and timestamp helpers.

use chrono::{DateTime, TimeDelta, Utc};

/// UTC timestamp used for throttle windows.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
///
/// On `wasm32` this reads `Date.now()` through chrono's `wasmbind` feature.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Build a timestamp from milliseconds since the Unix epoch.
///
/// Out-of-range values clamp to the epoch.
#[must_use]
pub fn from_millis(millis: i64) -> Timestamp {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// Build a duration from whole milliseconds.
#[must_use]
pub fn millis(value: u32) -> TimeDelta {
    TimeDelta::milliseconds(i64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_build_timestamp_from_millis() {
        let ts = from_millis(1_500);
        assert_eq!(ts.timestamp_millis(), 1_500);
    }

    #[test]
    fn should_build_delta_from_millis() {
        assert_eq!(millis(100).num_milliseconds(), 100);
    }
}
