//! Controllable clock for time-dependent tests

use crate::abstractions::Clock;
use chrono::{Duration, NaiveDateTime};
use std::sync::{Arc, Mutex};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn parse_timestamp(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .unwrap_or_else(|e| panic!("timestamp '{timestamp}' is not YYYY-MM-DD HH:MM: {e}"))
}

/// Clock frozen at a settable instant
///
/// Clones share the same instant, so a test can keep a handle while the code
/// under test holds another.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl MockClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Freeze at a `YYYY-MM-DD HH:MM` timestamp
    pub fn at(timestamp: &str) -> Self {
        Self::new(parse_timestamp(timestamp))
    }

    /// Move to a `YYYY-MM-DD HH:MM` timestamp
    pub fn set(&self, timestamp: &str) {
        self.set_datetime(parse_timestamp(timestamp));
    }

    pub fn set_datetime(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_set_and_advance() {
        let clock = MockClock::at("2024-01-01 07:59");
        assert_eq!(clock.now().hour(), 7);

        clock.advance(Duration::minutes(1));
        assert_eq!(clock.now().hour(), 8);

        let shared = clock.clone();
        shared.set("2024-06-01 12:30");
        assert_eq!(clock.now().minute(), 30);
    }
}
