//! Wall-clock abstraction

use chrono::NaiveDateTime;

/// Source of the current local wall time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_tracks_local_time() {
        let before = chrono::Local::now().naive_local();
        let now = SystemClock.now();
        let after = chrono::Local::now().naive_local();

        assert!(before <= now && now <= after);
    }
}
