//! Calendar and time-of-day rules

use crate::abstractions::Clock;
use crate::error::{common, Result};
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

pub const HOLIDAY_DISCOUNT: f64 = 0.2;
const HOLIDAY_MONTH: u32 = 12;
const HOLIDAY_DAY: u32 = 25;

/// Discount granted today: 0.2 on December 25, otherwise 0
pub fn get_discount(clock: &dyn Clock) -> f64 {
    let today = clock.now().date();
    if today.month() == HOLIDAY_MONTH && today.day() == HOLIDAY_DAY {
        HOLIDAY_DISCOUNT
    } else {
        0.0
    }
}

const DEFAULT_OPENING_HOUR: u32 = 8;
const DEFAULT_CLOSING_HOUR: u32 = 20;

fn default_opening_hour() -> u32 {
    DEFAULT_OPENING_HOUR
}

fn default_closing_hour() -> u32 {
    DEFAULT_CLOSING_HOUR
}

/// Opening hours as a half-open interval of whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHours {
    #[serde(default = "default_opening_hour")]
    pub opening_hour: u32,

    #[serde(default = "default_closing_hour")]
    pub closing_hour: u32,
}

impl Default for StoreHours {
    fn default() -> Self {
        Self {
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
        }
    }
}

impl StoreHours {
    /// Build hours, rejecting empty or out-of-day intervals
    pub fn new(opening_hour: u32, closing_hour: u32) -> Result<Self> {
        let hours = Self {
            opening_hour,
            closing_hour,
        };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<()> {
        if self.closing_hour > 24 {
            return Err(common::invalid_config_value(
                "closing_hour",
                format!("{} is past the end of the day", self.closing_hour),
            ));
        }
        if self.opening_hour >= self.closing_hour {
            return Err(common::invalid_config_value(
                "opening_hour",
                format!(
                    "opening hour {} must be before closing hour {}",
                    self.opening_hour, self.closing_hour
                ),
            ));
        }
        Ok(())
    }

    /// Whether `hour` falls in `[opening_hour, closing_hour)`
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.opening_hour && hour < self.closing_hour
    }
}

/// Whether the store is open right now under the default hours (08:00-20:00)
pub fn is_online(clock: &dyn Clock) -> bool {
    is_online_with(clock, &StoreHours::default())
}

/// Whether the store is open right now under `hours`
pub fn is_online_with(clock: &dyn Clock, hours: &StoreHours) -> bool {
    hours.contains(clock.now().hour())
}
