// Time utility functions

use chrono::{NaiveTime, Timelike};

/// Convert minutes since midnight to a wall-clock time.
///
/// Values past midnight clamp to the last representable minute.
pub fn minutes_to_time(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(23, 59, 0).expect("valid clamp time"))
}

/// Minutes since midnight for a wall-clock time; seconds are dropped.
pub fn time_to_minutes(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
