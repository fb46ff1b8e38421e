//! Time grid model for the scheduling board.
//!
//! The visible day spans 07:00–19:00 (13 hour rows), each hour divided into
//! four 15-minute slots.  Everything downstream works in minutes since
//! midnight; this module owns the conversions between wall-clock times,
//! grid slots, and minutes.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// First hour row shown on the grid.
pub const GRID_START_HOUR: u32 = 7;
/// Last hour row shown on the grid (inclusive).
pub const GRID_END_HOUR: u32 = 19;
/// Number of hour rows (07:00 through 19:00 inclusive).
pub const HOUR_ROWS: u32 = GRID_END_HOUR - GRID_START_HOUR + 1;
/// Slots per hour row.
pub const SLOTS_PER_HOUR: u32 = 4;
/// Minutes per slot.
pub const SLOT_MINUTES: u32 = 15;
/// Grid start expressed in minutes since midnight.
pub const GRID_START_MINUTES: u32 = GRID_START_HOUR * 60;
/// Grid end expressed in minutes since midnight (end of the last hour row).
pub const GRID_END_MINUTES: u32 = (GRID_END_HOUR + 1) * 60;

/// A discrete 15-minute slot on the grid, addressed by hour and quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSlot {
    pub hour: u32,
    /// Quarter index within the hour, 0..4.
    pub quarter: u32,
}

impl GridSlot {
    /// Create a slot, validating that it lies on the visible grid.
    pub fn new(hour: u32, quarter: u32) -> Option<Self> {
        if (GRID_START_HOUR..=GRID_END_HOUR).contains(&hour) && quarter < SLOTS_PER_HOUR {
            Some(Self { hour, quarter })
        } else {
            None
        }
    }

    /// Minutes since midnight at the start of this slot.
    pub fn to_minutes(self) -> u32 {
        self.hour * 60 + self.quarter * SLOT_MINUTES
    }

    /// Wall-clock time at the start of this slot.
    pub fn time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.quarter * SLOT_MINUTES, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

/// Inverse of [`GridSlot::to_minutes`]: exact for on-grid minutes, `None`
/// for anything off the visible grid or not on a quarter boundary.
pub fn slot_from_minutes(minutes: u32) -> Option<GridSlot> {
    if minutes % SLOT_MINUTES != 0 {
        return None;
    }
    GridSlot::new(minutes / 60, (minutes % 60) / SLOT_MINUTES)
}

/// Slot containing a wall-clock time, if the time lies on the grid.
///
/// Times inside a slot resolve to that slot's start; seconds are ignored.
pub fn slot_of_time(time: NaiveTime) -> Option<GridSlot> {
    GridSlot::new(time.hour(), time.minute() / SLOT_MINUTES)
}

/// Map a fractional position within an hour row to a quarter index.
///
/// Floors `fraction * 4` and clamps to `[0, 3]`, so hover positions just
/// outside the row still resolve to the nearest edge quarter.
pub fn quarter_from_fraction(fraction: f32) -> u32 {
    let quarter = (fraction * SLOTS_PER_HOUR as f32).floor();
    (quarter.max(0.0) as u32).min(SLOTS_PER_HOUR - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_grid_has_thirteen_hour_rows() {
        assert_eq!(HOUR_ROWS, 13);
        assert_eq!(GRID_START_MINUTES, 420);
        assert_eq!(GRID_END_MINUTES, 1200);
    }

    #[test]
    fn test_slot_round_trip_for_every_on_grid_slot() {
        for hour in GRID_START_HOUR..=GRID_END_HOUR {
            for quarter in 0..SLOTS_PER_HOUR {
                let slot = GridSlot::new(hour, quarter).unwrap();
                assert_eq!(slot_from_minutes(slot.to_minutes()), Some(slot));
            }
        }
    }

    #[test]
    fn test_slot_new_rejects_off_grid() {
        assert!(GridSlot::new(6, 0).is_none());
        assert!(GridSlot::new(20, 0).is_none());
        assert!(GridSlot::new(9, 4).is_none());
    }

    #[test]
    fn test_slot_from_minutes_rejects_off_boundary() {
        assert!(slot_from_minutes(425).is_none());
        assert!(slot_from_minutes(1200).is_none());
    }

    #[test]
    fn test_slot_time_matches_minutes() {
        let slot = GridSlot::new(9, 2).unwrap();
        assert_eq!(slot.to_minutes(), 570);
        assert_eq!(slot.time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn test_slot_of_time_resolves_interior_minutes() {
        let time = NaiveTime::from_hms_opt(9, 37, 12).unwrap();
        assert_eq!(slot_of_time(time), Some(GridSlot { hour: 9, quarter: 2 }));
    }

    #[test_case(0.0, 0; "row top")]
    #[test_case(0.24, 0; "just inside first quarter")]
    #[test_case(0.25, 1; "second quarter boundary")]
    #[test_case(0.6, 2; "third quarter")]
    #[test_case(0.99, 3; "row bottom")]
    #[test_case(1.2, 3; "clamped below row")]
    #[test_case(-0.3, 0; "clamped above row")]
    fn test_quarter_from_fraction(fraction: f32, expected: u32) {
        assert_eq!(quarter_from_fraction(fraction), expected);
    }
}
