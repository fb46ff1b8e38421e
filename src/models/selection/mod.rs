// Selection module
// Ephemeral drag-selection state shared between the gesture controller
// and the layout pass

use serde::{Deserialize, Serialize};

use crate::grid::{GridSlot, SLOT_MINUTES};
use crate::models::column::Column;

/// An in-progress or just-settled drag selection.
///
/// Bound to one column for its whole lifetime; never persisted.  While
/// visible it participates in lane packing as the ghost pseudo-appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSelection {
    pub anchor: GridSlot,
    pub cursor: GridSlot,
    pub column: Column,
    /// Kept true after the gesture settles so the highlighted range stays
    /// visible while a dependent dialog is open.
    pub visible: bool,
}

impl PendingSelection {
    /// Start a selection at a slot; anchor and cursor coincide.
    pub fn at(column: Column, slot: GridSlot) -> Self {
        Self {
            anchor: slot,
            cursor: slot,
            column,
            visible: true,
        }
    }

    /// The covered range in minutes since midnight.
    ///
    /// The trailing quarter is inclusive, so a single-slot selection spans
    /// exactly one 15-minute slot.
    pub fn range_minutes(&self) -> (u32, u32) {
        let a = self.anchor.to_minutes();
        let c = self.cursor.to_minutes();
        (a.min(c), a.max(c) + SLOT_MINUTES)
    }
}
