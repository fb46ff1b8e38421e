//! Layout items: the tagged input to the partition/assign pipeline.
//!
//! Real appointments and the ghost selection flow through the same
//! pipeline, so both are wrapped in one item type before any layout work.

use chrono::{DateTime, Local};

use crate::models::appointment::Appointment;
use crate::models::selection::PendingSelection;

/// Identity of a laid-out item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Appointment(String),
    /// The pending-selection preview; at most one per layout pass.
    Ghost,
}

/// One interval fed to the partitioner, column already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    pub id: ItemId,
    pub start_min: u32,
    pub end_min: u32,
    pub created_at: Option<DateTime<Local>>,
}

impl BoardItem {
    /// Wrap a real appointment.
    ///
    /// Upstream data should never contain `end <= start`, but the board
    /// must stay renderable with dirty input: such intervals are clamped to
    /// one minute instead of rejected.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        let start_min = appointment.start_minutes();
        let mut end_min = appointment.end_minutes();
        if end_min <= start_min {
            log::warn!(
                "appointment {} has end <= start, clamping to one minute",
                appointment.id
            );
            end_min = start_min + 1;
        }
        Self {
            id: ItemId::Appointment(appointment.id.clone()),
            start_min,
            end_min,
            created_at: appointment.created_at,
        }
    }

    /// Wrap the pending selection as the ghost pseudo-appointment.
    pub fn from_selection(selection: &PendingSelection) -> Self {
        let (start_min, end_min) = selection.range_minutes();
        Self {
            id: ItemId::Ghost,
            start_min,
            end_min,
            created_at: None,
        }
    }

    pub fn is_ghost(&self) -> bool {
        matches!(self.id, ItemId::Ghost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSlot;
    use crate::models::appointment::AppointmentCategory;
    use crate::models::column::Column;
    use chrono::NaiveTime;

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_from_appointment_carries_minutes() {
        let appointment =
            Appointment::new("a1", AppointmentCategory::Consultation, t(9, 0), t(9, 45)).unwrap();
        let item = BoardItem::from_appointment(&appointment);
        assert_eq!(item.id, ItemId::Appointment("a1".to_string()));
        assert_eq!((item.start_min, item.end_min), (540, 585));
        assert!(!item.is_ghost());
    }

    #[test]
    fn test_malformed_interval_clamps_instead_of_crashing() {
        // Bypass the model validation to simulate dirty upstream data.
        let mut appointment =
            Appointment::new("a1", AppointmentCategory::Consultation, t(9, 0), t(9, 30)).unwrap();
        appointment.end = t(9, 0);
        let item = BoardItem::from_appointment(&appointment);
        assert_eq!((item.start_min, item.end_min), (540, 541));
    }

    #[test]
    fn test_ghost_from_selection() {
        let selection =
            PendingSelection::at(Column::Surgery, GridSlot::new(9, 0).unwrap());
        let item = BoardItem::from_selection(&selection);
        assert!(item.is_ghost());
        assert_eq!((item.start_min, item.end_min), (540, 555));
    }
}
