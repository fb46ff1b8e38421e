// Column module
// Resolved display columns and the category folding rules

use serde::{Deserialize, Serialize};

use super::appointment::{Appointment, AppointmentCategory};

/// The six display columns of the day board.
///
/// A column is where an appointment renders after folding: surgical
/// revisions share the surgery column, delivery checks share the delivery
/// column, and the emergency flag overrides everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    Consultation,
    FollowUp,
    DataCollection,
    Delivery,
    Surgery,
    Emergency,
}

/// Number of display columns.
pub const COLUMN_COUNT: usize = 6;

impl Column {
    /// All columns in display order, left to right.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Consultation,
        Column::FollowUp,
        Column::DataCollection,
        Column::Delivery,
        Column::Surgery,
        Column::Emergency,
    ];

    /// Zero-based display index, left to right.
    pub fn index(self) -> usize {
        match self {
            Column::Consultation => 0,
            Column::FollowUp => 1,
            Column::DataCollection => 2,
            Column::Delivery => 3,
            Column::Surgery => 4,
            Column::Emergency => 5,
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Column::Consultation => "Consultation",
            Column::FollowUp => "Follow-up",
            Column::DataCollection => "Data collection",
            Column::Delivery => "Delivery",
            Column::Surgery => "Surgery",
            Column::Emergency => "Emergency",
        }
    }

    /// Resolve the display column for an appointment.
    ///
    /// The emergency flag wins over the category; every other category maps
    /// through the folding table.  All layout code works with resolved
    /// columns only, never raw categories.
    pub fn resolve(appointment: &Appointment) -> Column {
        Self::resolve_parts(appointment.category, appointment.is_emergency)
    }

    /// Pure form of [`Column::resolve`] for callers outside the model.
    pub fn resolve_parts(category: AppointmentCategory, is_emergency: bool) -> Column {
        if is_emergency {
            return Column::Emergency;
        }
        match category {
            AppointmentCategory::Consultation => Column::Consultation,
            AppointmentCategory::FollowUp => Column::FollowUp,
            AppointmentCategory::DataCollection => Column::DataCollection,
            AppointmentCategory::Delivery | AppointmentCategory::DeliveryCheck => Column::Delivery,
            AppointmentCategory::Surgery | AppointmentCategory::SurgicalRevision => Column::Surgery,
            AppointmentCategory::Emergency => Column::Emergency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AppointmentCategory::Consultation, Column::Consultation)]
    #[test_case(AppointmentCategory::FollowUp, Column::FollowUp)]
    #[test_case(AppointmentCategory::DataCollection, Column::DataCollection)]
    #[test_case(AppointmentCategory::Delivery, Column::Delivery)]
    #[test_case(AppointmentCategory::DeliveryCheck, Column::Delivery)]
    #[test_case(AppointmentCategory::Surgery, Column::Surgery)]
    #[test_case(AppointmentCategory::SurgicalRevision, Column::Surgery)]
    #[test_case(AppointmentCategory::Emergency, Column::Emergency)]
    fn test_folding_table(category: AppointmentCategory, expected: Column) {
        assert_eq!(Column::resolve_parts(category, false), expected);
    }

    #[test]
    fn test_emergency_flag_overrides_category() {
        for category in [
            AppointmentCategory::Consultation,
            AppointmentCategory::Surgery,
            AppointmentCategory::DeliveryCheck,
        ] {
            assert_eq!(Column::resolve_parts(category, true), Column::Emergency);
        }
    }

    #[test]
    fn test_display_order_is_total() {
        for (expected, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), expected);
        }
    }
}
