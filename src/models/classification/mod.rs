// Classification module
// Display classification for appointment cards

use serde::{Deserialize, Serialize};

use super::appointment::{AppointmentCategory, StatusCode};

/// Display classification used to pick a card's rendering rule set.
///
/// Not part of the layout algorithm; the presentation layer maps each
/// classification to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Rescheduled bookings render muted, overriding everything else.
    Muted,
    Completed,
    /// No-shows and cancellations.
    Alert,
    /// Encounter finished but booking not yet marked completed.
    Success,
    /// The category's own default rendering.
    Category(AppointmentCategory),
}

/// Classify an appointment card for rendering.
///
/// Precedence table, evaluated top to bottom, first match wins.  Pure in
/// its three inputs.
pub fn classify(
    category: AppointmentCategory,
    status: StatusCode,
    encounter_completed: bool,
) -> Classification {
    match status {
        StatusCode::Rescheduled => Classification::Muted,
        StatusCode::Completed => Classification::Completed,
        StatusCode::NoShow | StatusCode::Cancelled => Classification::Alert,
        _ if encounter_completed => Classification::Success,
        _ => Classification::Category(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StatusCode::Rescheduled, Classification::Muted; "rescheduled is muted")]
    #[test_case(StatusCode::Completed, Classification::Completed; "completed")]
    #[test_case(StatusCode::NoShow, Classification::Alert; "no show alerts")]
    #[test_case(StatusCode::Cancelled, Classification::Alert; "cancelled alerts")]
    fn test_status_precedence(status: StatusCode, expected: Classification) {
        // Encounter flag must not override any of these rows.
        assert_eq!(classify(AppointmentCategory::Surgery, status, true), expected);
        assert_eq!(classify(AppointmentCategory::Surgery, status, false), expected);
    }

    #[test]
    fn test_encounter_completed_beats_category_default() {
        assert_eq!(
            classify(AppointmentCategory::FollowUp, StatusCode::Arrived, true),
            Classification::Success
        );
    }

    #[test]
    fn test_falls_through_to_category_default() {
        assert_eq!(
            classify(AppointmentCategory::Delivery, StatusCode::Firm, false),
            Classification::Category(AppointmentCategory::Delivery)
        );
    }

    #[test]
    fn test_rescheduled_beats_completed_flag() {
        // Row 1 outranks row 4 even when both would match.
        assert_eq!(
            classify(AppointmentCategory::Consultation, StatusCode::Rescheduled, true),
            Classification::Muted
        );
    }
}
