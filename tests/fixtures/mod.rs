// Test fixtures - reusable test data
// Provides consistent appointment data across test files

use chrono::{Local, NaiveTime, TimeZone};
use clinic_board::models::appointment::{Appointment, AppointmentCategory, StatusCode};

/// Wall-clock time on the viewed day.
pub fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// A plain consultation appointment.
pub fn consultation(id: &str, start: NaiveTime, end: NaiveTime) -> Appointment {
    Appointment::new(id, AppointmentCategory::Consultation, start, end).unwrap()
}

/// A surgery appointment with a creation timestamp for tie-breaking.
pub fn surgery_created_at(id: &str, start: NaiveTime, end: NaiveTime, hour: u32) -> Appointment {
    Appointment::builder()
        .id(id)
        .category(AppointmentCategory::Surgery)
        .start(start)
        .end(end)
        .created_at(Local.with_ymd_and_hms(2026, 3, 2, hour, 0, 0).unwrap())
        .build()
        .unwrap()
}

/// The three-appointment overlap scenario: 09:00-09:30, 09:15-09:45,
/// 09:30-10:00, all consultations.
pub fn consultation_chain() -> Vec<Appointment> {
    vec![
        consultation("first", t(9, 0), t(9, 30)),
        consultation("second", t(9, 15), t(9, 45)),
        consultation("third", t(9, 30), t(10, 0)),
    ]
}

/// An emergency walk-in booked under a consultation category.
pub fn emergency_consultation(id: &str) -> Appointment {
    Appointment::builder()
        .id(id)
        .category(AppointmentCategory::Consultation)
        .start(t(10, 0))
        .end(t(10, 30))
        .status(StatusCode::EmergencyPatient)
        .is_emergency(true)
        .build()
        .unwrap()
}
