// Appointment module
// Scheduled-time model for the clinic day board

use chrono::{DateTime, Local, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::time::time_to_minutes;

/// Appointment category as recorded on the booking.
///
/// Categories are what staff book; the board folds some of them together
/// into shared display columns (see `models::column`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentCategory {
    Consultation,
    FollowUp,
    DataCollection,
    Delivery,
    /// Delivery-family variant; shares the delivery column.
    DeliveryCheck,
    Surgery,
    /// Always folds into the surgery column.
    SurgicalRevision,
    Emergency,
}

/// Booking status codes, mirroring the practice management workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCode {
    NotConfirmed,
    Firm,
    EFirm,
    EmergencyPatient,
    Arrived,
    Ready,
    #[serde(rename = "message-1")]
    Message1,
    #[serde(rename = "message-2")]
    Message2,
    Multi,
    #[serde(rename = "2-week-check")]
    TwoWeekCheck,
    NoShow,
    Rescheduled,
    Cancelled,
    Completed,
}

/// Validation errors for appointment data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Appointment id cannot be empty")]
    EmptyId,
    #[error("Appointment end time must be after start time")]
    InvalidTimes,
}

/// A unit of scheduled time on the day board.
///
/// Times are wall-clock times-of-day with minute granularity; the viewed
/// day is resolved by the caller before the snapshot reaches the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub category: AppointmentCategory,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: StatusCode,
    pub encounter_completed: bool,
    /// Deterministic tie-break for same-start appointments; `None` sorts
    /// last among same-start peers.
    pub created_at: Option<DateTime<Local>>,
    /// Forces the appointment into the emergency column regardless of
    /// category.
    pub is_emergency: bool,
    pub patient_name: Option<String>,
    pub note: Option<String>,
}

impl Appointment {
    /// Create a new appointment with required fields.
    ///
    /// # Examples
    /// ```
    /// use clinic_board::models::appointment::{Appointment, AppointmentCategory};
    /// use chrono::NaiveTime;
    ///
    /// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let end = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    /// let appt = Appointment::new("a1", AppointmentCategory::Consultation, start, end).unwrap();
    /// ```
    pub fn new(
        id: impl Into<String>,
        category: AppointmentCategory,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, AppointmentError> {
        let appointment = Self {
            id: id.into(),
            category,
            start,
            end,
            status: StatusCode::NotConfirmed,
            encounter_completed: false,
            created_at: None,
            is_emergency: false,
            patient_name: None,
            note: None,
        };
        appointment.validate()?;
        Ok(appointment)
    }

    /// Create a builder for constructing appointments with optional fields.
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
    }

    /// Validate the appointment.
    pub fn validate(&self) -> Result<(), AppointmentError> {
        if self.id.trim().is_empty() {
            return Err(AppointmentError::EmptyId);
        }
        if self.end <= self.start {
            return Err(AppointmentError::InvalidTimes);
        }
        Ok(())
    }

    /// Start time in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        time_to_minutes(self.start)
    }

    /// End time in minutes since midnight.
    pub fn end_minutes(&self) -> u32 {
        time_to_minutes(self.end)
    }

    /// Duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes().saturating_sub(self.start_minutes())
    }
}

/// Builder for creating appointments with optional fields
pub struct AppointmentBuilder {
    id: Option<String>,
    category: Option<AppointmentCategory>,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    status: StatusCode,
    encounter_completed: bool,
    created_at: Option<DateTime<Local>>,
    is_emergency: bool,
    patient_name: Option<String>,
    note: Option<String>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            category: None,
            start: None,
            end: None,
            status: StatusCode::NotConfirmed,
            encounter_completed: false,
            created_at: None,
            is_emergency: false,
            patient_name: None,
            note: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn category(mut self, category: AppointmentCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn start(mut self, start: NaiveTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn encounter_completed(mut self, done: bool) -> Self {
        self.encounter_completed = done;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn is_emergency(mut self, is_emergency: bool) -> Self {
        self.is_emergency = is_emergency;
        self
    }

    pub fn patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Build the appointment, validating required fields and invariants.
    pub fn build(self) -> Result<Appointment, AppointmentError> {
        let appointment = Appointment {
            id: self.id.ok_or(AppointmentError::EmptyId)?,
            category: self.category.unwrap_or(AppointmentCategory::Consultation),
            start: self.start.ok_or(AppointmentError::InvalidTimes)?,
            end: self.end.ok_or(AppointmentError::InvalidTimes)?,
            status: self.status,
            encounter_completed: self.encounter_completed,
            created_at: self.created_at,
            is_emergency: self.is_emergency,
            patient_name: self.patient_name,
            note: self.note,
        };
        appointment.validate()?;
        Ok(appointment)
    }
}

impl Default for AppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
