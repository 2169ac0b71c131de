// --- File: crates/bookify_appointments/src/model.rs ---
use bookify_common::ApiError;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wire format for appointment dates, e.g. "17-10-2024".
pub const DATE_FORMAT: &str = "%d-%m-%Y";
/// Wire format for appointment times, 24-hour, e.g. "10:00".
pub const TIME_FORMAT: &str = "%H:%M";

/// A stored appointment.
///
/// `id` is allocator-assigned and never reused; `phone` is the owner's
/// identity key and `name` a snapshot of the owner's full name at creation
/// time. All three survive updates regardless of payload contents.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
}

/// Client payload for creating or updating an appointment. Identity fields
/// (id, owner, name) are deliberately absent: the server assigns them.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRequest {
    pub date: String,
    pub time: String,
    pub service: String,
}

impl AppointmentRequest {
    /// Checks the date and time shape and rejects dates earlier than today.
    ///
    /// Runs before any store mutation, so a failed request leaves no partial
    /// write behind.
    pub fn validate(&self) -> Result<(), ApiError> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            ApiError::Validation(format!(
                "Invalid date: must be in the format dd-mm-yyyy, got '{}'",
                self.date
            ))
        })?;
        if date < Local::now().date_naive() {
            return Err(ApiError::Validation("Invalid date".to_string()));
        }
        NaiveTime::parse_from_str(&self.time, TIME_FORMAT).map_err(|_| {
            ApiError::Validation("Invalid time: Time must be in the format HH:MM.".to_string())
        })?;
        Ok(())
    }
}

/// Combines stored date and time strings into a single timestamp.
///
/// Returns None for records that do not parse; stored records always do,
/// since they were validated on the way in.
pub fn combine_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;
    Some(date.and_time(time))
}
