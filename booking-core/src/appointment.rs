//! Appointment record and the form draft it is created from.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};

pub type AppointmentId = u64;

/// Accepted layouts for the `date` field when it is parsed for display.
const DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// A stored booking. Only ever built by the store from a validated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub name: String,
    pub phone: String,
    pub service: String,
    /// ISO-8601-like local date and time, e.g. `2024-06-01T10:00`.
    pub date: String,
}

impl Appointment {
    /// Calendar-day portion of `date`, used as the grouping key.
    ///
    /// No timezone normalization: `2024-06-01T23:30+02:00` groups under
    /// `2024-06-01`.
    pub fn day_key(&self) -> &str {
        day_key(&self.date)
    }

    /// Parse `date` as a naive local date-time, if it has a known layout.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&self.date, fmt).ok())
    }

    /// Text the search query is matched against.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.phone, self.service).to_lowercase()
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.service)
    }
}

pub fn day_key(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// A required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Service,
    Date,
}

impl Field {
    /// Translation key of the "field is required" notice.
    pub fn required_key(&self) -> &'static str {
        match self {
            Field::Name => "error.name_required",
            Field::Phone => "error.phone_required",
            Field::Service => "error.service_required",
            Field::Date => "error.date_required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Service => "Service",
            Field::Date => "Date",
        };
        f.write_str(label)
    }
}

/// Unvalidated form input for a new appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
}

impl AppointmentDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        service: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        AppointmentDraft {
            name: name.into(),
            phone: phone.into(),
            service: service.into(),
            date: date.into(),
        }
    }

    /// Check that every field is present and return the trimmed draft.
    /// Fields are checked in form order; the first empty one is reported.
    pub fn validate(&self) -> BookingResult<AppointmentDraft> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Service, &self.service),
            (Field::Date, &self.date),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BookingError::MissingField(*field));
        }

        Ok(AppointmentDraft {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: self.service.trim().to_string(),
            date: self.date.trim().to_string(),
        })
    }

    pub(crate) fn into_appointment(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            name: self.name,
            phone: self.phone,
            service: self.service,
            date: self.date,
        }
    }
}
