//! Core types for the booking tool.
//!
//! - `appointment`: the appointment record and the draft it is built from
//! - `store`: the persisted appointment collection
//! - `view`: search filtering and grouping by day
//! - `locale`: bundled translations and the persisted locale setting
//! - `config`: the global configuration file

pub mod appointment;
pub mod config;
pub mod error;
pub mod locale;
pub mod storage;
pub mod store;
pub mod view;

pub use appointment::{Appointment, AppointmentDraft, AppointmentId, Field};
pub use error::{BookingError, BookingResult};
pub use store::{AppointmentStore, DeleteOutcome};
pub use view::ViewMode;
