//! The appointment collection and its persisted copy.

use chrono::Utc;

use crate::appointment::{Appointment, AppointmentDraft, AppointmentId};
use crate::error::{BookingError, BookingResult};
use crate::storage::{Storage, APPOINTMENTS_KEY};

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed(Appointment),
    Declined,
    NotFound,
}

/// In-memory appointment collection, kept in sync with `storage`.
///
/// Order is insertion order. Every successful mutation rewrites the whole
/// collection to storage; a failed write rolls the mutation back.
pub struct AppointmentStore<S: Storage> {
    storage: S,
    appointments: Vec<Appointment>,
    last_id: AppointmentId,
}

impl<S: Storage> AppointmentStore<S> {
    /// Load the persisted collection. A missing or unreadable entry yields an
    /// empty store.
    pub fn load(storage: S) -> Self {
        let appointments = match storage.get(APPOINTMENTS_KEY) {
            Ok(Some(content)) => match serde_json::from_str::<Vec<Appointment>>(&content) {
                Ok(appointments) => appointments,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable appointments entry: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read appointments entry: {e}");
                Vec::new()
            }
        };

        let last_id = appointments.iter().map(|a| a.id).max().unwrap_or(0);
        tracing::debug!(count = appointments.len(), "loaded appointments");

        AppointmentStore {
            storage,
            appointments,
            last_id,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate `draft`, append it with a fresh id and persist.
    /// On validation failure nothing changes and nothing is written.
    pub fn add(&mut self, draft: &AppointmentDraft) -> BookingResult<&Appointment> {
        let valid = draft.validate()?;

        let previous_last_id = self.last_id;
        let id = self.next_id()?;
        self.appointments.push(valid.into_appointment(id));

        if let Err(e) = self.persist() {
            self.appointments.pop();
            self.last_id = previous_last_id;
            return Err(e);
        }

        tracing::info!(id, "added appointment");
        let index = self.appointments.len() - 1;
        Ok(&self.appointments[index])
    }

    /// Remove the appointment with `id` once `confirm` agrees.
    /// `confirm` is only asked when the appointment exists.
    pub fn delete<F>(&mut self, id: AppointmentId, confirm: F) -> BookingResult<DeleteOutcome>
    where
        F: FnOnce(&Appointment) -> bool,
    {
        let Some(index) = self.appointments.iter().position(|a| a.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        if !confirm(&self.appointments[index]) {
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.appointments.remove(index);

        if let Err(e) = self.persist() {
            self.appointments.insert(index, removed);
            return Err(e);
        }

        tracing::info!(id, "deleted appointment");
        Ok(DeleteOutcome::Removed(removed))
    }

    /// Overwrite the persisted collection with the current one.
    pub fn persist(&mut self) -> BookingResult<()> {
        let content = serde_json::to_string_pretty(&self.appointments)?;
        self.storage.set(APPOINTMENTS_KEY, &content)
    }

    /// Milliseconds since the epoch, bumped past every id issued so far.
    fn next_id(&mut self) -> BookingResult<AppointmentId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let bumped = self
            .last_id
            .checked_add(1)
            .ok_or(BookingError::IdsExhausted(self.last_id))?;
        self.last_id = now.max(bumped);
        Ok(self.last_id)
    }
}
