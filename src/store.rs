//! In-memory appointment collection shared by every role scope.

use crate::models::appointments::{Appointment, Kind, NewAppointment, Status};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No such appointment")]
    NotFound,
}

pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    pub fn book_counseling(&mut self, data: NewAppointment) -> u64 {
        self.insert(data, Kind::Counseling)
    }

    pub fn book_advisory(&mut self, data: NewAppointment, teacher: String) -> u64 {
        self.insert(data, Kind::Advisory { teacher })
    }

    fn insert(&mut self, data: NewAppointment, kind: Kind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.appointments.push(Appointment {
            id,
            student: data.student,
            control_number: data.control_number,
            program: data.program,
            date: data.date,
            slot: data.slot,
            reason: data.reason,
            status: Status::Pending,
            kind,
        });
        tracing::info!(id, "appointment booked");
        id
    }

    pub fn confirm(&mut self, id: u64) -> Result<(), StoreError> {
        self.transition(id, Status::Confirmed)
    }

    pub fn cancel(&mut self, id: u64) -> Result<(), StoreError> {
        self.transition(id, Status::Cancelled)
    }

    pub fn mark_completed(&mut self, id: u64) -> Result<(), StoreError> {
        self.transition(id, Status::Completed)
    }

    // Last writer wins; no transition is refused based on the prior status.
    fn transition(&mut self, id: u64, status: Status) -> Result<(), StoreError> {
        match self.appointments.iter_mut().find(|a| a.id == id) {
            Some(appointment) => {
                appointment.status = status;
                tracing::info!(id, status = status.as_str(), "appointment status changed");
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }
}
