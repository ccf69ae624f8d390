pub mod assert;

use std::sync::{Mutex, MutexGuard};

use actix_web::web;
use anyhow::anyhow;

use crate::models::directory::RoleDirectory;
use crate::models::teachers::{self, TeacherData};
use crate::store::AppointmentStore;

// Owned by the composition root and handed to every handler through
// `web::Data`; screens never hold state of their own.
pub struct AppState {
    pub appointments: Mutex<AppointmentStore>,
    pub roster: Mutex<Vec<TeacherData>>,
    pub directory: Mutex<RoleDirectory>,
}

impl AppState {
    pub fn new(directory: RoleDirectory) -> Self {
        Self {
            appointments: Mutex::new(AppointmentStore::new()),
            roster: Mutex::new(teachers::default_roster()),
            directory: Mutex::new(directory),
        }
    }
}

pub fn get_store<'a>(
    state: &'a web::Data<AppState>,
) -> anyhow::Result<MutexGuard<'a, AppointmentStore>> {
    state
        .appointments
        .lock()
        .map_err(|_| anyhow!("Appointment store lock poisoned"))
}

pub fn get_roster<'a>(
    state: &'a web::Data<AppState>,
) -> anyhow::Result<MutexGuard<'a, Vec<TeacherData>>> {
    state
        .roster
        .lock()
        .map_err(|_| anyhow!("Teacher roster lock poisoned"))
}

pub fn get_directory<'a>(
    state: &'a web::Data<AppState>,
) -> anyhow::Result<MutexGuard<'a, RoleDirectory>> {
    state
        .directory
        .lock()
        .map_err(|_| anyhow!("Role directory lock poisoned"))
}
