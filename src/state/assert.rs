use actix_web::web;
use anyhow::bail;

use crate::models::directory::Role;
use crate::state::{get_directory, get_roster, AppState};

// Admins pass every gate.
pub fn assert_role(
    state: &web::Data<AppState>,
    user: &str,
    allowed: &[Role],
) -> anyhow::Result<()> {
    let info = get_directory(state)?.resolve(user);
    if !info.present {
        bail!("No such user");
    }
    if info.role == Role::Admin || allowed.contains(&info.role) {
        return Ok(());
    }
    bail!("Permission denied");
}

pub fn assert_teacher(state: &web::Data<AppState>, name: &str) -> anyhow::Result<()> {
    let roster = get_roster(state)?;
    if roster.iter().any(|t| t.name == name) {
        return Ok(());
    }
    bail!("No such teacher");
}
