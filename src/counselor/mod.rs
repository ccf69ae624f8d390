mod requests;
mod responses;

use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    models::appointments::Kind,
    models::directory::Role,
    protocol::SimpleResponse,
    state::{assert, get_store, AppState},
    utils,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_appoint)
        .service(confirm_appoint)
        .service(cancel_appoint)
        .service(complete_appoint);
}

crate::post_funcs! {
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (confirm_appoint, "/confirm_appoint", ConfirmAppointRequest, SimpleResponse),
    (cancel_appoint, "/cancel_appoint", CancelAppointRequest, SimpleResponse),
    (complete_appoint, "/complete_appoint", CompleteAppointRequest, SimpleResponse),
}

async fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Counselor])?;

    let status = utils::parse_status_opt(info.status)?;
    let date = utils::parse_date_opt(info.date)?;

    let appointments: Vec<SearchAppointItem> = get_store(&state)?
        .appointments()
        .iter()
        .filter(|a| matches!(a.kind, Kind::Counseling))
        .filter(|a| status.map_or(true, |s| a.status == s))
        .filter(|a| date.map_or(true, |d| a.date == d))
        .map(|a| SearchAppointItem {
            id: a.id,
            student: a.student.clone(),
            control_number: a.control_number.clone(),
            program: a.program.clone(),
            date: utils::format_date_str(&a.date),
            time: a.slot.label().to_string(),
            reason: a.reason.clone(),
            status: a.status.as_str().to_string(),
        })
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        appointments: utils::page(appointments, info.first_index, info.limit),
    })
}

async fn confirm_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<ConfirmAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Counselor])?;

    get_store(&state)?.confirm(info.id)?;

    Ok(SimpleResponse::ok())
}

async fn cancel_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<CancelAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Counselor])?;

    get_store(&state)?.cancel(info.id)?;

    Ok(SimpleResponse::ok())
}

async fn complete_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<CompleteAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Counselor])?;

    get_store(&state)?.mark_completed(info.id)?;

    Ok(SimpleResponse::ok())
}
