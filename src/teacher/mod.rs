mod requests;
mod responses;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::bail;

use crate::{
    models::appointments::{Kind, NewAppointment},
    models::directory::Role,
    protocol::{BookResponse, SimpleResponse},
    state::{assert, get_roster, get_store, AppState},
    utils,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_appoint)
        .service(confirm_appoint)
        .service(cancel_appoint)
        .service(complete_appoint)
        .service(book_appoint)
        .service(view_teacher);
}

crate::post_funcs! {
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (confirm_appoint, "/confirm_appoint", ConfirmAppointRequest, SimpleResponse),
    (cancel_appoint, "/cancel_appoint", CancelAppointRequest, SimpleResponse),
    (complete_appoint, "/complete_appoint", CompleteAppointRequest, SimpleResponse),
    (book_appoint, "/book_appoint", BookAppointRequest, BookResponse),
    (view_teacher, "/view_teacher", ViewTeacherRequest, ViewTeacherResponse),
}

async fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Teacher])?;

    let status = utils::parse_status_opt(info.status.clone())?;
    let date = utils::parse_date_opt(info.date.clone())?;

    let appointments: Vec<SearchAppointItem> = get_store(&state)?
        .appointments()
        .iter()
        .filter(|a| matches!(a.kind, Kind::Advisory { .. }))
        .filter(|a| utils::match_pattern_opt(a.teacher().unwrap_or(""), &info.teacher))
        .filter(|a| status.map_or(true, |s| a.status == s))
        .filter(|a| date.map_or(true, |d| a.date == d))
        .map(|a| SearchAppointItem {
            id: a.id,
            student: a.student.clone(),
            control_number: a.control_number.clone(),
            program: a.program.clone(),
            teacher: a.teacher().unwrap_or("").to_string(),
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
    assert::assert_role(&state, &info.user, &[Role::Teacher])?;

    get_store(&state)?.confirm(info.id)?;

    Ok(SimpleResponse::ok())
}

async fn cancel_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<CancelAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Teacher])?;

    get_store(&state)?.cancel(info.id)?;

    Ok(SimpleResponse::ok())
}

async fn complete_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<CompleteAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Teacher])?;

    get_store(&state)?.mark_completed(info.id)?;

    Ok(SimpleResponse::ok())
}

// Teachers can register a visit on a student's behalf, same as the
// walk-in form on their dashboard.
async fn book_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<BookAppointRequest>,
) -> anyhow::Result<BookResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Teacher])?;
    utils::assert_filled(&[
        ("student", &info.student),
        ("control_number", &info.control_number),
        ("program", &info.program),
        ("teacher", &info.teacher),
        ("reason", &info.reason),
    ])?;
    assert::assert_teacher(&state, &info.teacher)?;

    let date = utils::parse_date_str(&info.date)?;
    let slot = utils::parse_slot_str(&info.slot)?;

    let id = get_store(&state)?.book_advisory(
        NewAppointment {
            student: info.student,
            control_number: info.control_number,
            program: info.program,
            date,
            slot,
            reason: info.reason,
        },
        info.teacher,
    );

    Ok(BookResponse {
        success: true,
        err: "".to_string(),
        id,
    })
}

async fn view_teacher_impl(
    state: web::Data<AppState>,
    info: web::Json<ViewTeacherRequest>,
) -> anyhow::Result<ViewTeacherResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Teacher])?;

    let roster = get_roster(&state)?;
    let teacher = match roster.iter().find(|t| t.name == info.name) {
        Some(teacher) => teacher,
        None => bail!("No such teacher"),
    };

    Ok(ViewTeacherResponse {
        success: true,
        err: "".to_string(),
        name: teacher.name.clone(),
        specialty: teacher.specialty.clone(),
        email: teacher.email.clone(),
        phone: teacher.phone.clone(),
    })
}
