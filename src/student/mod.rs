mod requests;
mod responses;

use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    models::appointments::NewAppointment,
    models::directory::Role,
    protocol::{BookResponse, SimpleResponse},
    state::{assert, get_roster, get_store, AppState},
    utils,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(book_counseling)
        .service(book_advisory)
        .service(search_teacher)
        .service(search_appoint)
        .service(cancel_appoint);
}

crate::post_funcs! {
    (book_counseling, "/book_counseling", BookCounselingRequest, BookResponse),
    (book_advisory, "/book_advisory", BookAdvisoryRequest, BookResponse),
    (search_teacher, "/search_teacher", SearchTeacherRequest, SearchTeacherResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (cancel_appoint, "/cancel_appoint", CancelAppointRequest, SimpleResponse),
}

async fn book_counseling_impl(
    state: web::Data<AppState>,
    info: web::Json<BookCounselingRequest>,
) -> anyhow::Result<BookResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Student, Role::Counselor])?;
    utils::assert_filled(&[
        ("student", &info.student),
        ("control_number", &info.control_number),
        ("program", &info.program),
        ("reason", &info.reason),
    ])?;

    let date = utils::parse_date_str(&info.date)?;
    let slot = utils::parse_slot_str(&info.slot)?;

    let id = get_store(&state)?.book_counseling(NewAppointment {
        student: info.student,
        control_number: info.control_number,
        program: info.program,
        date,
        slot,
        reason: info.reason,
    });

    Ok(BookResponse {
        success: true,
        err: "".to_string(),
        id,
    })
}

async fn book_advisory_impl(
    state: web::Data<AppState>,
    info: web::Json<BookAdvisoryRequest>,
) -> anyhow::Result<BookResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Student])?;
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

async fn search_teacher_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchTeacherRequest>,
) -> anyhow::Result<SearchTeacherResponse> {
    let info = info.into_inner();
    assert::assert_role(
        &state,
        &info.user,
        &[Role::Student, Role::Counselor, Role::Teacher],
    )?;

    let teachers: Vec<SearchTeacherItem> = get_roster(&state)?
        .iter()
        .filter(|t| utils::match_pattern_opt(&t.name, &info.name))
        .filter(|t| utils::match_pattern_opt(&t.specialty, &info.specialty))
        .map(|t| SearchTeacherItem {
            name: t.name.clone(),
            specialty: t.specialty.clone(),
            email: t.email.clone(),
            phone: t.phone.clone(),
        })
        .collect();

    Ok(SearchTeacherResponse {
        success: true,
        err: "".to_string(),
        teachers: utils::page(teachers, info.first_index, info.limit),
    })
}

async fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Student])?;

    let status = utils::parse_status_opt(info.status.clone())?;
    let kind = utils::parse_kind_opt(info.kind.clone())?;
    let date = utils::parse_date_opt(info.date.clone())?;

    let appointments: Vec<SearchAppointItem> = get_store(&state)?
        .appointments()
        .iter()
        .filter(|a| status.map_or(true, |s| a.status == s))
        .filter(|a| kind.map_or(true, |k| a.kind.as_str() == k))
        .filter(|a| {
            info.control_number
                .as_ref()
                .map_or(true, |c| &a.control_number == c)
        })
        .filter(|a| date.map_or(true, |d| a.date == d))
        .map(|a| SearchAppointItem {
            id: a.id,
            kind: a.kind.as_str().to_string(),
            student: a.student.clone(),
            control_number: a.control_number.clone(),
            program: a.program.clone(),
            date: utils::format_date_str(&a.date),
            time: a.slot.label().to_string(),
            reason: a.reason.clone(),
            status: a.status.as_str().to_string(),
            teacher: a.teacher().unwrap_or("").to_string(),
        })
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        appointments: utils::page(appointments, info.first_index, info.limit),
    })
}

async fn cancel_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<CancelAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Student])?;

    get_store(&state)?.cancel(info.id)?;

    Ok(SimpleResponse::ok())
}
