mod requests;
mod responses;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::bail;

use crate::{
    models::directory::Role,
    models::teachers::TeacherData,
    protocol::SimpleResponse,
    state::{assert, get_directory, get_roster, get_store, AppState},
    utils,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_appoint)
        .service(add_teacher)
        .service(search_teacher)
        .service(assign_role)
        .service(search_directory);
}

crate::post_funcs! {
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (add_teacher, "/add_teacher", AddTeacherRequest, SimpleResponse),
    (search_teacher, "/search_teacher", SearchTeacherRequest, SearchTeacherResponse),
    (assign_role, "/assign_role", AssignRoleRequest, SimpleResponse),
    (search_directory, "/search_directory", SearchDirectoryRequest, SearchDirectoryResponse),
}

async fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Admin])?;

    let status = utils::parse_status_opt(info.status)?;
    let kind = utils::parse_kind_opt(info.kind)?;

    let appointments: Vec<SearchAppointItem> = get_store(&state)?
        .appointments()
        .iter()
        .filter(|a| status.map_or(true, |s| a.status == s))
        .filter(|a| kind.map_or(true, |k| a.kind.as_str() == k))
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

async fn add_teacher_impl(
    state: web::Data<AppState>,
    info: web::Json<AddTeacherRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Admin])?;
    utils::assert_filled(&[("name", &info.name), ("specialty", &info.specialty)])?;

    let mut roster = get_roster(&state)?;
    if roster.iter().any(|t| t.name == info.name) {
        bail!("Duplicated teacher name");
    }
    roster.push(TeacherData {
        name: info.name,
        specialty: info.specialty,
        email: info.email,
        phone: info.phone,
    });

    Ok(SimpleResponse::ok())
}

async fn search_teacher_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchTeacherRequest>,
) -> anyhow::Result<SearchTeacherResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Admin])?;

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

async fn assign_role_impl(
    state: web::Data<AppState>,
    info: web::Json<AssignRoleRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Admin])?;
    utils::assert_filled(&[("target", &info.target)])?;

    let role = match Role::from_label(&info.role) {
        Some(Role::Unknown) | None => bail!("Wrong format on 'role'"),
        Some(role) => role,
    };

    get_directory(&state)?.assign(info.target.clone(), role);
    tracing::info!(user = %info.target, role = role.as_str(), "role assigned");

    Ok(SimpleResponse::ok())
}

async fn search_directory_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchDirectoryRequest>,
) -> anyhow::Result<SearchDirectoryResponse> {
    let info = info.into_inner();
    assert::assert_role(&state, &info.user, &[Role::Admin])?;

    let role = match info.role {
        Some(label) => match Role::from_label(&label) {
            Some(role) => Some(role),
            None => bail!("Wrong format on 'role'"),
        },
        None => None,
    };

    let users: Vec<DirectoryItem> = get_directory(&state)?
        .entries()
        .filter(|(_, r)| role.map_or(true, |wanted| **r == wanted))
        .map(|(user, r)| DirectoryItem {
            user: user.clone(),
            role: r.as_str().to_string(),
        })
        .collect();

    Ok(SearchDirectoryResponse {
        success: true,
        err: "".to_string(),
        users: utils::page(users, info.first_index, info.limit),
    })
}
