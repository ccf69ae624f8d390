use actix_web::{test, web, App};
use serde_json::{json, Value};

use orienta_server::models::directory::{DirectoryEntry, Role, RoleDirectory};
use orienta_server::state::AppState;
use orienta_server::{admin, counselor, student, teacher};

const STUDENT: &str = "ana@estudiantes.edu";
const COUNSELOR: &str = "ps.laura@universidad.edu";
const TEACHER: &str = "r.medina@universidad.edu";
const ADMIN: &str = "direccion@universidad.edu";

fn seeded_state() -> web::Data<AppState> {
    let directory = RoleDirectory::from_entries(vec![
        DirectoryEntry {
            user: STUDENT.to_string(),
            role: Role::Student,
        },
        DirectoryEntry {
            user: COUNSELOR.to_string(),
            role: Role::Counselor,
        },
        DirectoryEntry {
            user: TEACHER.to_string(),
            role: Role::Teacher,
        },
        DirectoryEntry {
            user: ADMIN.to_string(),
            role: Role::Admin,
        },
    ]);
    web::Data::new(AppState::new(directory))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .service(web::scope("/student").configure(student::config))
                .service(web::scope("/counselor").configure(counselor::config))
                .service(web::scope("/teacher").configure(teacher::config))
                .service(web::scope("/admin").configure(admin::config)),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri($uri)
            .set_json(&$body)
            .to_request();
        let resp: Value = test::read_response_json(&mut $app, req).await;
        resp
    }};
}

fn counseling_booking() -> Value {
    json!({
        "user": STUDENT,
        "student": "Ana",
        "control_number": "2021099",
        "program": "CS",
        "date": "2024-05-01",
        "slot": "09:00 - 10:00",
        "reason": "stress",
    })
}

#[actix_rt::test]
async fn student_books_and_counselor_triages() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let resp = post_json!(app, "/student/book_counseling", counseling_booking());
    assert_eq!(resp["success"], json!(true));
    assert_eq!(resp["err"], json!(""));
    let id = resp["id"].as_u64().unwrap();

    let resp = post_json!(app, "/counselor/search_appoint", json!({ "user": COUNSELOR }));
    assert_eq!(resp["success"], json!(true));
    let items = resp["appointments"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["student"], json!("Ana"));
    assert_eq!(items[0]["status"], json!("pending"));
    assert_eq!(items[0]["time"], json!("09:00 - 10:00"));

    let resp = post_json!(
        app,
        "/counselor/confirm_appoint",
        json!({ "user": COUNSELOR, "id": id })
    );
    assert_eq!(resp["success"], json!(true));

    let resp = post_json!(
        app,
        "/counselor/complete_appoint",
        json!({ "user": COUNSELOR, "id": id })
    );
    assert_eq!(resp["success"], json!(true));

    let resp = post_json!(
        app,
        "/admin/search_appoint",
        json!({ "user": ADMIN, "status": "completed" })
    );
    let items = resp["appointments"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], json!("counseling"));
    assert_eq!(items[0]["teacher"], json!(""));
}

#[actix_rt::test]
async fn unknown_requesters_are_rejected() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let mut body = counseling_booking();
    body["user"] = json!("nobody@universidad.edu");
    let resp = post_json!(app, "/student/book_counseling", body);
    assert_eq!(resp["success"], json!(false));
    assert_eq!(resp["err"], json!("No such user"));
}

#[actix_rt::test]
async fn role_gate_blocks_students_from_triage() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let _ = post_json!(app, "/student/book_counseling", counseling_booking());

    let resp = post_json!(
        app,
        "/counselor/confirm_appoint",
        json!({ "user": STUDENT, "id": 1 })
    );
    assert_eq!(resp["success"], json!(false));
    assert_eq!(resp["err"], json!("Permission denied"));
}

#[actix_rt::test]
async fn booking_validates_slot_date_and_required_fields() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let mut body = counseling_booking();
    body["slot"] = json!("08:00 - 09:00");
    let resp = post_json!(app, "/student/book_counseling", body);
    assert_eq!(resp["err"], json!("Unknown time slot"));

    let mut body = counseling_booking();
    body["date"] = json!("01/05/2024");
    let resp = post_json!(app, "/student/book_counseling", body);
    assert_eq!(resp["err"], json!("Wrong format on 'date'"));

    let mut body = counseling_booking();
    body["reason"] = json!("   ");
    let resp = post_json!(app, "/student/book_counseling", body);
    assert_eq!(resp["err"], json!("Missing required field 'reason'"));

    // Nothing reached the store.
    let resp = post_json!(app, "/admin/search_appoint", json!({ "user": ADMIN }));
    assert_eq!(resp["appointments"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn advisory_bookings_require_a_rostered_teacher() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let booking = |teacher: &str| {
        json!({
            "user": STUDENT,
            "student": "Luis",
            "control_number": "2021100",
            "program": "Industrial Engineering",
            "teacher": teacher,
            "date": "2024-06-12",
            "slot": "14:00 - 15:00",
            "reason": "final project review",
        })
    };

    let resp = post_json!(app, "/student/book_advisory", booking("Dr. Nobody"));
    assert_eq!(resp["success"], json!(false));
    assert_eq!(resp["err"], json!("No such teacher"));

    let resp = post_json!(
        app,
        "/admin/add_teacher",
        json!({
            "user": ADMIN,
            "name": "Dr. Nobody",
            "specialty": "Mathematics",
            "email": "nobody@universidad.edu",
            "phone": "55 0000 0000",
        })
    );
    assert_eq!(resp["success"], json!(true));

    let resp = post_json!(app, "/student/book_advisory", booking("Dr. Nobody"));
    assert_eq!(resp["success"], json!(true));

    let resp = post_json!(
        app,
        "/teacher/search_appoint",
        json!({ "user": TEACHER, "teacher": "Dr. Nobody" })
    );
    let items = resp["appointments"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["teacher"], json!("Dr. Nobody"));
    assert_eq!(items[0]["student"], json!("Luis"));
}

#[actix_rt::test]
async fn transitions_on_unknown_ids_report_not_found() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let resp = post_json!(
        app,
        "/counselor/confirm_appoint",
        json!({ "user": COUNSELOR, "id": 999 })
    );
    assert_eq!(resp["success"], json!(false));
    assert_eq!(resp["err"], json!("No such appointment"));
}

#[actix_rt::test]
async fn student_search_filters_by_kind_and_control_number() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let _ = post_json!(app, "/student/book_counseling", counseling_booking());
    let _ = post_json!(
        app,
        "/student/book_advisory",
        json!({
            "user": STUDENT,
            "student": "Luis",
            "control_number": "2021100",
            "program": "Industrial Engineering",
            "teacher": "Ing. Raúl Medina",
            "date": "2024-06-12",
            "slot": "14:00 - 15:00",
            "reason": "final project review",
        })
    );

    let resp = post_json!(
        app,
        "/student/search_appoint",
        json!({ "user": STUDENT, "kind": "advisory" })
    );
    let items = resp["appointments"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], json!("advisory"));
    assert_eq!(items[0]["teacher"], json!("Ing. Raúl Medina"));

    let resp = post_json!(
        app,
        "/student/search_appoint",
        json!({ "user": STUDENT, "control_number": "2021099" })
    );
    let items = resp["appointments"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["student"], json!("Ana"));
}

#[actix_rt::test]
async fn counselor_dashboard_only_sees_counseling_visits() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let _ = post_json!(app, "/student/book_counseling", counseling_booking());
    let _ = post_json!(
        app,
        "/teacher/book_appoint",
        json!({
            "user": TEACHER,
            "student": "Luis",
            "control_number": "2021100",
            "program": "Industrial Engineering",
            "teacher": "Ing. Paola Rivas",
            "date": "2024-06-12",
            "slot": "15:00 - 16:00",
            "reason": "network lab make-up",
        })
    );

    let resp = post_json!(app, "/counselor/search_appoint", json!({ "user": COUNSELOR }));
    let items = resp["appointments"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["student"], json!("Ana"));
}

#[actix_rt::test]
async fn assigned_roles_take_effect_immediately() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let newcomer = "benito@estudiantes.edu";
    let mut body = counseling_booking();
    body["user"] = json!(newcomer);
    let resp = post_json!(app, "/student/book_counseling", body.clone());
    assert_eq!(resp["err"], json!("No such user"));

    let resp = post_json!(
        app,
        "/admin/assign_role",
        json!({ "user": ADMIN, "target": newcomer, "role": "student" })
    );
    assert_eq!(resp["success"], json!(true));

    let resp = post_json!(app, "/student/book_counseling", body);
    assert_eq!(resp["success"], json!(true));

    let resp = post_json!(
        app,
        "/admin/search_directory",
        json!({ "user": ADMIN, "role": "student" })
    );
    let users = resp["users"].as_array().unwrap();
    assert!(users
        .iter()
        .any(|u| u["user"] == json!(newcomer) && u["role"] == json!("student")));
}

#[actix_rt::test]
async fn teacher_profile_card_reads_the_roster() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let resp = post_json!(
        app,
        "/teacher/view_teacher",
        json!({ "user": TEACHER, "name": "Dra. Alicia Serrano" })
    );
    assert_eq!(resp["success"], json!(true));
    assert_eq!(resp["specialty"], json!("Databases"));
    assert_eq!(resp["email"], json!("a.serrano@universidad.edu"));

    let resp = post_json!(
        app,
        "/teacher/view_teacher",
        json!({ "user": TEACHER, "name": "Dr. Nobody" })
    );
    assert_eq!(resp["success"], json!(false));
    assert_eq!(resp["err"], json!("No such teacher"));
}

#[actix_rt::test]
async fn student_roster_search_matches_by_specialty() {
    let state = seeded_state();
    let mut app = test_app!(state);

    let resp = post_json!(
        app,
        "/student/search_teacher",
        json!({ "user": STUDENT, "specialty": "networks" })
    );
    assert_eq!(resp["success"], json!(true));
    let teachers = resp["teachers"].as_array().unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0]["name"], json!("Ing. Paola Rivas"));
}
