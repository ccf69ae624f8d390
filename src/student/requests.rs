use serde::Deserialize;

#[derive(Deserialize)]
pub struct BookCounselingRequest {
    pub user: String,
    pub student: String,
    pub control_number: String,
    pub program: String,
    pub date: String,
    pub slot: String,
    pub reason: String,
}

#[derive(Deserialize)]
pub struct BookAdvisoryRequest {
    pub user: String,
    pub student: String,
    pub control_number: String,
    pub program: String,
    pub teacher: String,
    pub date: String,
    pub slot: String,
    pub reason: String,
}

#[derive(Deserialize)]
pub struct SearchTeacherRequest {
    pub user: String,
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub user: String,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub control_number: Option<String>,
    pub date: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct CancelAppointRequest {
    pub user: String,
    pub id: u64,
}
