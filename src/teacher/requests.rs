use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub user: String,
    pub teacher: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ConfirmAppointRequest {
    pub user: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct CancelAppointRequest {
    pub user: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct CompleteAppointRequest {
    pub user: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct BookAppointRequest {
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
pub struct ViewTeacherRequest {
    pub user: String,
    pub name: String,
}
