use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchTeacherItem {
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
}

#[derive(Default, Serialize)]
pub struct SearchTeacherResponse {
    pub success: bool,
    pub err: String,
    pub teachers: Vec<SearchTeacherItem>,
}

#[derive(Default, Serialize)]
pub struct SearchAppointItem {
    pub id: u64,
    pub kind: String,
    pub student: String,
    pub control_number: String,
    pub program: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
    pub teacher: String,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<SearchAppointItem>,
}

crate::impl_err_response! {
    SearchTeacherResponse,
    SearchAppointResponse,
}
