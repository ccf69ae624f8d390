use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchAppointItem {
    pub id: u64,
    pub student: String,
    pub control_number: String,
    pub program: String,
    pub teacher: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<SearchAppointItem>,
}

#[derive(Default, Serialize)]
pub struct ViewTeacherResponse {
    pub success: bool,
    pub err: String,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
}

crate::impl_err_response! {
    SearchAppointResponse,
    ViewTeacherResponse,
}
