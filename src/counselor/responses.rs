use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchAppointItem {
    pub id: u64,
    pub student: String,
    pub control_number: String,
    pub program: String,
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

crate::impl_err_response! {
    SearchAppointResponse,
}
