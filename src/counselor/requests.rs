use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub user: String,
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
