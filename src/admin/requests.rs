use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub user: String,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct AddTeacherRequest {
    pub user: String,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
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
pub struct AssignRoleRequest {
    pub user: String,
    pub target: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct SearchDirectoryRequest {
    pub user: String,
    pub role: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}
