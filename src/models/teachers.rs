#[derive(Debug, Clone)]
pub struct TeacherData {
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
}

// Advisory staff available from day one; admins can extend the roster.
pub fn default_roster() -> Vec<TeacherData> {
    vec![
        TeacherData {
            name: "Ing. Raúl Medina".to_string(),
            specialty: "Web Development".to_string(),
            email: "r.medina@universidad.edu".to_string(),
            phone: "55 2301 4416".to_string(),
        },
        TeacherData {
            name: "Dra. Alicia Serrano".to_string(),
            specialty: "Databases".to_string(),
            email: "a.serrano@universidad.edu".to_string(),
            phone: "55 8754 0923".to_string(),
        },
        TeacherData {
            name: "Mtro. Jorge Castillo".to_string(),
            specialty: "Programming".to_string(),
            email: "j.castillo@universidad.edu".to_string(),
            phone: "55 6612 3378".to_string(),
        },
        TeacherData {
            name: "Ing. Paola Rivas".to_string(),
            specialty: "Networks".to_string(),
            email: "p.rivas@universidad.edu".to_string(),
            phone: "55 4490 7751".to_string(),
        },
    ]
}
