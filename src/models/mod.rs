pub mod appointments;
pub mod directory;
pub mod slots;
pub mod teachers;
