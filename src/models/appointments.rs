use chrono::NaiveDate;

use crate::models::slots::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Cancelled => "cancelled",
            Status::Completed => "completed",
        }
    }

    pub fn from_label(label: &str) -> Option<Status> {
        match label {
            "pending" => Some(Status::Pending),
            "confirmed" => Some(Status::Confirmed),
            "cancelled" => Some(Status::Cancelled),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }
}

// Only the advisory variant carries an assigned staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Counseling,
    Advisory { teacher: String },
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Counseling => "counseling",
            Kind::Advisory { .. } => "advisory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: u64,
    pub student: String,
    pub control_number: String,
    pub program: String,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub reason: String,
    pub status: Status,
    pub kind: Kind,
}

impl Appointment {
    pub fn teacher(&self) -> Option<&str> {
        match &self.kind {
            Kind::Advisory { teacher } => Some(teacher),
            Kind::Counseling => None,
        }
    }
}

pub struct NewAppointment {
    pub student: String,
    pub control_number: String,
    pub program: String,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in [
            Status::Pending,
            Status::Confirmed,
            Status::Cancelled,
            Status::Completed,
        ]
        .iter()
        {
            assert_eq!(Status::from_label(status.as_str()), Some(*status));
        }
        assert_eq!(Status::from_label("done"), None);
    }

    #[test]
    fn advisory_exposes_its_teacher() {
        let advisory = Kind::Advisory {
            teacher: "Dra. Alicia Serrano".to_string(),
        };
        assert_eq!(advisory.as_str(), "advisory");
        assert_eq!(Kind::Counseling.as_str(), "counseling");
    }
}
