pub const SLOT_LABELS: [&str; 8] = [
    "09:00 - 10:00",
    "10:00 - 11:00",
    "11:00 - 12:00",
    "12:00 - 13:00",
    "13:00 - 14:00",
    "14:00 - 15:00",
    "15:00 - 16:00",
    "16:00 - 17:00",
];

// One of the hour ranges above; only constructible through `from_label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot(&'static str);

impl TimeSlot {
    pub fn from_label(label: &str) -> Option<TimeSlot> {
        SLOT_LABELS.iter().copied().find(|s| *s == label).map(TimeSlot)
    }

    pub fn label(&self) -> &'static str {
        self.0
    }
}
