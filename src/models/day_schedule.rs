use crate::models::class_session::ClassSession;
use crate::models::day::DayId;
use serde::{Deserialize, Serialize};

/// One weekday column and its classes, sorted by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day_id: DayId,
    pub day_name: String,
    pub classes: Vec<ClassSession>,
}

impl DaySchedule {
    pub fn empty(day_id: DayId) -> Self {
        Self {
            day_id,
            day_name: day_id.display_name().to_string(),
            classes: Vec::new(),
        }
    }

    pub fn position_of(&self, session_id: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.id == session_id)
    }

    pub fn get(&self, session_id: &str) -> Option<&ClassSession> {
        self.classes.iter().find(|c| c.id == session_id)
    }

    /// Stable sort, so classes starting at the same time keep their order.
    pub fn sort_classes(&mut self) {
        self.classes.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }

    pub fn is_sorted(&self) -> bool {
        self.classes
            .windows(2)
            .all(|w| w[0].start_time <= w[1].start_time)
    }
}
