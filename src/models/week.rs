//! The whole week: six day columns, Monday first.

use crate::models::class_session::ClassSession;
use crate::models::day::DayId;
use crate::models::day_schedule::DaySchedule;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

/// Why a persisted document cannot be used as a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    DayCount(usize),
    DuplicateDay(DayId),
    DuplicateSession { day: DayId, id: String },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::DayCount(n) => write!(f, "expected 6 days, found {}", n),
            StructureError::DuplicateDay(d) => write!(f, "day '{}' appears more than once", d),
            StructureError::DuplicateSession { day, id } => {
                write!(f, "class id '{}' appears twice on {}", id, day)
            }
        }
    }
}

impl WeekSchedule {
    /// A week with six empty columns.
    pub fn empty() -> Self {
        Self {
            days: DayId::ALL.into_iter().map(DaySchedule::empty).collect(),
        }
    }

    /// Built-in schedule used when nothing valid is stored yet.
    pub fn default_seed() -> Self {
        let mut week = Self::empty();

        week.day_mut(DayId::Monday).classes = vec![
            seed_class(
                "1",
                "Matematika",
                "08:00",
                "08:45",
                "Azizova N.",
                "101",
                "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
            ),
            seed_class(
                "2",
                "Ona tili",
                "08:55",
                "09:40",
                "Karimov B.",
                "203",
                "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
            ),
        ];
        week.day_mut(DayId::Tuesday).classes = vec![seed_class(
            "3",
            "Ingliz tili",
            "08:00",
            "08:45",
            "Smith J.",
            "305",
            "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200",
        )];

        week
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn day(&self, day: DayId) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: DayId) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    pub fn day_by_key(&self, key: &str) -> Option<&DaySchedule> {
        DayId::from_key(key).map(|d| self.day(d))
    }

    /// Locate a class anywhere in the week.
    pub fn find(&self, session_id: &str) -> Option<(DayId, &ClassSession)> {
        self.days
            .iter()
            .find_map(|d| d.get(session_id).map(|s| (d.day_id, s)))
    }

    pub fn class_count(&self) -> usize {
        self.days.iter().map(|d| d.classes.len()).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a stored document and check its shape.
    ///
    /// Valid documents are normalized: days are put back in Monday→Saturday
    /// order with their canonical names and each day's classes are re-sorted.
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        let days: Vec<DaySchedule> = serde_json::from_str(raw).map_err(LoadError::Parse)?;
        Self::from_days(days).map_err(LoadError::Structure)
    }

    pub fn from_days(days: Vec<DaySchedule>) -> Result<Self, StructureError> {
        if days.len() != DayId::ALL.len() {
            return Err(StructureError::DayCount(days.len()));
        }

        let mut slots: Vec<Option<DaySchedule>> = vec![None; DayId::ALL.len()];
        for mut day in days {
            let mut seen = HashSet::new();
            for class in &day.classes {
                if !seen.insert(class.id.as_str()) {
                    return Err(StructureError::DuplicateSession {
                        day: day.day_id,
                        id: class.id.clone(),
                    });
                }
            }

            let slot = &mut slots[day.day_id.index()];
            if slot.is_some() {
                return Err(StructureError::DuplicateDay(day.day_id));
            }
            day.day_name = day.day_id.display_name().to_string();
            day.sort_classes();
            *slot = Some(day);
        }

        // six entries, no duplicates: every slot is filled
        Ok(Self {
            days: slots.into_iter().flatten().collect(),
        })
    }
}

/// Deserializing goes through the same checks as `from_days`.
impl<'de> Deserialize<'de> for WeekSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<DaySchedule>::deserialize(deserializer)?;
        Self::from_days(days).map_err(serde::de::Error::custom)
    }
}

/// Failure to turn a stored blob back into a week.
#[derive(Debug)]
pub enum LoadError {
    Parse(serde_json::Error),
    Structure(StructureError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Parse(e) => write!(f, "unreadable document: {}", e),
            LoadError::Structure(e) => write!(f, "invalid week: {}", e),
        }
    }
}

fn seed_class(
    id: &str,
    subject: &str,
    start: &str,
    end: &str,
    teacher: &str,
    room: &str,
    color: &str,
) -> ClassSession {
    ClassSession {
        id: id.to_string(),
        subject: subject.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        teacher: Some(teacher.to_string()),
        room: Some(room.to_string()),
        color: color.to_string(),
    }
}
