use serde::{Deserialize, Serialize};
use std::fmt;

/// The six school days of the week. The set is closed: a week always holds
/// exactly one column per variant, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayId {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayId {
    pub const ALL: [DayId; 6] = [
        DayId::Monday,
        DayId::Tuesday,
        DayId::Wednesday,
        DayId::Thursday,
        DayId::Friday,
        DayId::Saturday,
    ];

    /// Stable key used in the persisted document.
    pub fn key(&self) -> &'static str {
        match self {
            DayId::Monday => "monday",
            DayId::Tuesday => "tuesday",
            DayId::Wednesday => "wednesday",
            DayId::Thursday => "thursday",
            DayId::Friday => "friday",
            DayId::Saturday => "saturday",
        }
    }

    /// Display name shown in the day column header.
    pub fn display_name(&self) -> &'static str {
        match self {
            DayId::Monday => "Dushanba",
            DayId::Tuesday => "Seshanba",
            DayId::Wednesday => "Chorshanba",
            DayId::Thursday => "Payshanba",
            DayId::Friday => "Juma",
            DayId::Saturday => "Shanba",
        }
    }

    /// Convert a stored key → enum
    pub fn from_key(s: &str) -> Option<Self> {
        DayId::ALL.into_iter().find(|d| d.key() == s)
    }

    /// Helper: accept the key or the display name from the command line,
    /// in any case.
    pub fn from_input(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        DayId::ALL
            .into_iter()
            .find(|d| d.key() == wanted || d.display_name().to_lowercase() == wanted)
    }

    /// Position of the day inside the week (Monday = 0).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
