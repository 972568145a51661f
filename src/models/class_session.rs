use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One scheduled class inside a day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: String,
    pub subject: String,
    /// Zero-padded `HH:MM`, compared as a plain string when sorting.
    pub start_time: String,
    pub end_time: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub teacher: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub room: Option<String>,
    pub color: String,
}

impl ClassSession {
    pub fn teacher(&self) -> Option<&str> {
        self.teacher.as_deref()
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }
}

/// Generate an identifier for a new class.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Older documents store missing labels as "".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = new_session_id();
        let b = new_session_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn empty_labels_read_as_absent() {
        let json = r#"{"id":"9","subject":"Fizika","startTime":"10:00","endTime":"10:45","teacher":"","room":"12","color":"c"}"#;
        let s: ClassSession = serde_json::from_str(json).unwrap();
        assert_eq!(s.teacher, None);
        assert_eq!(s.room(), Some("12"));

        let out = serde_json::to_string(&s).unwrap();
        assert!(out.contains("\"startTime\":\"10:00\""));
        assert!(!out.contains("teacher"));
    }
}
