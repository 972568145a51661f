//! Checks applied to the class form before anything reaches the store.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Zero-padded 24h clock. Padding matters: classes are sorted as strings.
static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid HH:MM pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Subject,
    StartTime,
    EndTime,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Subject => "subject",
            Field::StartTime => "start time",
            Field::EndTime => "end time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing(Field),
    MalformedTime { field: Field, value: String },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing(f) => *f,
            FieldError::MalformedTime { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing(field) => write!(f, "{} is required", field.label()),
            FieldError::MalformedTime { field, value } => {
                write!(f, "{} '{}' is not a valid HH:MM time", field.label(), value)
            }
        }
    }
}

pub fn is_valid_time(s: &str) -> bool {
    HH_MM.is_match(s)
}

pub fn check_subject(subject: &str) -> Option<FieldError> {
    subject
        .trim()
        .is_empty()
        .then_some(FieldError::Missing(Field::Subject))
}

pub fn check_time(field: Field, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Some(FieldError::Missing(field))
    } else if !is_valid_time(value) {
        Some(FieldError::MalformedTime {
            field,
            value: value.to_string(),
        })
    } else {
        None
    }
}
