//! Time utilities: parsing HH:MM, duration computations, formatting minutes.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Length of a class in minutes; `None` when a time is unreadable or the
/// class ends before it starts.
pub fn class_minutes(start: &str, end: &str) -> Option<i64> {
    let m = minutes_between(parse_time(start)?, parse_time(end)?);
    (m >= 0).then_some(m)
}

pub fn format_minutes(mins: i64) -> String {
    if mins < 60 {
        format!("{} min", mins)
    } else {
        format!("{}h {:02}m", mins / 60, mins % 60)
    }
}
