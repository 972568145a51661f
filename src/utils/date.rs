use crate::models::DayId;
use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// School day for a calendar date; Sunday has none.
pub fn day_id_of(date: NaiveDate) -> Option<DayId> {
    match date.weekday() {
        Weekday::Mon => Some(DayId::Monday),
        Weekday::Tue => Some(DayId::Tuesday),
        Weekday::Wed => Some(DayId::Wednesday),
        Weekday::Thu => Some(DayId::Thursday),
        Weekday::Fri => Some(DayId::Friday),
        Weekday::Sat => Some(DayId::Saturday),
        Weekday::Sun => None,
    }
}

pub fn today_day_id() -> Option<DayId> {
    day_id_of(today())
}
