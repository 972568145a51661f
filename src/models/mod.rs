pub mod class_session;
pub mod day;
pub mod day_schedule;
pub mod palette;
pub mod theme;
pub mod week;

pub use class_session::{ClassSession, new_session_id};
pub use day::DayId;
pub use day_schedule::DaySchedule;
pub use theme::Theme;
pub use week::WeekSchedule;
