//! Terminal rendering of the week and of the editor state.

use crate::core::controller::{EditorState, Render};
use crate::models::{ClassSession, DayId, DaySchedule, Theme, WeekSchedule, palette};
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, ansi_for_class_color, colorize_optional};
use crate::utils::formatting::{bold, italic, or_dash};
use crate::utils::table::{Column, Table};
use crate::utils::time::{class_minutes, format_minutes};

/// Ids longer than this are shortened in listings; any unique prefix is
/// accepted back on the command line.
pub const SHORT_ID_LEN: usize = 8;

pub struct TerminalRenderer {
    theme: Theme,
    /// Day printed after a change; `None` prints the whole week.
    focus: Option<DayId>,
    today: Option<DayId>,
}

impl TerminalRenderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            focus: None,
            today: None,
        }
    }

    pub fn focus(mut self, day: Option<DayId>) -> Self {
        self.focus = day;
        self
    }

    pub fn highlight_today(mut self, today: Option<DayId>) -> Self {
        self.today = today;
        self
    }

    pub fn render_week(&self, week: &WeekSchedule) -> String {
        week.days()
            .iter()
            .filter(|d| self.focus.is_none_or(|f| f == d.day_id))
            .map(|d| self.render_day(d))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_day(&self, day: &DaySchedule) -> String {
        let mut out = format!("=== {} ({}) ===", bold(&day.day_name), day.day_id);
        if self.today == Some(day.day_id) {
            out.push_str(&italic(" today"));
        }
        out.push('\n');

        if day.classes.is_empty() {
            out.push_str(&format!("{GREY}No classes{RESET}\n"));
            return out;
        }

        let mut table = Table::new(vec![
            Column::new("ID", SHORT_ID_LEN),
            Column::new("Time", 11),
            Column::new("Length", 7),
            Column::new("Subject", 18),
            Column::new("Teacher", 14),
            Column::new("Room", 6),
            Column::new("Color", 10),
        ]);
        for class in &day.classes {
            table.add_row(self.class_row(class));
        }
        out.push_str(&table.render());
        out
    }

    fn class_row(&self, class: &ClassSession) -> Vec<String> {
        let color = ansi_for_class_color(&class.color, self.theme);
        let length = class_minutes(&class.start_time, &class.end_time)
            .map(format_minutes)
            .unwrap_or_else(|| colorize_optional("-"));
        let color_label = palette::by_value(&class.color)
            .map(|c| c.label.to_string())
            .unwrap_or_else(|| format!("{GREY}custom{RESET}"));

        vec![
            short_id(&class.id).to_string(),
            format!("{}-{}", class.start_time, class.end_time),
            length,
            format!("{}{}{}", color, class.subject, RESET),
            or_dash(class.teacher()),
            or_dash(class.room()),
            color_label,
        ]
    }
}

impl Render for TerminalRenderer {
    fn week_changed(&mut self, week: &WeekSchedule) {
        println!("{}", self.render_week(week));
    }

    fn editor_changed(&mut self, state: &EditorState) {
        match state {
            EditorState::Closed => {}
            EditorState::Editing {
                day,
                existing: None,
            } => info(format!("New class on {}", day.display_name())),
            EditorState::Editing {
                day,
                existing: Some(s),
            } => info(format!(
                "Editing '{}' ({}) on {}",
                s.subject,
                short_id(&s.id),
                day.display_name()
            )),
        }
    }
}

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
