/// ANSI color helper utilities for terminal output.
use crate::models::Theme;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";

/// Terminal color for a class color tag.
///
/// Tags are CSS utility strings ("bg-blue-100 text-blue-800 ..."), so the
/// hue name is enough. Dark theme uses the bright variants.
pub fn ansi_for_class_color(tag: &str, theme: Theme) -> &'static str {
    let hue = ["blue", "emerald", "green", "red", "amber", "orange", "violet", "purple", "pink", "slate"]
        .into_iter()
        .find(|h| tag.contains(&format!("-{}-", h)));

    match (hue, theme) {
        (Some("blue"), Theme::Light) => BLUE,
        (Some("blue"), Theme::Dark) => BRIGHT_BLUE,
        (Some("emerald" | "green"), Theme::Light) => GREEN,
        (Some("emerald" | "green"), Theme::Dark) => BRIGHT_GREEN,
        (Some("red"), Theme::Light) => RED,
        (Some("red"), Theme::Dark) => BRIGHT_RED,
        (Some("amber" | "orange"), Theme::Light) => YELLOW,
        (Some("amber" | "orange"), Theme::Dark) => BRIGHT_YELLOW,
        (Some("violet" | "purple"), Theme::Light) => MAGENTA,
        (Some("violet" | "purple"), Theme::Dark) => BRIGHT_MAGENTA,
        (Some("pink"), Theme::Light) => CYAN,
        (Some("pink"), Theme::Dark) => BRIGHT_CYAN,
        (Some("slate"), _) => GREY,
        _ => RESET,
    }
}

/// Grey out placeholder values ("-", blanks); anything else is returned as is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
