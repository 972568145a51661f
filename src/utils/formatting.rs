//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Optional label, or a grey dash when absent.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => crate::utils::colors::colorize_optional("-"),
    }
}
