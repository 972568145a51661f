use crate::cli::commands::{audit, current_theme, open_store, parse_day, resolve_color};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::EditorController;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::ui::render::{TerminalRenderer, short_id};
use crate::utils::date::today_day_id;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        day,
        subject,
        start,
        end,
        teacher,
        room,
        color,
    } = cmd
    {
        let day = parse_day(day)?;
        let mut store = open_store(cfg)?;

        let renderer = TerminalRenderer::new(current_theme(&store, cfg)?)
            .focus(Some(day))
            .highlight_today(today_day_id());
        let mut editor = EditorController::with_defaults(renderer, cfg.form_defaults());

        editor.open_for_create(day);
        let mut form = editor.form().ok_or(AppError::NotEditing)?;
        form.subject = subject.clone();
        if let Some(s) = start {
            form.start_time = s.clone();
        }
        if let Some(e) = end {
            form.end_time = e.clone();
        }
        if let Some(t) = teacher {
            form.teacher = t.clone();
        }
        if let Some(r) = room {
            form.room = r.clone();
        }
        if let Some(c) = color {
            form.color = resolve_color(c);
        }

        let saved = match editor.submit(&mut store, form) {
            Ok(saved) => saved,
            Err(e) => {
                editor.cancel();
                return Err(e);
            }
        };

        audit(
            &store,
            "add",
            saved.day.key(),
            &format!("Added '{}' ({})", subject.trim(), saved.id),
        );
        success(format!(
            "Class '{}' added to {} (id {})",
            subject.trim(),
            saved.day.display_name(),
            short_id(&saved.id)
        ));

        store.close()?;
    }

    Ok(())
}
