use crate::cli::commands::{audit, current_theme, open_store, resolve_color, resolve_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::EditorController;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::render::{TerminalRenderer, short_id};
use crate::utils::date::today_day_id;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        subject,
        start,
        end,
        teacher,
        room,
        color,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let (day, session) = resolve_session(&store, id)?;

        let renderer = TerminalRenderer::new(current_theme(&store, cfg)?)
            .focus(Some(day))
            .highlight_today(today_day_id());
        let mut editor = EditorController::with_defaults(renderer, cfg.form_defaults());

        editor.open_for_edit(day, session);
        let original = editor.form().ok_or(AppError::NotEditing)?;
        let mut form = original.clone();

        if let Some(s) = subject {
            form.subject = s.clone();
        }
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

        if form == original {
            editor.cancel();
            info("Nothing to change.");
            return Ok(());
        }

        let subject = form.subject.trim().to_string();
        let saved = match editor.submit(&mut store, form) {
            Ok(saved) => saved,
            Err(e) => {
                editor.cancel();
                return Err(e);
            }
        };

        audit(
            &store,
            "edit",
            saved.day.key(),
            &format!("Updated '{}' ({})", subject, saved.id),
        );
        success(format!(
            "Class {} updated on {}",
            short_id(&saved.id),
            saved.day.display_name()
        ));

        store.close()?;
    }

    Ok(())
}
