use crate::cli::commands::{audit, current_theme, open_store, resolve_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::{Confirm, DeleteOutcome, EditorController};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::{AssumeYes, StdinConfirm};
use crate::ui::render::{TerminalRenderer, short_id};
use crate::utils::date::today_day_id;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;
        let (day, session) = resolve_session(&store, id)?;
        let subject = session.subject.clone();

        let renderer = TerminalRenderer::new(current_theme(&store, cfg)?)
            .focus(Some(day))
            .highlight_today(today_day_id());
        let mut editor = EditorController::with_defaults(renderer, cfg.form_defaults());
        editor.open_for_edit(day, session);

        let mut confirm: Box<dyn Confirm> = if *yes {
            Box::new(AssumeYes)
        } else {
            Box::new(StdinConfirm)
        };

        match editor.request_delete(&mut store, confirm.as_mut())? {
            DeleteOutcome::Declined => {
                editor.cancel();
                info("Operation cancelled.");
                return Ok(());
            }
            DeleteOutcome::Deleted { id, day } => {
                audit(&store, "del", day.key(), &format!("Deleted '{}' ({})", subject, id));
                success(format!(
                    "Class {} removed from {}",
                    short_id(&id),
                    day.display_name()
                ));
            }
        }

        store.close()?;
    }

    Ok(())
}
