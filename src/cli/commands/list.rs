use crate::cli::commands::{current_theme, open_store, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::TerminalRenderer;
use crate::utils::date::today_day_id;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day } = cmd {
        let focus = day.as_deref().map(parse_day).transpose()?;
        let store = open_store(cfg)?;

        let renderer = TerminalRenderer::new(current_theme(&store, cfg)?)
            .focus(focus)
            .highlight_today(today_day_id());
        println!("{}", renderer.render_week(store.list()));

        if focus.is_none() {
            println!("Total classes: {}", store.list().class_count());
        }
    }

    Ok(())
}
