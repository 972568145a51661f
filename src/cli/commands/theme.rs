use crate::cli::commands::open_kv;
use crate::cli::parser::{Commands, ThemeArg};
use crate::config::Config;
use crate::core::theme::ThemeLogic;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::Theme;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { mode } = cmd {
        let mut kv = open_kv(cfg)?;

        let next = match mode {
            None => {
                let current = ThemeLogic::load(&kv, &cfg.theme_key, cfg.default_theme)?;
                info(format!("Current theme: {}", current));
                return Ok(());
            }
            Some(ThemeArg::Toggle) => ThemeLogic::toggle(&mut kv, &cfg.theme_key, cfg.default_theme)?,
            Some(ThemeArg::Light) => {
                ThemeLogic::save(&mut kv, &cfg.theme_key, Theme::Light)?;
                Theme::Light
            }
            Some(ThemeArg::Dark) => {
                ThemeLogic::save(&mut kv, &cfg.theme_key, Theme::Dark)?;
                Theme::Dark
            }
        };

        if let Err(e) = ttlog(
            &kv.pool().conn,
            "theme",
            &cfg.theme_key,
            &format!("Theme set to {}", next),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
        success(format!("Theme set to {}", next));
    }

    Ok(())
}
