use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = open_store(cfg)?;
        ExportLogic::export_json(store.list(), file, *force)?;

        audit(
            &store,
            "export",
            file,
            &format!("Exported {} classes", store.list().class_count()),
        );
        success(format!("Schedule exported to {}", file));
    }

    Ok(())
}
