use crate::errors::{AppError, AppResult};
use crate::models::WeekSchedule;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the week as the same JSON document the store persists,
    /// pretty-printed.
    pub fn export_json(week: &WeekSchedule, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, week.to_json_pretty()?)?;
        Ok(())
    }
}
