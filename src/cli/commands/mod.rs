//! One handler per subcommand, plus the plumbing they share.

pub mod add;
pub mod backup;
pub mod colors;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod theme;

use crate::config::Config;
use crate::core::store::ScheduleStore;
use crate::core::theme::ThemeLogic;
use crate::db::initialize::init_db;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ClassSession, DayId, Theme, palette};
use crate::ui::messages::warning;

pub(crate) type Store = ScheduleStore<SqliteKv>;

/// Open the database (running pending migrations) as a key-value medium.
pub(crate) fn open_kv(cfg: &Config) -> AppResult<SqliteKv> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(SqliteKv::new(pool))
}

pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    ScheduleStore::open(open_kv(cfg)?, &cfg.schedule_key)
}

pub(crate) fn current_theme(store: &Store, cfg: &Config) -> AppResult<Theme> {
    ThemeLogic::load(store.medium(), &cfg.theme_key, cfg.default_theme)
}

pub(crate) fn parse_day(input: &str) -> AppResult<DayId> {
    DayId::from_input(input).ok_or_else(|| AppError::InvalidDay(input.to_string()))
}

/// Find a class by full id, or by a prefix matching exactly one class.
pub(crate) fn resolve_session(store: &Store, id: &str) -> AppResult<(DayId, ClassSession)> {
    if let Some((day, s)) = store.find(id) {
        return Ok((day, s.clone()));
    }

    let mut matches = store
        .list()
        .days()
        .iter()
        .flat_map(|d| d.classes.iter().map(move |c| (d.day_id, c)))
        .filter(|(_, c)| !id.is_empty() && c.id.starts_with(id));

    match (matches.next(), matches.next()) {
        (Some((day, s)), None) => Ok((day, s.clone())),
        (Some(_), Some(_)) => Err(AppError::AmbiguousId(id.to_string())),
        (None, _) => Err(AppError::SessionNotFound(id.to_string())),
    }
}

/// Palette label or value; anything else is kept verbatim with a warning.
pub(crate) fn resolve_color(input: &str) -> String {
    match palette::resolve(input) {
        Some(c) => c.value.to_string(),
        None => {
            warning(format!(
                "'{}' is not a palette color (see `colors`), storing it as given",
                input
            ));
            input.to_string()
        }
    }
}

/// Internal audit line; a failure here never fails the command.
pub(crate) fn audit(store: &Store, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.medium().pool().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
