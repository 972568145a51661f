use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::ScheduleStore;
use crate::db::initialize::init_db;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Create (if missing):
///  - the configuration directory and file
///  - the SQLite database with all pending migrations
///  - the stored week, seeded when nothing usable is there yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rschedule…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    // Writes the seed on a fresh database; an existing valid week is kept.
    let store = ScheduleStore::open(SqliteKv::new(pool), &cfg.schedule_key)?;
    let classes = store.list().class_count();
    store.close()?;

    success(format!(
        "Database initialized at {} ({} classes)",
        &cfg.database, classes
    ));
    Ok(())
}
