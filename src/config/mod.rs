use crate::core::controller::FormDefaults;
use crate::core::validate::is_valid_time;
use crate::errors::{AppError, AppResult};
use crate::models::{Theme, palette};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_schedule_key")]
    pub schedule_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
    #[serde(default)]
    pub default_theme: Theme,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
}

fn default_schedule_key() -> String {
    "schoolSchedule".to_string()
}
fn default_theme_key() -> String {
    "theme".to_string()
}
fn default_start() -> String {
    "08:00".to_string()
}
fn default_end() -> String {
    "08:45".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            schedule_key: default_schedule_key(),
            theme_key: default_theme_key(),
            default_theme: Theme::default(),
            default_start: default_start(),
            default_end: default_end(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rschedule")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rschedule")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rschedule.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rschedule.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.check()?;
        Ok(cfg)
    }

    fn check(&self) -> AppResult<()> {
        for (name, value) in [
            ("default_start", &self.default_start),
            ("default_end", &self.default_end),
        ] {
            if !is_valid_time(value) {
                return Err(AppError::Config(format!(
                    "{} must be a HH:MM time, found '{}'",
                    name, value
                )));
            }
        }
        if self.schedule_key == self.theme_key {
            return Err(AppError::Config(
                "schedule_key and theme_key must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Values prefilled in the form when a class is created.
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            start_time: self.default_start.clone(),
            end_time: self.default_end.clone(),
            color: palette::default_color().to_string(),
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config::with_database(db_path.clone());

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}
