use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable overriding the `database` entry of the config file.
pub const DB_ENV_VAR: &str = "SHIFTBOARD_DB";

/// Every key a complete configuration file carries.
pub const CONFIG_KEYS: [&str; 5] = [
    "database",
    "event_utc_offset",
    "refresh_interval_secs",
    "log_level",
    "progress_width",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// UTC offset of the event venue, e.g. "+02:00". Shift timestamps are
    /// stored in this local time.
    #[serde(default = "default_event_utc_offset")]
    pub event_utc_offset: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_progress_width")]
    pub progress_width: usize,
}

fn default_event_utc_offset() -> String {
    "+00:00".to_string()
}
fn default_refresh_interval() -> u64 {
    5
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_progress_width() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            event_utc_offset: default_event_utc_offset(),
            refresh_interval_secs: default_refresh_interval(),
            log_level: default_log_level(),
            progress_width: default_progress_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftboard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftboard.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftboard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// `SHIFTBOARD_DB` takes precedence over the file's `database` entry.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)?
        } else {
            Config::default()
        };

        if let Ok(db) = env::var(DB_ENV_VAR)
            && !db.trim().is_empty()
        {
            cfg.database = db;
        }

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Keys from [`CONFIG_KEYS`] that the given YAML document does not set.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    /// Initialize the configuration file and return the database path to use.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path.to_string_lossy().to_string())
    }
}
