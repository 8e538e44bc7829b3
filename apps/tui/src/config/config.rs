use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "dynamic_form.log";
pub const DEFAULT_NOTICE_MS: u64 = 1500;

/// Runtime settings, read from `.env` and the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_file: PathBuf,
    pub notice_duration: Duration,
    pub initial_type: Option<String>,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_MS),
            initial_type: None,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Loads the `.env` file (if any) and reads the configuration from the
    /// environment
    pub fn load() -> color_eyre::eyre::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> color_eyre::eyre::Result<Self> {
        let defaults = Self::default();

        let log_file = lookup("FORM_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map_or(defaults.log_file, PathBuf::from);

        let notice_duration = match lookup("FORM_NOTICE_MS") {
            Some(raw) => {
                let millis = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| eyre!("Invalid FORM_NOTICE_MS value {raw:?}: {e}"))?;
                Duration::from_millis(millis)
            }
            None => defaults.notice_duration,
        };

        let initial_type = lookup("FORM_INITIAL_TYPE")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let debug = lookup("DEBUG").is_some_and(|value| !matches!(value.as_str(), "" | "0"));

        Ok(Self {
            log_file,
            notice_duration,
            initial_type,
            debug,
        })
    }
}
