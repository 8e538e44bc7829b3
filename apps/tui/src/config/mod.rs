#[allow(clippy::module_inception)]
mod config;

pub use config::{AppConfig, DEFAULT_LOG_FILE, DEFAULT_NOTICE_MS};
