use color_eyre::eyre::eyre;
use color_eyre::Result;
use dynamic_form_tui::config::AppConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file; stdout belongs to the
/// terminal UI. `RUST_LOG` overrides the default filter.
pub fn init(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| eyre!("Failed to open log file {}: {e}", config.log_file.display()))?;

    let default_directive = if config.debug {
        "dynamic_form_tui=debug"
    } else {
        "dynamic_form_tui=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("Failed to initialise logging: {e}"))
}
