use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "dynamic_form_tui", version, about = "Dynamic Form TUI")]
pub struct CliArgs {
    /// Print the form templates and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the form templates as JSON (implies --headless)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override log file path
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// How long confirmation popups stay up, in milliseconds
    #[arg(long = "notice-ms", value_name = "MS")]
    pub notice_ms: Option<u64>,

    /// Form type to select on start-up
    #[arg(long = "form-type", value_name = "NAME")]
    pub form_type: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.log_file {
            std::env::set_var("FORM_LOG_FILE", path);
        }
        if let Some(ms) = self.notice_ms {
            std::env::set_var("FORM_NOTICE_MS", ms.to_string());
        }
        if let Some(name) = &self.form_type {
            std::env::set_var("FORM_INITIAL_TYPE", name);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub const fn is_headless(&self) -> bool {
        self.headless || self.json
    }
}
