mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use dynamic_form_tui::config::AppConfig;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = AppConfig::load()?;
    logging::init(&config)?;
    tracing::info!(?config, "starting dynamic form");

    let mut app = App::new(&config);

    // Headless when asked to, or when stdout is not a terminal
    if args.is_headless() || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app);

    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
