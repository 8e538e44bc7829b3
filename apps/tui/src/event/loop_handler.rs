use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use dynamic_form_tui::domain::{FieldKind, TemplateRegistry};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;

/// Print the template registry and exit (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let registry = app.controller.registry();
    tracing::info!(templates = registry.len(), json, "running headless");

    if json {
        println!("{}", render_headless_json(registry)?);
    } else {
        print!("{}", render_headless_text(registry));
    }

    Ok(())
}

fn render_headless_json(registry: &TemplateRegistry) -> Result<String> {
    Ok(serde_json::to_string_pretty(registry)?)
}

fn render_headless_text(registry: &TemplateRegistry) -> String {
    let mut out = String::from("\nForm Templates\n==============\n");

    for template in registry.templates() {
        out.push_str(&format!("\n{}:\n", template.type_name));
        for field in &template.fields {
            let required = if field.required { "required" } else { "optional" };
            let options = match &field.kind {
                FieldKind::Dropdown(options) => format!(" [{}]", options.join(", ")),
                FieldKind::Text | FieldKind::Number | FieldKind::Date | FieldKind::Password => {
                    String::new()
                }
            };
            out.push_str(&format!(
                "- {} ({}) | {} | {required}{options}\n",
                field.label,
                field.name,
                field.kind.as_str()
            ));
        }
    }

    out
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.update();

        // The frame is rebuilt from state on every pass
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    app.running = false;
                } else {
                    handle_input(app, key.code);
                }
                if !app.running {
                    break;
                }
            }
            Ok(Event::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Ok(_) => {
                // Ignore non-key events for now
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read terminal event");
            }
        }
    }

    tracing::info!("event loop finished");
    Ok(())
}
