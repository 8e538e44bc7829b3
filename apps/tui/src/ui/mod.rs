// UI module for dynamic_form_tui
// The whole frame is derived from `App` on every draw

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::form::render_main(app, f);

    if app.show_help {
        screens::help::render_help(f);
    } else if app.notice_visible() {
        screens::help::render_notice(app, f);
    }
}
