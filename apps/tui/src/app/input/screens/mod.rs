use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

mod fields;
mod help;
mod selector;
mod submissions;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Esc => app.back(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        _ => match app.focus {
            Focus::TypeSelector => selector::handle_selector_input(app, key),
            Focus::Field(index) => fields::handle_field_input(app, index, key),
            Focus::SubmitButton => fields::handle_submit_button_input(app, key),
            Focus::Submissions => submissions::handle_submissions_input(app, key),
        },
    }

    app.drop_filter_off_selector();
}
