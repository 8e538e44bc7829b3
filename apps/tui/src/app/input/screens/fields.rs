use crate::app::state::App;
use crate::ui::widgets::field::field_key;
use crossterm::event::KeyCode;

pub fn handle_field_input(app: &mut App, index: usize, key: KeyCode) {
    match key {
        KeyCode::Up => app.focus_prev(),
        KeyCode::Down => app.focus_next(),
        KeyCode::Enter => app.submit_form(),
        _ => {
            let Some(field) = app.form().fields.get(index) else {
                return;
            };

            if let Some(value) = field_key(field, app.form().value(&field.name), key) {
                let name = field.name.clone();
                app.set_field_value(&name, value);
            }
        }
    }
}

pub fn handle_submit_button_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.focus_prev(),
        KeyCode::Down => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_form(),
        _ => {}
    }
}
