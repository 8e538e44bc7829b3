use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_submissions_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => {
            if !app.move_selection_up() {
                app.focus_prev();
            }
        }
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Enter | KeyCode::Char('e' | 'E') => app.edit_selected(),
        KeyCode::Delete | KeyCode::Char('d' | 'D') => app.delete_selected(),
        _ => {}
    }
}
