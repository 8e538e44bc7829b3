use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub fn handle_selector_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Right => {
            let options = app.type_options();
            let current = options
                .iter()
                .position(|name| *name == app.form().type_name)
                .unwrap_or(0);
            let next = if key == KeyCode::Left {
                wrap_decrement(current, options.len())
            } else {
                wrap_increment(current, options.len())
            };
            app.select_type(&options[next]);
        }
        KeyCode::Up => app.focus_prev(),
        KeyCode::Down | KeyCode::Enter => app.focus_next(),
        KeyCode::Backspace => {
            app.type_filter.pop();
            apply_filter(app);
        }
        KeyCode::Char(ch) => {
            app.type_filter.push(ch);
            apply_filter(app);
        }
        _ => {}
    }
}

fn apply_filter(app: &mut App) {
    if app.type_filter.is_empty() {
        return;
    }

    let best = best_match(app.controller.registry().type_names(), &app.type_filter)
        .map(ToString::to_string);

    match best {
        Some(type_name) if type_name != app.form().type_name => {
            app.select_filtered_type(&type_name);
        }
        Some(_) => {}
        None => {
            app.status_message = format!("No form type matches \"{}\"", app.type_filter);
        }
    }
}

/// Highest scoring name for `pattern`; ties go to the earlier name.
pub fn best_match<'a>(names: impl Iterator<Item = &'a str>, pattern: &str) -> Option<&'a str> {
    let matcher = SkimMatcherV2::default();
    let mut best: Option<(i64, &'a str)> = None;

    for name in names {
        if let Some(score) = matcher.fuzzy_match(name, pattern) {
            if best.is_none_or(|(top, _)| score > top) {
                best = Some((score, name));
            }
        }
    }

    best.map(|(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Focus;
    use dynamic_form_tui::config::AppConfig;

    const NAMES: [&str; 3] = [
        "User Information",
        "Address Information",
        "Payment Information",
    ];

    #[test]
    fn best_match_prefers_the_closest_name() {
        assert_eq!(best_match(NAMES.into_iter(), "pay"), Some("Payment Information"));
        assert_eq!(best_match(NAMES.into_iter(), "addr"), Some("Address Information"));
        assert_eq!(best_match(NAMES.into_iter(), "zzz"), None);
    }

    #[test]
    fn arrows_cycle_through_blank_and_templates() {
        let mut app = App::new(&AppConfig::default());

        handle_selector_input(&mut app, KeyCode::Left);
        assert_eq!(app.form().type_name, "Payment Information");

        handle_selector_input(&mut app, KeyCode::Right);
        assert_eq!(app.form().type_name, "");
        assert!(app.form().fields.is_empty());
    }

    #[test]
    fn typing_selects_matching_template() {
        let mut app = App::new(&AppConfig::default());
        for ch in "addr".chars() {
            handle_selector_input(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.form().type_name, "Address Information");
        assert_eq!(app.form().fields.len(), 4);
    }

    #[test]
    fn leaving_the_selector_starts_a_fresh_search() {
        let mut app = App::new(&AppConfig::default());
        for ch in "pay".chars() {
            handle_selector_input(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.form().type_name, "Payment Information");

        app.focus_next();
        assert!(app.type_filter.is_empty());
        app.focus_prev();
        assert_eq!(app.focus, Focus::TypeSelector);

        for ch in "user".chars() {
            handle_selector_input(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.type_filter, "user");
        assert_eq!(app.form().type_name, "User Information");
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn unmatched_filter_reports_status() {
        let mut app = App::new(&AppConfig::default());
        handle_selector_input(&mut app, KeyCode::Char('q'));
        handle_selector_input(&mut app, KeyCode::Char('q'));
        assert!(app.form().type_name.is_empty());
        assert_eq!(app.status_message, "No form type matches \"qq\"");
    }
}
