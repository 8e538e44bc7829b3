// Field renderer
// Draws one form control and turns key presses into the control's new raw
// value. Both sides are pure functions of the descriptor and current value.

use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crossterm::event::KeyCode;
use dynamic_form_tui::domain::{FieldDescriptor, FieldKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

pub const DROPDOWN_PLACEHOLDER: &str = "-- Select --";
pub const DATE_HINT: &str = "YYYY-MM-DD";
const PASSWORD_MASK: char = '•';

pub fn render_field<'a>(
    field: &'a FieldDescriptor,
    value: &'a str,
    focused: bool,
) -> TextLine<'a> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let value_style = if focused {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let hint_style = Style::default().fg(Color::DarkGray);

    let prefix = if focused { "> " } else { "  " };
    let required = if field.required { "*" } else { "" };
    let mut spans = vec![Span::styled(
        format!("{prefix}{}{required}: ", field.label),
        label_style,
    )];

    match &field.kind {
        FieldKind::Dropdown(_) => {
            let shown = if value.is_empty() {
                DROPDOWN_PLACEHOLDER
            } else {
                value
            };
            spans.push(Span::styled(format!("‹ {shown} ›"), value_style));
        }
        FieldKind::Password => {
            let masked: String = value.chars().map(|_| PASSWORD_MASK).collect();
            spans.push(Span::styled(masked, value_style));
        }
        FieldKind::Date if value.is_empty() && !focused => {
            spans.push(Span::styled(DATE_HINT, hint_style));
        }
        FieldKind::Text | FieldKind::Number | FieldKind::Date => {
            spans.push(Span::styled(value, value_style));
        }
    }

    if focused && !matches!(field.kind, FieldKind::Dropdown(_)) {
        spans.push(Span::styled("_", value_style.add_modifier(Modifier::SLOW_BLINK)));
    }

    TextLine::from(spans)
}

/// The value `field` takes after `key`, or `None` if the key does not
/// change it. Accepted input is passed through as typed.
pub fn field_key(field: &FieldDescriptor, value: &str, key: KeyCode) -> Option<String> {
    match &field.kind {
        FieldKind::Dropdown(options) => dropdown_key(options, value, key),
        FieldKind::Text | FieldKind::Password => text_key(value, key, |_| true),
        FieldKind::Number => text_key(value, key, |ch| {
            ch.is_ascii_digit() || matches!(ch, '-' | '.' | 'e' | 'E')
        }),
        FieldKind::Date => text_key(value, key, |ch| ch.is_ascii_digit() || ch == '-'),
    }
}

fn text_key(value: &str, key: KeyCode, accepts: impl Fn(char) -> bool) -> Option<String> {
    match key {
        KeyCode::Char(ch) if accepts(ch) => {
            let mut next = value.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace if !value.is_empty() => {
            let mut next = value.to_string();
            next.pop();
            Some(next)
        }
        _ => None,
    }
}

// Choices are the blank entry followed by the options.
fn dropdown_key(options: &[String], value: &str, key: KeyCode) -> Option<String> {
    let len = options.len() + 1;
    let current = options
        .iter()
        .position(|option| option == value)
        .map_or(0, |index| index + 1);

    let next = match key {
        KeyCode::Left => wrap_decrement(current, len),
        KeyCode::Right | KeyCode::Char(' ') => wrap_increment(current, len),
        KeyCode::Backspace | KeyCode::Delete if !value.is_empty() => 0,
        _ => return None,
    };

    if next == 0 {
        Some(String::new())
    } else {
        options.get(next - 1).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &TextLine<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn dropdown() -> FieldDescriptor {
        FieldDescriptor::new(
            "state",
            "State",
            FieldKind::Dropdown(vec!["California".to_string(), "Texas".to_string()]),
            true,
        )
    }

    #[test]
    fn password_values_are_masked() {
        let field = FieldDescriptor::new("cvv", "CVV", FieldKind::Password, true);
        let text = line_text(&render_field(&field, "123", false));
        assert_eq!(text, "  CVV*: •••");
    }

    #[test]
    fn empty_dropdown_shows_placeholder() {
        let field = dropdown();
        assert_eq!(
            line_text(&render_field(&field, "", false)),
            "  State*: ‹ -- Select -- ›"
        );
        assert_eq!(
            line_text(&render_field(&field, "Texas", true)),
            "> State*: ‹ Texas ›"
        );
    }

    #[test]
    fn optional_fields_have_no_marker() {
        let field = FieldDescriptor::new("age", "Age", FieldKind::Number, false);
        assert_eq!(line_text(&render_field(&field, "36", false)), "  Age: 36");
        assert_eq!(line_text(&render_field(&field, "36", true)), "> Age: 36_");
    }

    #[test]
    fn empty_date_shows_format_hint_until_focused() {
        let field = FieldDescriptor::new("expiryDate", "Expiry Date", FieldKind::Date, true);
        assert!(line_text(&render_field(&field, "", false)).ends_with(DATE_HINT));
        assert!(!line_text(&render_field(&field, "", true)).contains(DATE_HINT));
    }

    #[test]
    fn text_fields_pass_characters_through() {
        let field = FieldDescriptor::new("city", "City", FieldKind::Text, true);
        assert_eq!(
            field_key(&field, "Aus", KeyCode::Char('t')),
            Some("Aust".to_string())
        );
        assert_eq!(field_key(&field, "Aus", KeyCode::Backspace), Some("Au".to_string()));
        assert_eq!(field_key(&field, "", KeyCode::Backspace), None);
        assert_eq!(field_key(&field, "Aus", KeyCode::Left), None);
    }

    #[test]
    fn number_and_date_filter_characters() {
        let age = FieldDescriptor::new("age", "Age", FieldKind::Number, false);
        assert_eq!(field_key(&age, "3", KeyCode::Char('6')), Some("36".to_string()));
        assert_eq!(field_key(&age, "3", KeyCode::Char('a')), None);
        assert_eq!(field_key(&age, "", KeyCode::Char('+')), None);

        let expiry = FieldDescriptor::new("expiryDate", "Expiry Date", FieldKind::Date, true);
        assert_eq!(
            field_key(&expiry, "2027", KeyCode::Char('-')),
            Some("2027-".to_string())
        );
        assert_eq!(field_key(&expiry, "2027", KeyCode::Char('/')), None);
    }

    #[test]
    fn dropdown_cycles_through_blank_and_options() {
        let field = dropdown();
        assert_eq!(
            field_key(&field, "", KeyCode::Right),
            Some("California".to_string())
        );
        assert_eq!(field_key(&field, "Texas", KeyCode::Right), Some(String::new()));
        assert_eq!(field_key(&field, "", KeyCode::Left), Some("Texas".to_string()));
        assert_eq!(field_key(&field, "Texas", KeyCode::Backspace), Some(String::new()));
        assert_eq!(field_key(&field, "", KeyCode::Backspace), None);
        assert_eq!(field_key(&field, "Texas", KeyCode::Char('x')), None);
    }
}
