use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, render_popup, ClearWidget};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 9] = [
    ("Tab / Shift+Tab", "Move between selector, fields, button and tables"),
    ("←/→", "Change form type or dropdown choice"),
    ("letters", "Search form types (selector focused)"),
    ("Enter", "Submit the form, or save changes while editing"),
    ("↑/↓", "Move focus, or pick an entry in the tables"),
    ("e", "Edit the selected entry"),
    ("d / Delete", "Delete the selected entry"),
    ("Esc", "Cancel editing, go back, or quit from the selector"),
    ("F1", "Toggle this help"),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(ClearWidget, area);

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];
    lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(format!("{keys:<16}"), Style::default().fg(Color::Cyan)),
            Span::raw(*action),
        ])
    }));

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(help, area);
}

pub fn render_notice(app: &App, f: &mut Frame<'_>) {
    if let Some(notice) = app.notice {
        let area = centered_rect(40, 20, f.area());
        render_popup(f, area, "Success", notice.message(), Color::Green);
    }
}
