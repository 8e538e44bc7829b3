use crate::app::{App, Focus};
use crate::ui::screens::submissions::render_submissions;
use crate::ui::widgets::field::{render_field, DROPDOWN_PLACEHOLDER};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SUBMIT_BUTTON_HEIGHT: u16 = 3;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let form = app.form();
    let field_rows = u16::try_from(form.fields.len()).unwrap_or(u16::MAX);
    let form_height = if form.fields.is_empty() {
        3
    } else {
        field_rows
            .saturating_add(2)
            .saturating_add(SUBMIT_BUTTON_HEIGHT)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(3),           // Form type selector
            Constraint::Length(form_height), // Fields and submit button
            Constraint::Min(3),              // Submission tables
            Constraint::Length(1),           // Status line
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    let title = Paragraph::new(Span::styled(
        "Dynamic Form",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, chunks[0]);

    render_type_selector(app, f, chunks[1]);
    render_form(app, f, chunks[2]);
    render_submissions(app, f, chunks[3]);
    render_status(app, f, chunks[4]);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_type_selector(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::TypeSelector;
    let type_name = app.form().type_name.as_str();
    let shown = if type_name.is_empty() {
        DROPDOWN_PLACEHOLDER
    } else {
        type_name
    };

    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("‹ {shown} ›"), value_style)];
    if !app.type_filter.is_empty() {
        spans.push(Span::styled(
            format!("  filter: {}", app.type_filter),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title(" Select Form Type ")
        .borders(Borders::ALL)
        .border_style(focus_border(focused));
    f.render_widget(Paragraph::new(TextLine::from(spans)).block(block), area);
}

fn render_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let form = app.form();

    if form.fields.is_empty() {
        let message = if form.type_name.is_empty() {
            "Choose a form type to begin.".to_string()
        } else {
            format!("No fields are defined for {}.", form.type_name)
        };
        let placeholder = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    }

    let title = match &form.cursor {
        Some(cursor) => format!(" Editing {} #{} ", cursor.type_name, cursor.index + 1),
        None => format!(" {} ", form.type_name),
    };
    let editing = form.is_editing();
    let border_color = if editing { Color::Magenta } else { Color::Green };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> =
        form.fields.iter().map(|_| Constraint::Length(1)).collect();
    constraints.push(Constraint::Length(SUBMIT_BUTTON_HEIGHT));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in form.fields.iter().enumerate() {
        let focused = app.focus == Focus::Field(index);
        let line = render_field(field, form.value(&field.name), focused);
        f.render_widget(Paragraph::new(line), rows[index]);
    }

    let button_focused = app.focus == Focus::SubmitButton;
    let label = if editing { "Save Changes" } else { "Submit" };
    let button_style = if button_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let button_area = Rect {
        width: inner.width.min(20),
        ..rows[form.fields.len()]
    };
    let button = Paragraph::new(Text::from(Span::styled(label, button_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(button_style),
        );
    f.render_widget(button, button_area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    if !app.status_message.is_empty() {
        let status = Paragraph::new(app.status_message.as_str())
            .style(Style::default().fg(Color::LightRed));
        f.render_widget(status, area);
        return;
    }

    let hint = match app.focus {
        Focus::TypeSelector => "←/→ choose form type, type to search, Tab next, Esc quit, F1 help",
        Focus::Field(_) => "Type to edit, ←/→ pick option, Enter submit, Tab next, Esc back",
        Focus::SubmitButton => "Enter submit, Tab next, Esc back",
        Focus::Submissions => "↑/↓ select entry, e edit, d delete, Tab next, Esc back",
    };
    let hint = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(hint, area);
}
