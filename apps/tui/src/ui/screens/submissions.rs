use crate::app::{App, Focus};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

const ACTIONS_WIDTH: u16 = 18;

/// One table per form type that has entries, in first-submission order.
pub fn render_submissions(app: &App, f: &mut Frame<'_>, area: Rect) {
    let form = app.form();
    let groups: Vec<_> = form.store.groups().collect();

    if groups.is_empty() {
        let empty = Paragraph::new("No submissions yet.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Submissions ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            );
        f.render_widget(empty, area);
        return;
    }

    let mut constraints: Vec<Constraint> = groups
        .iter()
        .map(|(_, records)| {
            let rows = u16::try_from(records.len()).unwrap_or(u16::MAX);
            Constraint::Length(rows.saturating_add(3))
        })
        .collect();
    constraints.push(Constraint::Min(0));
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focused = app.focus == Focus::Submissions;
    let mut first_row = 0;

    for (group_index, (type_name, records)) in groups.iter().enumerate() {
        let table_area = areas[group_index];
        let fields = app.controller.registry().fields_for(type_name);

        let header = Row::new(
            fields
                .iter()
                .map(|field| Cell::from(field.label.as_str()))
                .chain(std::iter::once(Cell::from("Actions"))),
        )
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let selected_in_group = app
            .selected_row
            .checked_sub(first_row)
            .filter(|index| *index < records.len());
        let max_visible_rows = usize::from(table_area.height.saturating_sub(3));
        let offset = scroll_offset(
            records.len(),
            max_visible_rows,
            selected_in_group.unwrap_or(0),
        );

        let rows = records
            .iter()
            .enumerate()
            .skip(offset)
            .take(max_visible_rows)
            .map(|(index, record)| {
                let under_edit = form.cursor.as_ref().is_some_and(|cursor| {
                    cursor.type_name == *type_name && cursor.index == index
                });
                let is_selected = focused && selected_in_group == Some(index);

                let style = if is_selected {
                    Style::default()
                        .bg(Color::Rgb(0, 0, 238))
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else if under_edit {
                    Style::default().fg(Color::Magenta)
                } else {
                    Style::default()
                };

                let actions = if under_edit {
                    "editing…"
                } else {
                    "[e]dit [d]elete"
                };

                Row::new(
                    fields
                        .iter()
                        .map(|field| {
                            let value = record
                                .get(&field.name)
                                .filter(|value| !value.is_empty())
                                .map_or("-", String::as_str);
                            Cell::from(value)
                        })
                        .chain(std::iter::once(Cell::from(actions))),
                )
                .style(style)
            });

        let widths = fields
            .iter()
            .map(|_| Constraint::Fill(1))
            .chain(std::iter::once(Constraint::Length(ACTIONS_WIDTH)));

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .title(format!(" {type_name} Submissions "))
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                }),
        );
        f.render_widget(table, table_area);

        first_row += records.len();
    }
}
