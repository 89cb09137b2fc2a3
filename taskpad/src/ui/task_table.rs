//! Task table rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the existing tasks as a Title / Description table.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let target = app.editor.editing_target();

    let block = Block::default()
        .title(Span::styled(
            "Existing Tasks",
            theme::panel_title(theme::TASKS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    if app.editor.tasks().is_empty() {
        let empty = Paragraph::new(Span::styled("No tasks yet", theme::dimmed())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = app
        .editor
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected_task;
            let marker = if target == Some(task.id()) {
                Span::styled("✎ ", theme::normal().fg(theme::WARNING))
            } else {
                Span::raw("  ")
            };

            let style = if is_selected && is_focused {
                theme::selected()
            } else if is_selected {
                theme::highlighted()
            } else {
                theme::normal()
            };

            Row::new(vec![
                Cell::from(Line::from(vec![marker, Span::raw(task.title())])),
                Cell::from(task.description()),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["  Title", "Description"]).style(theme::bold());
    let table = Table::new(rows, [Constraint::Length(44), Constraint::Min(10)])
        .header(header)
        .block(block);

    // Scrolls the viewport so the selected row stays visible.
    let mut state = TableState::default().with_selected(Some(app.selected_task));
    frame.render_stateful_widget(table, area, &mut state);
}
