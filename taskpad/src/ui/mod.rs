//! Terminal UI rendering.

pub mod editor_panel;
pub mod notification;
pub mod status_bar;
pub mod task_table;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::Span,
    widgets::Paragraph,
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Header, editor, task table, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Paragraph::new(Span::styled("Task Scheduler", theme::bold()))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    editor_panel::render(frame, chunks[1], app);
    task_table::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);

    // Drawn last so it covers everything else.
    if let Some(message) = &app.notification {
        notification::render(frame, message);
    }
}
