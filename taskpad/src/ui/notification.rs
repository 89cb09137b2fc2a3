//! Blocking notification popup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme;

/// Render `message` in a centered popup over the rest of the UI.
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered(frame.area(), 50, 5);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled("Notice", theme::panel_title(theme::ERROR)))
        .borders(Borders::ALL)
        .border_style(theme::normal().fg(theme::ERROR))
        .style(theme::notification());

    let body = Paragraph::new(vec![
        Line::from(message),
        Line::from(Span::styled("Press Enter to dismiss", theme::dimmed())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(body, area);
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
