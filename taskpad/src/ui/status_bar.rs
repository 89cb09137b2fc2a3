//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use taskpad_core::Mode;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mode = app.editor.mode();
    let help_text = match (app.focus, mode) {
        (PanelFocus::Title | PanelFocus::Description, Mode::Creating) => {
            "Enter: create | Tab: switch panel | Esc: quit | ←→: move cursor"
        }
        (PanelFocus::Title | PanelFocus::Description, Mode::Editing) => {
            "Enter: save | Esc: cancel edit | Tab: switch panel | ←→: move cursor"
        }
        (PanelFocus::Tasks, _) => "↑↓/jk: navigate | e: edit | d: delete | Tab: switch panel",
    };

    let mode_color = match mode {
        Mode::Creating => theme::CREATE_TITLE,
        Mode::Editing => theme::EDIT_TITLE,
    };

    let status_line = Line::from(vec![
        Span::styled("Taskpad v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(mode_color)),
        Span::raw(format!(" {mode} | {} tasks", app.editor.tasks().len())),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
