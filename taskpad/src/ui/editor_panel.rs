//! Editor panel rendering (title + description inputs and actions).

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use taskpad_core::Mode;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the editor panel: a block titled by mode holding both inputs.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mode = app.editor.mode();
    let title_color = match mode {
        Mode::Creating => theme::CREATE_TITLE,
        Mode::Editing => theme::EDIT_TITLE,
    };

    let block = Block::default()
        .title(Span::styled(
            format!("{mode} Task"),
            theme::panel_title(title_color),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let draft = app.editor.draft();
    let limits = app.editor.limits();

    render_input(
        frame,
        chunks[0],
        &InputView {
            label: "Task Title",
            text: &draft.title,
            cursor: app.title_cursor,
            max: limits.max_title_len,
            is_focused: app.focus == PanelFocus::Title,
        },
    );
    render_input(
        frame,
        chunks[1],
        &InputView {
            label: "Task Description",
            text: &draft.description,
            cursor: app.description_cursor,
            max: limits.max_description_len,
            is_focused: app.focus == PanelFocus::Description,
        },
    );
    render_actions(frame, chunks[2], mode);
}

/// Everything needed to draw one input box.
struct InputView<'a> {
    label: &'static str,
    text: &'a str,
    cursor: usize,
    max: usize,
    is_focused: bool,
}

/// Render a single-line input with a `len/max` counter in its title.
fn render_input(frame: &mut Frame, area: Rect, input: &InputView<'_>) {
    let len = input.text.chars().count();

    let line = if input.text.is_empty() && !input.is_focused {
        Line::from(Span::styled(input.label, theme::dimmed()))
    } else if input.is_focused {
        let (before, after): (String, String) = {
            let mut chars = input.text.chars();
            let before = chars.by_ref().take(input.cursor).collect();
            (before, chars.collect())
        };
        Line::from(vec![
            Span::styled(before, theme::normal()),
            Span::styled("█", theme::normal()),
            Span::styled(after, theme::normal()),
        ])
    } else {
        Line::from(Span::styled(input.text, theme::normal()))
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(format!("{} ", input.label)),
            Span::styled(
                format!("{len}/{}", input.max),
                theme::counter(len, input.max),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(theme::border(input.is_focused));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the action hints for the current mode.
fn render_actions(frame: &mut Frame, area: Rect, mode: Mode) {
    let spans = match mode {
        Mode::Creating => vec![
            Span::styled("[Enter]", theme::highlighted()),
            Span::raw(" Create"),
        ],
        Mode::Editing => vec![
            Span::styled("[Enter]", theme::highlighted()),
            Span::raw(" Save  "),
            Span::styled("[Esc]", theme::highlighted()),
            Span::raw(" Cancel"),
        ],
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
