//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Success indicator color (character counter within limit).
pub const SUCCESS: Color = Color::Green;

/// Warning color (edit mode, edit target marker).
pub const WARNING: Color = Color::Yellow;

/// Error color (over-limit counter, notification border).
pub const ERROR: Color = Color::Red;

/// Panel title color for the editor panel in Create mode.
pub const CREATE_TITLE: Color = Color::Green;

/// Panel title color for the editor panel in Edit mode.
pub const EDIT_TITLE: Color = Color::Yellow;

/// Panel title color for the task table.
pub const TASKS_TITLE: Color = Color::Cyan;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, hints).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Border style for a panel depending on focus.
#[must_use]
pub fn border(is_focused: bool) -> Style {
    if is_focused { highlighted() } else { normal() }
}

/// Style for a `len/max` counter.
#[must_use]
pub fn counter(len: usize, max: usize) -> Style {
    if len > max {
        Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SUCCESS)
    }
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style for the blocking notification popup.
#[must_use]
pub fn notification() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(60, 20, 20))
}
