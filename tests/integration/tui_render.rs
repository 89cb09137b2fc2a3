//! Rendering tests for the task editor TUI.
//!
//! Draws the full UI into a `TestBackend` and checks the visible text for
//! the mode heading, staged input, task rows, and notification popup.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use taskpad::app::{App, PanelFocus};
use taskpad::ui;

/// Draw `app` into a 100x30 buffer and return its text, one line per row.
fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| ui::draw(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn empty_app_shows_create_mode() {
    let app = App::new();
    let screen = render(&app);

    assert!(screen.contains("Task Scheduler"));
    assert!(screen.contains("Create Task"));
    assert!(screen.contains("Task Title 0/40"));
    assert!(screen.contains("Task Description 0/120"));
    assert!(screen.contains("[Enter] Create"));
    assert!(screen.contains("Existing Tasks"));
    assert!(screen.contains("No tasks yet"));
}

#[test]
fn created_task_appears_in_table() {
    let mut app = App::new();
    type_str(&mut app, "Buy milk");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "2% organic");
    press(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("Title"));
    assert!(screen.contains("Description"));
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("2% organic"));
    assert!(!screen.contains("No tasks yet"));
}

#[test]
fn staged_text_and_counter_render() {
    let mut app = App::new();
    type_str(&mut app, "hello");
    let screen = render(&app);
    assert!(screen.contains("hello█"));
    assert!(screen.contains("Task Title 5/40"));
}

#[test]
fn edit_mode_shows_save_and_cancel() {
    let mut app = App::new();
    type_str(&mut app, "task");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "desc");
    press(&mut app, KeyCode::Enter);

    app.focus = PanelFocus::Tasks;
    press(&mut app, KeyCode::Char('e'));

    let screen = render(&app);
    assert!(screen.contains("Edit Task"));
    assert!(screen.contains("[Enter] Save"));
    assert!(screen.contains("[Esc] Cancel"));
    assert!(screen.contains("✎"));
}

#[test]
fn validation_failure_shows_notification() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("Notice"));
    assert!(screen.contains("Title can not be empty."));
    assert!(screen.contains("Press Enter to dismiss"));

    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(!screen.contains("Notice"));
}

#[test]
fn selected_row_below_viewport_is_drawn() {
    let mut app = App::new();
    for i in 0..40 {
        type_str(&mut app, &format!("task{i}"));
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, &format!("row {i}"));
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.editor.tasks().len(), 40);

    app.focus = PanelFocus::Tasks;
    for _ in 0..39 {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(app.selected_task, 0);
    let screen = render(&app);
    assert!(screen.contains("task0 "));
    assert!(!screen.contains("task39"));

    for _ in 0..39 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected_task, 39);
    let screen = render(&app);
    assert!(screen.contains("task39"));
    assert!(screen.contains("row 39"));
    assert!(!screen.contains("task0 "));
}
