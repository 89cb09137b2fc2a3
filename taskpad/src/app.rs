//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskpad_core::{Commit, Editor, EditorError, Mode, TaskId, TaskLimits};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Task title input (default).
    Title,
    /// Task description input.
    Description,
    /// Existing task list.
    Tasks,
}

/// Main application state.
pub struct App {
    /// Task editor: task list, staged draft, and mode.
    pub editor: Editor,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Cursor position in the title input (character index).
    pub title_cursor: usize,
    /// Cursor position in the description input (character index).
    pub description_cursor: usize,
    /// Selected row in the task list.
    pub selected_task: usize,
    /// Blocking notification; while set, only dismissal keys are handled.
    pub notification: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an empty application with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(TaskLimits::default())
    }

    /// Create an empty application with custom length limits.
    #[must_use]
    pub fn with_limits(limits: TaskLimits) -> Self {
        Self {
            editor: Editor::with_limits(limits),
            focus: PanelFocus::Title,
            title_cursor: 0,
            description_cursor: 0,
            selected_task: 0,
            notification: None,
            should_quit: false,
        }
    }

    /// Handle of the task under the list selection, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.editor.tasks().get(self.selected_task).map(|t| t.id())
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notification = None;
            }
            return;
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Esc, _) => {
                if self.editor.mode() == Mode::Editing {
                    self.cancel_edit();
                } else {
                    self.should_quit = true;
                }
                return;
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::BackTab, _) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Title | PanelFocus::Description => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle key event when an input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        let plain = matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Enter => self.commit(),
            KeyCode::Char(c) if plain => {
                self.edit_focused(|text, cursor| {
                    let idx = byte_index(text, *cursor);
                    text.insert(idx, c);
                    *cursor += 1;
                });
            }
            KeyCode::Char(_) => {}
            KeyCode::Backspace => self.edit_focused(|text, cursor| {
                if *cursor > 0 {
                    *cursor -= 1;
                    let idx = byte_index(text, *cursor);
                    text.remove(idx);
                }
            }),
            KeyCode::Delete => self.edit_focused(|text, cursor| {
                if *cursor < text.chars().count() {
                    let idx = byte_index(text, *cursor);
                    text.remove(idx);
                }
            }),
            KeyCode::Left => self.edit_focused(|_, cursor| *cursor = cursor.saturating_sub(1)),
            KeyCode::Right => self.edit_focused(|text, cursor| {
                *cursor = (*cursor + 1).min(text.chars().count());
            }),
            KeyCode::Home => self.edit_focused(|_, cursor| *cursor = 0),
            KeyCode::End => self.edit_focused(|text, cursor| *cursor = text.chars().count()),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.prev_task(),
            KeyCode::Down | KeyCode::Char('j') => self.next_task(),
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            _ => {}
        }
    }

    /// Cycle focus forward: Title -> Description -> Tasks -> Title.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Title => PanelFocus::Description,
            PanelFocus::Description => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Title,
        };
    }

    /// Cycle focus backward: Title -> Tasks -> Description -> Title.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Title => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Description,
            PanelFocus::Description => PanelFocus::Title,
        };
    }

    /// Apply `f` to the focused input's staged text and cursor.
    fn edit_focused(&mut self, f: impl FnOnce(&mut String, &mut usize)) {
        let draft = self.editor.draft();
        match self.focus {
            PanelFocus::Title => {
                let mut text = draft.title.clone();
                f(&mut text, &mut self.title_cursor);
                self.editor.set_title(text);
            }
            PanelFocus::Description => {
                let mut text = draft.description.clone();
                f(&mut text, &mut self.description_cursor);
                self.editor.set_description(text);
            }
            PanelFocus::Tasks => {}
        }
    }

    /// Commit the staged draft (Create or Save, depending on mode).
    fn commit(&mut self) {
        match self.editor.commit() {
            Ok(Commit::Created(id)) => {
                tracing::debug!(task_id = %id, "create committed from input");
                self.selected_task = self.editor.tasks().len().saturating_sub(1);
                self.focus = PanelFocus::Title;
            }
            Ok(Commit::Saved(id)) => {
                tracing::debug!(task_id = %id, "save committed from input");
            }
            Err(e) => self.report(&e),
        }
        self.sync_cursors();
    }

    /// Start editing the selected task.
    ///
    /// An edit already in progress is cancelled first.
    fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.editor.editing_target() == Some(id) {
            self.focus = PanelFocus::Title;
            return;
        }
        self.editor.cancel_edit();
        match self.editor.begin_edit(id) {
            Ok(()) => self.focus = PanelFocus::Title,
            Err(e) => self.report(&e),
        }
        self.sync_cursors();
    }

    /// Delete the selected task.
    fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.editor.delete_task(id);
        if self.selected_task >= self.editor.tasks().len() {
            self.selected_task = self.editor.tasks().len().saturating_sub(1);
        }
        self.sync_cursors();
    }

    /// Leave edit mode without saving.
    fn cancel_edit(&mut self) {
        self.editor.cancel_edit();
        self.sync_cursors();
    }

    /// Surface an editor error. Validation failures block on a notification.
    fn report(&mut self, error: &EditorError) {
        if let Some(validation) = error.as_validation() {
            self.notification = Some(validation.to_string());
        } else {
            tracing::error!(%error, "editor precondition violated");
        }
    }

    /// Move both cursors to the end of their staged text.
    fn sync_cursors(&mut self) {
        let draft = self.editor.draft();
        self.title_cursor = draft.title.chars().count();
        self.description_cursor = draft.description.chars().count();
    }

    /// Select the previous task.
    const fn prev_task(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    /// Select the next task.
    fn next_task(&mut self) {
        if self.selected_task < self.editor.tasks().len().saturating_sub(1) {
            self.selected_task += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the `char_idx`-th character, or the string length.
fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices().nth(char_idx).map_or(text.len(), |(i, _)| i)
}
