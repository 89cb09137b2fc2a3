//! The task editor state machine.
//!
//! [`Editor`] owns the task list, the staged input text, and the current
//! [`EditorState`]. It starts in `Creating`; [`Editor::begin_edit`] switches
//! to `Editing` and stashes the in-progress draft, which is restored when the
//! edit ends by save, cancel, or deletion of the target.

use tracing::{debug, info, warn};

use crate::task::{Task, TaskId, TaskList};
use crate::validate::{TaskLimits, ValidationError, validate};

/// Errors returned by editor operations.
///
/// Only [`EditorError::Validation`] is caused by user input; the other
/// variants are precondition violations by the caller.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EditorError {
    /// The staged text failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A create was attempted while an edit is in progress.
    #[error("cannot create a task while editing")]
    NotCreating,
    /// A save was attempted with no edit in progress.
    #[error("no task is being edited")]
    NotEditing,
    /// An edit was started while another edit is in progress.
    #[error("another task is already being edited")]
    AlreadyEditing,
    /// The task handle does not refer to a task in the list.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

impl EditorError {
    /// Returns the validation failure, if this error is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Which kind of commit the editor is composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Composing a new task.
    Creating,
    /// Modifying an existing task.
    Editing,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creating => write!(f, "Create"),
            Self::Editing => write!(f, "Edit"),
        }
    }
}

/// Staged, unvalidated title and description text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Staged title.
    pub title: String,
    /// Staged description.
    pub description: String,
}

impl Draft {
    /// Builds a draft from anything string-like.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The active editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    /// Composing a new task in the staged fields.
    #[default]
    Creating,
    /// Editing `target`; `saved` holds the create draft to restore afterwards.
    Editing {
        /// Task being edited. Always present in the task list.
        target: TaskId,
        /// Create-mode draft that was in progress when the edit began.
        saved: Draft,
    },
}

/// Result of a successful [`Editor::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// A new task was appended.
    Created(TaskId),
    /// An existing task was overwritten.
    Saved(TaskId),
}

/// Task editor: task list, staged draft, and mode.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    tasks: TaskList,
    state: EditorState,
    draft: Draft,
    limits: TaskLimits,
}

impl Editor {
    /// Creates an empty editor with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty editor with custom length limits.
    #[must_use]
    pub fn with_limits(limits: TaskLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    // -- Read accessors --

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self.state {
            EditorState::Creating => Mode::Creating,
            EditorState::Editing { .. } => Mode::Editing,
        }
    }

    /// Full editor state.
    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    /// Staged title and description.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    /// The underlying task list.
    #[must_use]
    pub const fn task_list(&self) -> &TaskList {
        &self.tasks
    }

    /// Looks up a task by handle.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Handle of the task being edited, if any.
    #[must_use]
    pub const fn editing_target(&self) -> Option<TaskId> {
        match self.state {
            EditorState::Editing { target, .. } => Some(target),
            EditorState::Creating => None,
        }
    }

    /// Active length limits.
    #[must_use]
    pub const fn limits(&self) -> &TaskLimits {
        &self.limits
    }

    // -- Staged field setters --

    /// Replaces the staged title. No validation or trimming is applied.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Replaces the staged description. No validation or trimming is applied.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    // -- Commands --

    /// Validates `title`/`description` against the active limits.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self, title: &str, description: &str) -> Result<(), ValidationError> {
        validate(title, description, &self.limits)
    }

    /// Appends a new task built from the trimmed inputs.
    ///
    /// On success the staged fields are cleared. On failure nothing changes,
    /// so the user can correct the staged text.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotCreating`] while editing, or
    /// [`EditorError::Validation`] if the inputs are rejected.
    pub fn create_task(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<TaskId, EditorError> {
        if self.mode() != Mode::Creating {
            return Err(EditorError::NotCreating);
        }
        let (title, description) = (title.trim(), description.trim());
        if let Err(e) = self.validate(title, description) {
            warn!(error = %e, "task creation rejected");
            return Err(e.into());
        }

        let task = Task::new(title.to_string(), description.to_string());
        let id = task.id();
        self.tasks.push(task);
        self.draft = Draft::default();
        info!(task_id = %id, count = self.tasks.len(), "task created");
        Ok(id)
    }

    /// Starts editing the task `id`.
    ///
    /// The staged draft is stashed and replaced with the task's current text.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::AlreadyEditing`] if an edit is in progress, or
    /// [`EditorError::TaskNotFound`] if `id` is not in the list.
    pub fn begin_edit(&mut self, id: TaskId) -> Result<(), EditorError> {
        if self.mode() == Mode::Editing {
            return Err(EditorError::AlreadyEditing);
        }
        let task = self.tasks.get(id).ok_or(EditorError::TaskNotFound(id))?;
        let loaded = Draft::new(task.title(), task.description());

        let saved = std::mem::replace(&mut self.draft, loaded);
        self.state = EditorState::Editing { target: id, saved };
        debug!(task_id = %id, "edit started");
        Ok(())
    }

    /// Writes the trimmed inputs into the task being edited, then ends the edit.
    ///
    /// The edit ends even when validation fails: the target keeps its old
    /// text and the attempted changes are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotEditing`] if no edit is in progress, or
    /// [`EditorError::Validation`] if the inputs were rejected.
    pub fn save_edit(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<TaskId, EditorError> {
        let EditorState::Editing { target, .. } = self.state else {
            return Err(EditorError::NotEditing);
        };
        let (title, description) = (title.trim(), description.trim());

        let result = match self.validate(title, description) {
            Ok(()) => {
                if let Some(task) = self.tasks.get_mut(target) {
                    task.overwrite(title.to_string(), description.to_string());
                    info!(task_id = %target, "task updated");
                }
                Ok(target)
            }
            Err(e) => {
                warn!(task_id = %target, error = %e, "task update rejected, edit discarded");
                Err(e.into())
            }
        };

        self.cancel_edit();
        result
    }

    /// Ends the current edit without saving and restores the stashed draft.
    ///
    /// Does nothing while creating.
    pub fn cancel_edit(&mut self) {
        if let EditorState::Editing { target, saved } = std::mem::take(&mut self.state) {
            self.draft = saved;
            debug!(task_id = %target, "edit ended");
        }
    }

    /// Removes the task `id` from the list.
    ///
    /// If it is being edited, the edit is cancelled first. Unknown handles
    /// are ignored.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        if self.editing_target() == Some(id) {
            self.cancel_edit();
        }
        let removed = self.tasks.remove(id);
        if removed.is_some() {
            info!(task_id = %id, count = self.tasks.len(), "task deleted");
        }
        removed
    }

    /// Commits the staged draft: creates in `Creating`, saves in `Editing`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] if the staged text is rejected.
    pub fn commit(&mut self) -> Result<Commit, EditorError> {
        let Draft { title, description } = self.draft.clone();
        match self.mode() {
            Mode::Creating => self.create_task(&title, &description).map(Commit::Created),
            Mode::Editing => self.save_edit(&title, &description).map(Commit::Saved),
        }
    }
}
