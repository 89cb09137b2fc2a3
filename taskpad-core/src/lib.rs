//! Task editor core for `Taskpad`.
//!
//! Holds the task list, the staged input draft, and the Create/Edit state
//! machine. Nothing here performs I/O; presentation lives in the `taskpad`
//! crate.

pub mod editor;
pub mod task;
pub mod validate;

pub use editor::{Commit, Draft, Editor, EditorError, EditorState, Mode};
pub use task::{Task, TaskId, TaskList};
pub use validate::{
    MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, TaskLimits, ValidationError, validate,
};
