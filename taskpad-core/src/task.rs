//! Task records and the ordered task list.
//!
//! Tasks are identified by an opaque [`TaskId`] handle, never by content:
//! two tasks with identical title and description are distinct entries.
//! The list itself preserves insertion order and is only mutated by the
//! [`Editor`](crate::editor::Editor).

use uuid::Uuid;

/// Opaque, stable handle for a task, based on UUID v7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task entry.
///
/// Fields are only writable through the editor, so a task in a list always
/// carries text that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
}

impl Task {
    pub(crate) fn new(title: String, description: String) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
        }
    }

    /// Stable handle for this task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Trimmed task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Overwrites both fields in place, keeping the identity.
    pub(crate) fn overwrite(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
    }
}

/// Ordered sequence of tasks in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// All tasks, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by handle.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Index of the task with the given handle.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Whether a task with the given handle is present.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the task with the given handle, returning it if present.
    pub(crate) fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.position(id)?;
        Some(self.tasks.remove(idx))
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
