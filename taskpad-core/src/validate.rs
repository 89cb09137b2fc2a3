//! Field validation for task title and description.
//!
//! Validation always runs on trimmed text and checks, in order: empty
//! title, title length, empty description, description length. The first
//! failure wins.

use thiserror::Error;

/// Maximum allowed task title length in characters.
pub const MAX_TITLE_LENGTH: usize = 40;

/// Maximum allowed task description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 120;

/// Length bounds applied when committing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    /// Maximum title length in characters (after trimming).
    pub max_title_len: usize,
    /// Maximum description length in characters (after trimming).
    pub max_description_len: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            max_title_len: MAX_TITLE_LENGTH,
            max_description_len: MAX_DESCRIPTION_LENGTH,
        }
    }
}

/// A rejected title or description.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming.
    #[error("Title can not be empty.")]
    TitleEmpty,
    /// Title exceeds the maximum length.
    #[error("Title should be no longer than {max} symbols.")]
    TitleTooLong {
        /// Active title limit.
        max: usize,
    },
    /// Description is empty after trimming.
    #[error("Description can not be empty.")]
    DescriptionEmpty,
    /// Description exceeds the maximum length.
    #[error("Description should be no longer than {max} symbols.")]
    DescriptionTooLong {
        /// Active description limit.
        max: usize,
    },
}

/// Checks a title/description pair against `limits`.
///
/// Surrounding whitespace is ignored. Length is counted in characters, not
/// bytes.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(
    title: &str,
    description: &str,
    limits: &TaskLimits,
) -> Result<(), ValidationError> {
    let title = title.trim();
    let description = description.trim();

    if title.is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    if title.chars().count() > limits.max_title_len {
        return Err(ValidationError::TitleTooLong {
            max: limits.max_title_len,
        });
    }
    if description.is_empty() {
        return Err(ValidationError::DescriptionEmpty);
    }
    if description.chars().count() > limits.max_description_len {
        return Err(ValidationError::DescriptionTooLong {
            max: limits.max_description_len,
        });
    }
    Ok(())
}
