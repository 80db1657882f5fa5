//! Validated textual value types for the task domain.

use super::TaskDomainError;
use std::fmt;

/// Validated task title.
///
/// Titles are trimmed on construction and are never blank. The length
/// bound matches the `VARCHAR(255)` column backing the field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Largest title length accepted by the schema, in characters.
    pub const MAX_CHARS: usize = 255;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is blank
    /// after trimming, or [`TaskDomainError::TitleTooLong`] when the
    /// trimmed value exceeds [`Self::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let chars = normalized.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(TaskDomainError::TitleTooLong(chars));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, returning the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated task description.
///
/// Descriptions are optional on the aggregate; this type only enforces
/// the upper length bound of the `VARCHAR(1000)` column. An empty string
/// is a valid description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Largest description length accepted by the schema, in characters.
    pub const MAX_CHARS: usize = 1000;

    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the value
    /// exceeds [`Self::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let chars = raw.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(TaskDomainError::DescriptionTooLong(chars));
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the description, returning the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
