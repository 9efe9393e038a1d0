//! Task domain model
//!
//! A task is one actionable item with a priority, a category and a due date.
//! Tasks only move forward: once completed they stay completed and can no
//! longer be edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::date::serde_date;
use super::id::TaskId;

/// Priority level, in canonical order from least to most pressing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All levels in canonical order
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("Title cannot be empty")]
    EmptyTitle,
}

/// Field values for a task that does not exist yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub category: String,
}

/// A single task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, never reused
    pub id: TaskId,

    /// Non-empty title
    pub title: String,

    /// Free text, may be empty
    #[serde(default)]
    pub description: String,

    pub priority: Priority,

    #[serde(with = "serde_date")]
    pub due_date: NaiveDate,

    /// Set once by [`Task::complete`], never cleared
    pub completed: bool,

    pub category: String,

    /// Stamped at creation, never changed by edits
    #[serde(with = "serde_date")]
    pub created_at: NaiveDate,
}

impl Task {
    /// Creates an incomplete task
    pub fn new(id: TaskId, fields: NewTask, created_at: NaiveDate) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            priority: fields.priority,
            due_date: fields.due_date,
            completed: false,
            category: fields.category,
            created_at,
        }
    }

    /// An incomplete task whose due date is strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    /// Marks the task completed; returns false if it already was
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }

    /// Applies every field present in `edit`
    pub(crate) fn apply(&mut self, edit: TaskEdit) {
        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(priority) = edit.priority {
            self.priority = priority;
        }
        if let Some(category) = edit.category {
            self.category = category;
        }
        if let Some(due_date) = edit.due_date {
            self.due_date = due_date;
        }
    }
}

/// A change set for an existing task; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
    }
}

/// Decides the title change for an edit.
///
/// Blank input keeps the current title, but only while that title is itself
/// non-blank; a blank input against a blank title is rejected. Other fields
/// keep their value on blank input unconditionally.
pub fn resolve_title(current: &str, input: &str) -> Result<Option<String>, EditError> {
    if !input.trim().is_empty() {
        Ok(Some(input.to_string()))
    } else if current.trim().is_empty() {
        Err(EditError::EmptyTitle)
    } else {
        Ok(None)
    }
}
