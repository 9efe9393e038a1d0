//! In-memory task store
//!
//! Owns the task list, the known categories and the ID generator. Every
//! mutation goes through this type so IDs stay unique and every category in
//! use is also a known category.

use thiserror::Error;

use crate::domain::{today, Categories, IdGenerator, NewTask, Task, TaskEdit, TaskId};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Task with ID {0} not found")]
    NotFound(TaskId),

    #[error("Task {0} is completed and cannot be edited")]
    Completed(TaskId),
}

/// Tasks and categories for one session
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Categories,
    ids: IdGenerator,
}

impl TaskStore {
    /// An empty store seeded with the default categories
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            categories: Categories::with_defaults(),
            ids: IdGenerator::new(),
        }
    }

    /// Creates a task stamped with today's date and returns it
    pub fn add_task(&mut self, fields: NewTask) -> &Task {
        let id = self.ids.next_id();
        self.add_category_if_absent(&fields.category);
        self.tasks.push(Task::new(id, fields, today()));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Removes and returns the task with `id`
    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Marks a task completed; `Ok(false)` if it already was
    pub fn complete(&mut self, id: TaskId) -> Result<bool, StoreError> {
        Ok(self.find_mut(id)?.complete())
    }

    /// Applies an edit in full, or not at all.
    ///
    /// Completed tasks are refused. A new category in the edit becomes a
    /// known category only when the edit is applied.
    pub fn apply_edit(&mut self, id: TaskId, edit: TaskEdit) -> Result<(), StoreError> {
        let task = self.find_mut(id)?;
        if task.completed {
            return Err(StoreError::Completed(id));
        }

        let new_category = edit.category.clone();
        task.apply(edit);
        if let Some(category) = new_category {
            self.add_category_if_absent(&category);
        }
        Ok(())
    }

    /// Returns true if the label was new
    pub fn add_category_if_absent(&mut self, label: &str) -> bool {
        self.categories.add_if_absent(label)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
