//! Task flows: create, complete, edit, delete
//!
//! Each flow validates its input before touching the store. Invalid input is
//! reported and either re-asked or ends the flow with nothing changed.

use std::io::{BufRead, Write};

use super::prompt::{Console, PromptError};
use super::render;
use crate::domain::{
    format_date, parse_date, resolve_title, today, Categories, NewTask, Priority, TaskEdit, TaskId,
};
use crate::storage::TaskStore;

/// Asks for a category from `categories`, or a new label.
///
/// With `skippable`, a blank answer returns `None`.
fn choose_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    categories: &Categories,
    heading: &str,
    skippable: bool,
) -> Result<Option<String>, PromptError> {
    let new_option = categories.len() + 1;

    console.out().chrome(heading)?;
    for (i, category) in categories.iter().enumerate() {
        console.out().chrome(&format!("{}. {}", i + 1, category))?;
    }
    console
        .out()
        .chrome(&format!("{}. Create new category", new_option))?;

    let choice = if skippable {
        let prompt = format!("Your choice (1-{}) or Enter to skip: ", new_option);
        console.read_optional_number(&prompt, 1..=new_option)?
    } else {
        let prompt = format!("Your choice (1-{}): ", new_option);
        Some(console.read_number(&prompt, 1..=new_option)?)
    };

    match choice {
        None => Ok(None),
        Some(n) if n == new_option => console
            .ask_non_empty("New category name: ", "Category cannot be empty")
            .map(Some),
        Some(n) => Ok(categories.get(n - 1).map(str::to_string)),
    }
}

/// Interactive task creation
pub fn create<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut TaskStore,
) -> Result<(), PromptError> {
    render::header(console.out(), "NEW TASK")?;

    let title = console.ask_non_empty("Task title: ", "Title cannot be empty")?;
    let description = console.ask("Description (Enter to skip): ")?;
    let priority = *console.select("\nChoose priority:", &Priority::ALL)?;

    let category = choose_category(console, store.categories(), "\nAvailable categories:", false)?
        .unwrap_or_default();

    let due_date = console.ask_until("Due date (dd.mm.yyyy, Enter for today): ", |answer| {
        if answer.is_empty() {
            Ok(today())
        } else {
            parse_date(answer).map_err(|e| e.to_string())
        }
    })?;

    let task = store.add_task(NewTask {
        title,
        description,
        priority,
        due_date,
        category,
    });
    console
        .out()
        .verbose_ctx("create", &format!("Stored task {} in '{}'", task.id, task.category));

    if console.out().is_json() {
        let report = render::TaskReport::new(task, today());
        console.out().data(&report)?;
    } else {
        let message = format!("✅ Task '{}' added with ID: {}", task.title, task.id);
        console.out().success(&message)?;
    }
    Ok(())
}

/// Asks for a task ID and checks that the task exists.
///
/// Reports a malformed or unknown ID and returns `None`.
pub fn find_by_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
) -> Result<Option<TaskId>, PromptError> {
    let answer = console.ask("Task ID: ")?;
    let id: TaskId = match answer.parse() {
        Ok(id) => id,
        Err(e) => {
            console.out().error(&format!("{}", e))?;
            return Ok(None);
        }
    };

    if store.find(id).is_none() {
        console
            .out()
            .error(&format!("Task with ID {} not found", id))?;
        return Ok(None);
    }
    Ok(Some(id))
}

/// Marks a task completed
pub fn complete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut TaskStore,
) -> Result<(), PromptError> {
    let Some(id) = find_by_id(console, store)? else {
        return Ok(());
    };

    match store.complete(id) {
        Ok(true) => {
            let title = store.find(id).map(|t| t.title.as_str()).unwrap_or_default();
            console
                .out()
                .success(&format!("✅ Task '{}' marked as completed", title))?;
        }
        Ok(false) => console.out().warning("Task is already completed")?,
        Err(e) => console.out().error(&e.to_string())?,
    }
    Ok(())
}

/// Edits an incomplete task.
///
/// All answers are collected first and applied together, so any rejected
/// answer leaves the task exactly as it was.
pub fn edit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut TaskStore,
) -> Result<(), PromptError> {
    let Some(id) = find_by_id(console, store)? else {
        return Ok(());
    };
    let Some(task) = store.find(id).cloned() else {
        return Ok(());
    };

    if task.completed {
        console.out().error("Completed tasks cannot be edited")?;
        return Ok(());
    }

    console
        .out()
        .chrome("Leave a field blank to keep its current value")?;

    let answer = console.ask(&format!("Title [{}]: ", task.title))?;
    let title = match resolve_title(&task.title, &answer) {
        Ok(title) => title,
        Err(e) => {
            console.out().error(&e.to_string())?;
            return Ok(());
        }
    };

    let current_description = if task.description.trim().is_empty() {
        "-"
    } else {
        task.description.as_str()
    };
    let answer = console.ask(&format!("Description [{}]: ", current_description))?;
    let description = (!answer.is_empty()).then_some(answer);

    let heading = format!("New priority (current: {}), Enter to skip:", task.priority);
    let priority = console.select_optional(&heading, &Priority::ALL)?.copied();

    let heading = format!("\nAvailable categories (current: {}):", task.category);
    let category = choose_category(console, store.categories(), &heading, true)?;

    let answer = console.ask(&format!(
        "Due date [{}] (dd.mm.yyyy) or Enter: ",
        format_date(task.due_date)
    ))?;
    let due_date = if answer.is_empty() {
        None
    } else {
        match parse_date(&answer) {
            Ok(date) => Some(date),
            Err(e) => {
                console
                    .out()
                    .error(&format!("{}; changes not saved", e))?;
                return Ok(());
            }
        }
    };

    let edit = TaskEdit {
        title,
        description,
        priority,
        category,
        due_date,
    };
    if edit.is_empty() {
        console.out().verbose_ctx("edit", &format!("No changes for task {}", id));
    }

    match store.apply_edit(id, edit) {
        Ok(()) => console.out().success("Changes saved")?,
        Err(e) => console.out().error(&e.to_string())?,
    }
    Ok(())
}

/// Deletes a task after confirmation
pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut TaskStore,
) -> Result<(), PromptError> {
    let Some(id) = find_by_id(console, store)? else {
        return Ok(());
    };
    let title = store.find(id).map(|t| t.title.clone()).unwrap_or_default();

    let question = format!("Are you sure you want to delete task '{}'? (y/N) ", title);
    if !console.confirm(&question)? {
        console.out().info("Cancelled")?;
        return Ok(());
    }

    match store.remove(id) {
        Ok(_) => {
            console.out().verbose_ctx("delete", &format!("Removed task {}", id));
            console.out().success("Task deleted")?;
        }
        Err(e) => console.out().error(&e.to_string())?,
    }
    Ok(())
}
