//! Text rendering for tasks, groups and statistics
//!
//! Layout only: everything shown here has already been computed by the
//! domain layer.

use std::io::{self, Write};

use chrono::NaiveDate;
use crossterm::style::Color;
use serde::Serialize;

use super::output::Output;
use crate::domain::{format_date, CategoryGroup, Priority, Stats, Task};

const RULE: &str = "--------------------------------------------";
const BANNER: &str = "=================================================";

/// A task plus its overdue flag, for JSON reports
#[derive(Debug, Serialize)]
pub struct TaskReport<'a> {
    #[serde(flatten)]
    pub task: &'a Task,
    pub overdue: bool,
}

impl<'a> TaskReport<'a> {
    pub fn new(task: &'a Task, today: NaiveDate) -> Self {
        Self {
            task,
            overdue: task.is_overdue(today),
        }
    }
}

/// A category group, for JSON reports
#[derive(Debug, Serialize)]
pub struct GroupReport<'a> {
    pub category: &'a str,
    pub tasks: Vec<TaskReport<'a>>,
}

impl<'a> GroupReport<'a> {
    pub fn new(group: &CategoryGroup<'a>, today: NaiveDate) -> Self {
        Self {
            category: group.category,
            tasks: group.tasks.iter().map(|t| TaskReport::new(*t, today)).collect(),
        }
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Urgent => Color::Red,
        Priority::High | Priority::Medium => Color::Yellow,
        Priority::Low => Color::Blue,
    }
}

fn priority_glyph(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "🔵",
        Priority::Medium => "🟡",
        Priority::High => "🟠",
        Priority::Urgent => "🔴",
    }
}

fn status_glyph(completed: bool) -> &'static str {
    if completed {
        "✅"
    } else {
        "⏳"
    }
}

/// Section banner
pub fn header<W: Write>(out: &mut Output<W>, title: &str) -> io::Result<()> {
    out.chrome("")?;
    out.chrome(BANNER)?;
    out.chrome(title)?;
    out.chrome(BANNER)
}

/// The root menu
pub fn menu<W: Write>(out: &mut Output<W>) -> io::Result<()> {
    header(out, "TASK MANAGER")?;
    for line in [
        "🗂  1  Show tasks",
        "➕  2  Add task",
        "✅  3  Mark task completed",
        "✏️  4  Edit task",
        "🗑  5  Delete task",
        "🔎  6  Search / filters",
        "📊  7  Statistics",
        "❌  0  Exit",
    ] {
        out.chrome(line)?;
    }
    out.chrome("-------------------------------------------------")
}

/// One task card, optionally numbered
pub fn task_card<W: Write>(
    out: &mut Output<W>,
    task: &Task,
    index: Option<usize>,
    today: NaiveDate,
) -> io::Result<()> {
    let overdue = task.is_overdue(today);
    let prefix = index.map(|i| format!("{}. ", i)).unwrap_or_default();
    let heading = out.paint("TASK", Color::Cyan);
    let overdue_mark = if overdue {
        format!(" {}", out.paint("OVERDUE", Color::Red))
    } else {
        String::new()
    };
    let priority = out.paint(
        format!("{} {}", task.priority, priority_glyph(task.priority)),
        priority_color(task.priority),
    );

    out.line(&format!("{}=== {} ===", prefix, heading))?;
    out.line(&format!(
        "{} [{}] {}",
        status_glyph(task.completed),
        task.id,
        task.title
    ))?;
    if !task.description.trim().is_empty() {
        out.line(&format!("📄 {}", task.description))?;
    }
    out.line(&format!("📁 Category: {}", task.category))?;
    out.line(&format!(
        "📅 Created: {} | Due: {}{}",
        format_date(task.created_at),
        format_date(task.due_date),
        overdue_mark
    ))?;
    out.line(&format!("🎯 Priority: {}", priority))?;
    out.line(RULE)
}

/// Heading above one category group
pub fn group_heading<W: Write>(out: &mut Output<W>, category: &str, count: usize) -> io::Result<()> {
    out.blank()?;
    out.line(&format!("📁 Category: {} ({})", category, count))?;
    out.line(RULE)
}

/// Groups with a running index across the whole listing
pub fn grouped_tasks<W: Write>(
    out: &mut Output<W>,
    groups: &[CategoryGroup<'_>],
    today: NaiveDate,
) -> io::Result<()> {
    let mut index = 1;
    for group in groups {
        group_heading(out, group.category, group.tasks.len())?;
        for task in &group.tasks {
            task_card(out, task, Some(index), today)?;
            index += 1;
        }
    }
    Ok(())
}

/// Numbered cards in the given order
pub fn task_list<W: Write>(out: &mut Output<W>, tasks: &[&Task], today: NaiveDate) -> io::Result<()> {
    for (i, task) in tasks.iter().enumerate() {
        task_card(out, task, Some(i + 1), today)?;
    }
    Ok(())
}

pub fn stats_report<W: Write>(out: &mut Output<W>, stats: &Stats) -> io::Result<()> {
    out.line("")?;
    out.line(BANNER)?;
    out.line("Statistics")?;
    out.line(BANNER)?;
    out.line(&format!("Total tasks: {}", stats.total))?;
    out.line(&format!("Completed: {}", stats.completed))?;
    out.line(&format!("Active: {}", stats.active))?;
    out.line(&format!("Overdue: {}", stats.overdue))?;
    out.line(&format!("Completion: {}%", stats.percent_complete))?;

    out.blank()?;
    out.line("By priority:")?;
    for entry in &stats.by_priority {
        let label = out.paint(entry.priority, priority_color(entry.priority));
        out.line(&format!("- {}: {}", label, entry.count))?;
    }

    out.blank()?;
    out.line("By category:")?;
    for entry in &stats.by_category {
        out.line(&format!("- {}: {}", entry.category, entry.count))?;
    }
    Ok(())
}
