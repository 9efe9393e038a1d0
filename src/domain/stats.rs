//! Aggregate counts over the task list

use chrono::NaiveDate;
use serde::Serialize;

use super::category::Categories;
use super::task::{Priority, Task};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Summary statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    pub overdue: usize,
    /// `completed * 100 / total` rounded down, 0 for an empty list
    pub percent_complete: usize,
    /// One entry per priority, in canonical order
    pub by_priority: Vec<PriorityCount>,
    /// One entry per known category, in set order
    pub by_category: Vec<CategoryCount>,
}

impl Stats {
    pub fn compute(tasks: &[Task], categories: &Categories, today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(today)).count();
        let percent_complete = if total == 0 { 0 } else { completed * 100 / total };

        let by_priority = Priority::ALL
            .iter()
            .map(|&priority| PriorityCount {
                priority,
                count: tasks.iter().filter(|t| t.priority == priority).count(),
            })
            .collect();

        let by_category = categories
            .labels_or_defaults()
            .into_iter()
            .map(|category| {
                let count = tasks.iter().filter(|t| t.category == category).count();
                CategoryCount { category, count }
            })
            .collect();

        Self {
            total,
            completed,
            active: total - completed,
            overdue,
            percent_complete,
            by_priority,
            by_category,
        }
    }
}

#[cfg(test)]
impl Stats {
    /// Count for one category label, 0 if not a known category
    pub fn category_count(&self, category: &str) -> usize {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority
            .iter()
            .find(|p| p.priority == priority)
            .map(|p| p.count)
            .unwrap_or(0)
    }
}
