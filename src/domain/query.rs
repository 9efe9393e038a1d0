//! Read-only queries over a task list
//!
//! Filtering, grouping, ordering and search. All functions borrow the tasks
//! and return references in the order described on each function.

use chrono::NaiveDate;
use std::cmp::Ordering;

use super::task::{Priority, Task};

/// Completion filter for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    /// Maps a 1-based menu choice (1 all, 2 active, 3 completed)
    pub fn from_choice(choice: usize) -> Option<Self> {
        match choice {
            1 => Some(StatusFilter::All),
            2 => Some(StatusFilter::Active),
            3 => Some(StatusFilter::Completed),
            _ => None,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

/// Tasks matching `filter`, in store order
pub fn filter_by_status(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Tasks sharing one exact category label
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub tasks: Vec<&'a Task>,
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Partitions tasks by exact category.
///
/// Groups come back ordered by label, case-insensitively; labels differing
/// only in case stay separate groups and fall back to exact ordering. Each
/// group is sorted with [`sort_within_group`].
pub fn group_by_category<'a, I>(tasks: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for task in tasks {
        match groups.iter_mut().find(|g| g.category == task.category) {
            Some(group) => group.tasks.push(task),
            None => groups.push(CategoryGroup {
                category: &task.category,
                tasks: vec![task],
            }),
        }
    }

    groups.sort_by(|a, b| {
        compare_case_insensitive(a.category, b.category).then_with(|| a.category.cmp(b.category))
    });
    for group in &mut groups {
        sort_within_group(&mut group.tasks);
    }
    groups
}

/// Incomplete tasks first, then by title ignoring case
pub fn sort_within_group(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| compare_case_insensitive(&a.title, &b.title))
    });
}

/// What to search for
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Case-insensitive substring of the title
    Title(String),
    /// Case-insensitive substring of the description
    Description(String),
    /// Exact category label
    Category(String),
    /// Exact priority
    Priority(Priority),
    /// Overdue as of the date passed to [`search`]
    Overdue,
}

impl SearchQuery {
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            SearchQuery::Title(q) => contains_ignore_case(&task.title, q),
            SearchQuery::Description(q) => contains_ignore_case(&task.description, q),
            SearchQuery::Category(c) => &task.category == c,
            SearchQuery::Priority(p) => task.priority == *p,
            SearchQuery::Overdue => task.is_overdue(today),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Tasks matching `query`, in store order
pub fn search<'a>(tasks: &'a [Task], query: &SearchQuery, today: NaiveDate) -> Vec<&'a Task> {
    tasks.iter().filter(|t| query.matches(t, today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::parse_date;
    use crate::domain::id::TaskId;
    use crate::domain::task::NewTask;

    fn task(id: u32, title: &str, category: &str, completed: bool) -> Task {
        let mut t = Task::new(
            TaskId::new(id),
            NewTask {
                title: title.to_string(),
                description: format!("about {}", title.to_lowercase()),
                priority: Priority::Low,
                due_date: parse_date("10.06.2024").unwrap(),
                category: category.to_string(),
            },
            parse_date("01.06.2024").unwrap(),
        );
        t.completed = completed;
        t
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn status_filter() {
        let tasks = vec![
            task(1, "a", "Work", false),
            task(2, "b", "Work", true),
            task(3, "c", "Home", false),
        ];

        assert_eq!(filter_by_status(&tasks, StatusFilter::All).len(), 3);
        assert_eq!(titles(&filter_by_status(&tasks, StatusFilter::Active)), ["a", "c"]);
        assert_eq!(titles(&filter_by_status(&tasks, StatusFilter::Completed)), ["b"]);
    }

    #[test]
    fn filter_from_choice() {
        assert_eq!(StatusFilter::from_choice(1), Some(StatusFilter::All));
        assert_eq!(StatusFilter::from_choice(3), Some(StatusFilter::Completed));
        assert_eq!(StatusFilter::from_choice(4), None);
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }

    #[test]
    fn groups_sorted_case_insensitively() {
        let tasks = vec![
            task(1, "x", "work", false),
            task(2, "y", "Bills", false),
            task(3, "z", "apple", false),
        ];

        let groups = group_by_category(&tasks);
        let names: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(names, ["apple", "Bills", "work"]);
    }

    #[test]
    fn labels_differing_in_case_stay_separate() {
        let tasks = vec![task(1, "x", "work", false), task(2, "y", "Work", false)];

        let groups = group_by_category(&tasks);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Work");
        assert_eq!(groups[1].category, "work");
    }

    #[test]
    fn group_members_incomplete_first_then_title() {
        let tasks = vec![
            task(1, "beta", "Work", true),
            task(2, "Gamma", "Work", false),
            task(3, "alpha", "Work", false),
            task(4, "Aardvark", "Work", true),
        ];

        let groups = group_by_category(&tasks);
        assert_eq!(groups.len(), 1);
        assert_eq!(titles(&groups[0].tasks), ["alpha", "Gamma", "Aardvark", "beta"]);
    }

    #[test]
    fn title_search_ignores_case() {
        let tasks = vec![task(1, "Buy Milk", "Home", false), task(2, "Call Bob", "Home", false)];
        let today = parse_date("01.06.2024").unwrap();

        let found = search(&tasks, &SearchQuery::Title("milk".to_string()), today);
        assert_eq!(titles(&found), ["Buy Milk"]);

        let found = search(&tasks, &SearchQuery::Description("ABOUT CALL".to_string()), today);
        assert_eq!(titles(&found), ["Call Bob"]);
    }

    #[test]
    fn category_search_is_exact() {
        let tasks = vec![task(1, "a", "Work", false), task(2, "b", "work", false)];
        let today = parse_date("01.06.2024").unwrap();

        let found = search(&tasks, &SearchQuery::Category("Work".to_string()), today);
        assert_eq!(titles(&found), ["a"]);
    }

    #[test]
    fn priority_search() {
        let mut tasks = vec![task(1, "a", "Work", false), task(2, "b", "Work", false)];
        tasks[1].priority = Priority::Urgent;
        let today = parse_date("01.06.2024").unwrap();

        let found = search(&tasks, &SearchQuery::Priority(Priority::Urgent), today);
        assert_eq!(titles(&found), ["b"]);
    }

    #[test]
    fn overdue_search_uses_given_date() {
        let tasks = vec![task(1, "open", "Work", false), task(2, "done", "Work", true)];

        let before = parse_date("10.06.2024").unwrap();
        let after = parse_date("11.06.2024").unwrap();

        assert!(search(&tasks, &SearchQuery::Overdue, before).is_empty());
        assert_eq!(titles(&search(&tasks, &SearchQuery::Overdue, after)), ["open"]);
    }
}
