//! Read-only flows: list, search, statistics

use std::io::{BufRead, Write};

use super::prompt::{Console, PromptError};
use super::render::{self, GroupReport, TaskReport};
use crate::domain::{
    filter_by_status, group_by_category, search as search_tasks, today, Priority, SearchQuery,
    Stats, StatusFilter, Task,
};
use crate::storage::TaskStore;

/// Lists tasks grouped by category, after asking for a status filter
pub fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
) -> Result<(), PromptError> {
    if store.is_empty() {
        console.out().info("📭 Task list is empty")?;
        return Ok(());
    }

    console.out().chrome("\nStatus filter:")?;
    console.out().chrome("1. All  2. Active  3. Completed")?;
    let filter = console
        .read_optional_number("Your choice (1-3) or Enter for all: ", 1..=3)?
        .and_then(StatusFilter::from_choice)
        .unwrap_or_default();

    let filtered = filter_by_status(store.tasks(), filter);
    console
        .out()
        .verbose_ctx("list", &format!("{:?} filter kept {} tasks", filter, filtered.len()));

    if filtered.is_empty() {
        console.out().info("📭 Nothing found for this filter")?;
        return Ok(());
    }

    let groups = group_by_category(filtered);
    let now = today();
    if console.out().is_json() {
        let reports: Vec<_> = groups.iter().map(|g| GroupReport::new(g, now)).collect();
        console.out().data(&reports)?;
    } else {
        render::grouped_tasks(console.out(), &groups, now)?;
    }
    Ok(())
}

/// Asks which field to search and builds the query
fn ask_query<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
) -> Result<SearchQuery, PromptError> {
    console.out().chrome("\nSearch:")?;
    for line in [
        "1. By title",
        "2. By description",
        "3. By category",
        "4. By priority",
        "5. Overdue tasks",
    ] {
        console.out().chrome(line)?;
    }

    let query = match console.read_number("Your choice (1-5): ", 1..=5)? {
        1 => SearchQuery::Title(console.ask("Part of the title: ")?),
        2 => SearchQuery::Description(console.ask("Part of the description: ")?),
        3 => {
            let categories = store.categories().as_slice();
            SearchQuery::Category(console.select("Choose category:", categories)?.clone())
        }
        4 => SearchQuery::Priority(*console.select("Choose priority:", &Priority::ALL)?),
        _ => SearchQuery::Overdue,
    };
    Ok(query)
}

/// Searches tasks by one field
pub fn search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
) -> Result<(), PromptError> {
    let query = ask_query(console, store)?;
    let now = today();
    let results = search_tasks(store.tasks(), &query, now);
    console
        .out()
        .verbose_ctx("search", &format!("{:?} matched {} tasks", query, results.len()));

    report_tasks(console, &results, "📭 Nothing found")
}

fn report_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: &[&Task],
    empty_message: &str,
) -> Result<(), PromptError> {
    let now = today();
    if console.out().is_json() {
        let reports: Vec<_> = tasks.iter().map(|t| TaskReport::new(t, now)).collect();
        console.out().data(&reports)?;
    } else if tasks.is_empty() {
        console.out().info(empty_message)?;
    } else {
        render::task_list(console.out(), tasks, now)?;
    }
    Ok(())
}

/// Shows statistics for every task
pub fn stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
) -> Result<(), PromptError> {
    let stats = Stats::compute(store.tasks(), store.categories(), today());

    if console.out().is_json() {
        console.out().data(&stats)?;
    } else {
        render::stats_report(console.out(), &stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::testing::{console, written};
    use crate::domain::{parse_date, NewTask, TaskId};

    fn add(store: &mut TaskStore, title: &str, category: &str, due: &str) -> TaskId {
        store
            .add_task(NewTask {
                title: title.to_string(),
                description: format!("{} notes", title),
                priority: Priority::High,
                due_date: parse_date(due).unwrap(),
                category: category.to_string(),
            })
            .id
    }

    #[test]
    fn list_empty_store() {
        let store = TaskStore::new();
        let mut c = console("");

        list(&mut c, &store).unwrap();
        assert!(written(c).contains("Task list is empty"));
    }

    #[test]
    fn list_numbers_across_groups() {
        let mut store = TaskStore::new();
        add(&mut store, "zeta", "Work", "01.01.2099");
        add(&mut store, "alpha", "Health", "01.01.2099");
        add(&mut store, "beta", "Work", "01.01.2099");
        let mut c = console("\n");

        list(&mut c, &store).unwrap();
        let out = written(c);

        let health = out.find("Category: Health (1)").unwrap();
        let work = out.find("Category: Work (2)").unwrap();
        assert!(health < work);

        let alpha = out.find("1. === TASK ===").unwrap();
        let beta = out.find("2. === TASK ===").unwrap();
        let zeta = out.find("3. === TASK ===").unwrap();
        assert!(alpha < beta && beta < zeta);
        assert!(out[beta..zeta].contains("beta"));
    }

    #[test]
    fn list_active_filter_excludes_completed() {
        let mut store = TaskStore::new();
        add(&mut store, "open", "Work", "01.01.2099");
        let done = add(&mut store, "finished", "Work", "01.01.2099");
        store.complete(done).unwrap();
        let mut c = console("2\n");

        list(&mut c, &store).unwrap();
        let out = written(c);

        assert!(out.contains("open"));
        assert!(!out.contains("finished"));
    }

    #[test]
    fn list_filter_with_no_matches() {
        let mut store = TaskStore::new();
        add(&mut store, "open", "Work", "01.01.2099");
        let mut c = console("3\n");

        list(&mut c, &store).unwrap();
        assert!(written(c).contains("Nothing found for this filter"));
    }

    #[test]
    fn search_title_case_insensitive() {
        let mut store = TaskStore::new();
        add(&mut store, "Buy Milk", "Personal", "01.01.2099");
        add(&mut store, "Call mom", "Personal", "01.01.2099");
        let mut c = console("1\nmilk\n");

        search(&mut c, &store).unwrap();
        let out = written(c);

        assert!(out.contains("Buy Milk"));
        assert!(!out.contains("Call mom"));
    }

    #[test]
    fn search_by_category_uses_known_set() {
        let mut store = TaskStore::new();
        add(&mut store, "rent", "Bills", "01.01.2099");
        add(&mut store, "run", "Health", "01.01.2099");
        // Bills is the sixth known category
        let mut c = console("3\n6\n");

        search(&mut c, &store).unwrap();
        let out = written(c);

        assert!(out.contains("rent"));
        assert!(!out.contains("[1002] run"));
    }

    #[test]
    fn overdue_search_follows_completion() {
        let mut store = TaskStore::new();
        let old = add(&mut store, "Ancient", "Work", "01.01.2000");

        let mut c = console("5\n");
        search(&mut c, &store).unwrap();
        assert!(written(c).contains("Ancient"));

        store.complete(old).unwrap();
        let mut c = console("5\n");
        search(&mut c, &store).unwrap();
        let out = written(c);
        assert!(out.contains("Nothing found"));
        assert!(!out.contains("[1001]"));
    }

    #[test]
    fn stats_report_counts() {
        let mut store = TaskStore::new();
        let a = add(&mut store, "a", "Work", "01.01.2000");
        add(&mut store, "b", "Bills", "01.01.2099");
        store.complete(a).unwrap();
        let mut c = console("");

        stats(&mut c, &store).unwrap();
        let out = written(c);

        assert!(out.contains("Total tasks: 2"));
        assert!(out.contains("Completed: 1"));
        assert!(out.contains("Active: 1"));
        assert!(out.contains("Overdue: 0"));
        assert!(out.contains("Completion: 50%"));
        assert!(out.contains("- High: 2"));
        assert!(out.contains("- Bills: 1"));
    }
}
