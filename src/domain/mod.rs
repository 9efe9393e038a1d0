//! Domain models for the task board
//!
//! Contains the core data and queries without any I/O concerns.

pub mod date;
mod id;
mod task;
mod category;
mod query;
mod stats;

pub use date::{format_date, parse_date, today, DateError, DATE_FORMAT};
pub use id::{IdError, IdGenerator, TaskId, ID_BASE};
pub use task::{resolve_title, EditError, NewTask, Priority, Task, TaskEdit};
pub use category::{Categories, DEFAULT_CATEGORIES};
pub use query::{
    filter_by_status, group_by_category, search, sort_within_group, CategoryGroup, SearchQuery,
    StatusFilter,
};
pub use stats::{CategoryCount, PriorityCount, Stats};
