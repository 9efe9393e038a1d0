//! Task board - an interactive task manager for the terminal
//!
//! Tasks carry a priority, a category and a due date, and live only for the
//! duration of one session. The `domain` layer holds the data model and its
//! queries, `storage` the session's task store, and `cli` the menu-driven
//! dialogue on top of them.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Categories, Priority, Stats, Task, TaskId};
pub use storage::TaskStore;
