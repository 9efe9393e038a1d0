//! # Command-Line Interface
//!
//! The interactive menu, its flows and output formatting.
//!
//! ## Menu
//!
//! | Key | Flow | Mutates |
//! |-----|------|---------|
//! | 1 | List tasks by status, grouped by category | no |
//! | 2 | Add a task | yes |
//! | 3 | Mark a task completed | yes |
//! | 4 | Edit an incomplete task | yes |
//! | 5 | Delete a task (with confirmation) | yes |
//! | 6 | Search by title, description, category, priority or overdue | no |
//! | 7 | Statistics | no |
//! | 0 | Exit | no |
//!
//! ## Flags
//!
//! - `--format text|json` - Human-readable or one JSON document per report
//! - `--verbose` - Diagnostic lines on stderr
//! - `--no-color` - Plain text output
//! - `--no-pause` - Skip the "Press Enter" pause after each action
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod config;
mod menu;
mod output;
mod prompt;
mod query;
mod render;
mod task;

pub use app::{run, run_session, Cli};
pub use config::Config;
pub use menu::{MenuCommand, MenuError};
pub use output::{Output, OutputFormat};
pub use prompt::{is_affirmative, Console, PromptError};
