//! # Storage Layer
//!
//! Session state for the task board. Everything lives in process memory and
//! is discarded on exit.
//!
//! | Data | Holder |
//! |------|--------|
//! | Tasks | `Vec<Task>` in creation order |
//! | Categories | [`Categories`](crate::domain::Categories), insertion ordered |
//! | Next ID | [`IdGenerator`](crate::domain::IdGenerator) |
//!
//! ## Key Types
//!
//! - [`TaskStore`] - Owns all three and enforces their invariants

mod store;

pub use store::{StoreError, TaskStore};
