//! Numeric task identifiers
//!
//! IDs are plain integers handed out by an [`IdGenerator`]. The first ID is
//! one above [`ID_BASE`], so generated IDs stay four digits wide for a long
//! while and never collide with small menu numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Generated IDs start strictly above this value
pub const ID_BASE: u32 = 1000;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID: expected a number, got '{0}'")]
    InvalidTaskId(String),
}

/// Task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| IdError::InvalidTaskId(s.to_string()))
    }
}

/// Monotonic ID source
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { last: ID_BASE }
    }

    /// Returns a fresh ID, strictly greater than every ID issued before
    pub fn next_id(&mut self) -> TaskId {
        self.last += 1;
        TaskId(self.last)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
