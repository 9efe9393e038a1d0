//! The set of known category labels

use serde::Serialize;

/// Categories every session starts with
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Work", "Personal", "Study", "Health", "Finance"];

/// Insertion-ordered set of category labels.
///
/// Membership is case-sensitive. The set only grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Categories(Vec<String>);

impl Categories {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The five default categories
    pub fn with_defaults() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|c| c == label)
    }

    /// Appends `label` unless already present; returns true if it was added
    pub fn add_if_absent(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            false
        } else {
            self.0.push(label);
            true
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The labels in order, or the defaults if the set is empty
    pub fn labels_or_defaults(&self) -> Vec<String> {
        if self.0.is_empty() {
            Self::with_defaults().0
        } else {
            self.0.clone()
        }
    }
}
