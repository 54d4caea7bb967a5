//! Task filtering.
//!
//! A [`TaskFilter`] decides whether a single task belongs in a view; filters
//! combine with [`CompositeFilter`].

use crate::Task;
use std::collections::HashSet;

pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Keeps tasks carrying at least one of the selected tags.
///
/// An empty selection matches every task.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    selected: HashSet<String>,
}

impl TagFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl TaskFilter for TagFilter {
    fn matches(&self, task: &Task) -> bool {
        self.selected.is_empty() || task.tags.iter().any(|t| self.selected.contains(t))
    }
}

/// Combine multiple filters with AND logic.
#[derive(Default)]
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.filters.iter().all(|f| f.matches(task))
    }
}
