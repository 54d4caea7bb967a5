use crate::filter::TaskFilter;
use crate::Task;

/// Case-insensitive substring search on task names.
#[derive(Debug, Clone, Default)]
pub struct NameSearch {
    query: String,
}

impl NameSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskFilter for NameSearch {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.name.to_lowercase().contains(&self.query)
    }
}
