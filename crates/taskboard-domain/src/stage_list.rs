use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ListId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One workflow stage: a named, ordered bucket of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageList {
    pub id: ListId,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl StageList {
    pub fn new(id: impl Into<ListId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn task_index(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == task_id)
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }

    pub(crate) fn with_task_appended(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend_from_slice(&self.tasks);
        tasks.push(task);
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            tasks,
        }
    }

    pub(crate) fn with_task_replaced(&self, index: usize, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len());
        tasks.extend_from_slice(&self.tasks[..index]);
        tasks.push(task);
        tasks.extend_from_slice(&self.tasks[index + 1..]);
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            tasks,
        }
    }

    pub(crate) fn with_task_removed(&self, index: usize) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len().saturating_sub(1));
        tasks.extend_from_slice(&self.tasks[..index]);
        tasks.extend_from_slice(&self.tasks[index + 1..]);
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            tasks,
        }
    }
}
