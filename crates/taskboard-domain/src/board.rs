use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use taskboard_core::{BoardError, BoardResult};

use crate::{ListId, StageList, Task, TaskId};

pub const DEFAULT_LISTS: [(&str, &str); 3] = [("1", "To do"), ("2", "In progress"), ("3", "Done")];

/// Which neighbouring stage a task moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Index of the neighbouring stage, if there is one.
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Self::Left => index.checked_sub(1)?,
            Self::Right => index + 1,
        };
        (target < len).then_some(target)
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(BoardError::Validation(format!(
                "unknown direction '{}', expected 'left' or 'right'",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// The ordered stage lists, left to right. Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub lists: Vec<StageList>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            lists: DEFAULT_LISTS
                .iter()
                .map(|(id, name)| StageList::new(*id, *name))
                .collect(),
        }
    }
}

impl Board {
    pub fn new(lists: Vec<StageList>) -> Self {
        Self { lists }
    }

    pub fn list_index(&self, list_id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == list_id)
    }

    pub fn list(&self, list_id: &ListId) -> Option<&StageList> {
        self.lists.iter().find(|l| &l.id == list_id)
    }

    /// Finds a task anywhere on the board together with the list holding it.
    pub fn find_task(&self, task_id: &TaskId) -> Option<(&StageList, &Task)> {
        self.lists
            .iter()
            .find_map(|list| list.task(task_id).map(|task| (list, task)))
    }

    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.find_task(task_id).is_some()
    }

    pub fn tasks(&self) -> impl Iterator<Item = (&StageList, &Task)> {
        self.lists
            .iter()
            .flat_map(|list| list.tasks.iter().map(move |task| (list, task)))
    }

    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|l| l.tasks.len()).sum()
    }

    /// Allocates a timestamp-derived id that is not yet used on this board.
    ///
    /// Starts from `now_millis` and counts upward past collisions, so tasks
    /// created within the same millisecond still get distinct ids.
    pub fn next_task_id(&self, now_millis: i64) -> TaskId {
        let used: HashSet<&str> = self.tasks().map(|(_, t)| t.id.as_str()).collect();
        let mut candidate = now_millis;
        loop {
            let id = candidate.to_string();
            if !used.contains(id.as_str()) {
                return TaskId::new(id);
            }
            candidate += 1;
        }
    }

    /// Checks the id invariants: list ids unique, task ids unique board-wide.
    pub fn check_invariants(&self) -> BoardResult<()> {
        let mut list_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                return Err(BoardError::Validation(format!(
                    "duplicate list id '{}'",
                    list.id
                )));
            }
            for task in &list.tasks {
                if !task_ids.insert(&task.id) {
                    return Err(BoardError::Validation(format!(
                        "duplicate task id '{}'",
                        task.id
                    )));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn with_list_replaced(&self, index: usize, list: StageList) -> Self {
        let mut lists = Vec::with_capacity(self.lists.len());
        lists.extend_from_slice(&self.lists[..index]);
        lists.push(list);
        lists.extend_from_slice(&self.lists[index + 1..]);
        Self { lists }
    }
}
