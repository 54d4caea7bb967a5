//! Derived views.
//!
//! Pure read-side computations over a board snapshot. Nothing here is
//! cached; callers recompute after every change.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::filter::{CompositeFilter, TagFilter, TaskFilter};
use crate::{Board, ListId, NameSearch, Task};

/// A task together with the list that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedTask<'a> {
    pub list_id: &'a ListId,
    #[serde(flatten)]
    pub task: &'a Task,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskCount {
    pub list_id: ListId,
    pub name: String,
    pub tasks: usize,
}

/// Finished versus unfinished work, for the completion chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueTask<'a> {
    pub list_id: &'a ListId,
    #[serde(flatten)]
    pub task: &'a Task,
    pub due_at: DateTime<Utc>,
    pub is_overdue: bool,
}

/// Tasks whose name contains `search` (case-insensitive) and which carry at
/// least one of `selected_tags` when any are selected. Board order.
pub fn filtered_tasks<'a, S: AsRef<str>>(
    board: &'a Board,
    search: &str,
    selected_tags: &[S],
) -> Vec<ListedTask<'a>> {
    let filter = CompositeFilter::new()
        .with_filter(Box::new(NameSearch::new(search)))
        .with_filter(Box::new(TagFilter::new(
            selected_tags.iter().map(|t| t.as_ref().to_string()),
        )));

    board
        .tasks()
        .filter(|(_, task)| filter.matches(task))
        .map(|(list, task)| ListedTask {
            list_id: &list.id,
            task,
        })
        .collect()
}

/// Every distinct tag on the board, in the order first seen.
pub fn all_tags(board: &Board) -> Vec<String> {
    let mut seen = HashSet::new();
    board
        .tasks()
        .flat_map(|(_, task)| task.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

pub fn task_counts_by_list(board: &Board) -> Vec<ListTaskCount> {
    board
        .lists
        .iter()
        .map(|list| ListTaskCount {
            list_id: list.id.clone(),
            name: list.name.clone(),
            tasks: list.tasks.len(),
        })
        .collect()
}

/// Counts the tasks in the first list named `done_list_name` as completed
/// and the tasks of every differently named list as pending.
///
/// The terminal stage is matched by display name, so renaming it changes
/// which tasks count as done.
pub fn completion_summary(board: &Board, done_list_name: &str) -> CompletionSummary {
    let completed = board
        .lists
        .iter()
        .find(|l| l.name == done_list_name)
        .map_or(0, |l| l.tasks.len());
    let pending = board
        .lists
        .iter()
        .filter(|l| l.name != done_list_name)
        .map(|l| l.tasks.len())
        .sum();
    CompletionSummary { completed, pending }
}

/// Tasks with a parseable due date, earliest first, flagged overdue when the
/// date is before `now`. Tasks due at the same instant keep board order.
pub fn due_sorted(board: &Board, now: DateTime<Utc>) -> Vec<DueTask<'_>> {
    let mut due: Vec<DueTask<'_>> = board
        .tasks()
        .filter_map(|(list, task)| {
            task.due_at().map(|due_at| DueTask {
                list_id: &list.id,
                task,
                due_at,
                is_overdue: due_at < now,
            })
        })
        .collect();
    due.sort_by_key(|d| d.due_at);
    due
}
