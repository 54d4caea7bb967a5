use crate::{Board, ListId, Task, TaskId};

pub mod board_commands;
pub mod tag_commands;
pub mod task_commands;

pub use board_commands::*;
pub use tag_commands::*;
pub use task_commands::*;

/// A board mutation.
///
/// Commands never touch the board they are given. They build the next
/// snapshot, or return `None` when they do not apply (unknown list or task,
/// move off the edge of the board, rejected input). `None` means "state
/// unchanged" and is not an error.
pub trait Command: Send + Sync {
    fn apply(&self, board: &Board) -> Option<Board>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Rebuilds `board` with one task replaced by `edit`'s result, copying only
/// the list that holds it.
pub(crate) fn edit_task(
    board: &Board,
    list_id: &ListId,
    task_id: &TaskId,
    edit: impl FnOnce(&Task) -> Option<Task>,
) -> Option<Board> {
    let list_index = board.list_index(list_id)?;
    let list = &board.lists[list_index];
    let task_index = list.task_index(task_id)?;
    let edited = edit(&list.tasks[task_index])?;
    Some(board.with_list_replaced(list_index, list.with_task_replaced(task_index, edited)))
}
