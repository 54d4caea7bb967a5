use chrono::Utc;

use crate::commands::{AddTag, AddTask, Command, DeleteTag, DeleteTask, MoveTask, SetBoard, UpdateTask};
use crate::{Board, Direction, ListId, Task, TaskId, TaskUpdate};

/// The board mutation surface a front end drives.
///
/// Every operation is total: an unknown list or task, or a move past the
/// first or last stage, leaves the board as it was and reports `false`
/// (or `None`). Implementors only supply command execution; the named
/// operations are built on top of it.
pub trait BoardOperations {
    fn board(&self) -> &Board;

    fn default_task_name(&self) -> &str;

    /// Runs a command, returning whether the board changed.
    fn execute(&mut self, command: &dyn Command) -> bool;

    /// Appends a fresh task to `list_id` and returns its id.
    fn add_task(&mut self, list_id: &ListId) -> Option<TaskId> {
        let task_id = self.board().next_task_id(Utc::now().timestamp_millis());
        let cmd = AddTask {
            list_id: list_id.clone(),
            task: Task::new(task_id.clone(), self.default_task_name()),
        };
        self.execute(&cmd).then_some(task_id)
    }

    fn update_task(&mut self, list_id: &ListId, task_id: &TaskId, updates: TaskUpdate) -> bool {
        self.execute(&UpdateTask {
            list_id: list_id.clone(),
            task_id: task_id.clone(),
            updates,
        })
    }

    fn delete_task(&mut self, list_id: &ListId, task_id: &TaskId) -> bool {
        self.execute(&DeleteTask {
            list_id: list_id.clone(),
            task_id: task_id.clone(),
        })
    }

    fn add_tag(&mut self, list_id: &ListId, task_id: &TaskId, tag: &str) -> bool {
        self.execute(&AddTag {
            list_id: list_id.clone(),
            task_id: task_id.clone(),
            tag: tag.to_string(),
        })
    }

    fn delete_tag(&mut self, list_id: &ListId, task_id: &TaskId, tag: &str) -> bool {
        self.execute(&DeleteTag {
            list_id: list_id.clone(),
            task_id: task_id.clone(),
            tag: tag.to_string(),
        })
    }

    fn move_task(&mut self, task_id: &TaskId, source_list_id: &ListId, direction: Direction) -> bool {
        self.execute(&MoveTask {
            task_id: task_id.clone(),
            source_list_id: source_list_id.clone(),
            direction,
        })
    }

    fn set_board(&mut self, board: Board) -> bool {
        self.execute(&SetBoard { board })
    }
}
