use super::{edit_task, Command};
use crate::{Board, Direction, ListId, Task, TaskId, TaskUpdate};

/// Append a task to the end of a list
pub struct AddTask {
    pub list_id: ListId,
    pub task: Task,
}

impl Command for AddTask {
    fn apply(&self, board: &Board) -> Option<Board> {
        if board.contains_task(&self.task.id) {
            return None;
        }
        let index = board.list_index(&self.list_id)?;
        let list = board.lists[index].with_task_appended(self.task.clone());
        Some(board.with_list_replaced(index, list))
    }

    fn description(&self) -> String {
        format!("Add task '{}' to list {}", self.task.name, self.list_id)
    }
}

/// Merge a partial field set into a task
pub struct UpdateTask {
    pub list_id: ListId,
    pub task_id: TaskId,
    pub updates: TaskUpdate,
}

impl Command for UpdateTask {
    fn apply(&self, board: &Board) -> Option<Board> {
        if self.updates.is_empty() {
            return None;
        }
        edit_task(board, &self.list_id, &self.task_id, |task| {
            let mut task = task.clone();
            task.apply_update(self.updates.clone());
            Some(task)
        })
    }

    fn description(&self) -> String {
        format!("Update task {}", self.task_id)
    }
}

pub struct DeleteTask {
    pub list_id: ListId,
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn apply(&self, board: &Board) -> Option<Board> {
        let list_index = board.list_index(&self.list_id)?;
        let list = &board.lists[list_index];
        let task_index = list.task_index(&self.task_id)?;
        Some(board.with_list_replaced(list_index, list.with_task_removed(task_index)))
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

/// Move a task to the neighbouring stage, arriving last in that stage
pub struct MoveTask {
    pub task_id: TaskId,
    pub source_list_id: ListId,
    pub direction: Direction,
}

impl Command for MoveTask {
    fn apply(&self, board: &Board) -> Option<Board> {
        let source_index = board.list_index(&self.source_list_id)?;
        let dest_index = self.direction.step(source_index, board.lists.len())?;
        let source = &board.lists[source_index];
        let task_index = source.task_index(&self.task_id)?;
        let task = source.tasks[task_index].clone();

        let lists = board
            .lists
            .iter()
            .enumerate()
            .map(|(i, list)| {
                if i == source_index {
                    list.with_task_removed(task_index)
                } else if i == dest_index {
                    list.with_task_appended(task.clone())
                } else {
                    list.clone()
                }
            })
            .collect();
        Some(Board::new(lists))
    }

    fn description(&self) -> String {
        format!(
            "Move task {} {} from list {}",
            self.task_id, self.direction, self.source_list_id
        )
    }
}
