use super::{edit_task, Command};
use crate::{Board, ListId, TaskId};

/// Append a tag to a task. Blank tags are rejected.
pub struct AddTag {
    pub list_id: ListId,
    pub task_id: TaskId,
    pub tag: String,
}

impl Command for AddTag {
    fn apply(&self, board: &Board) -> Option<Board> {
        let tag = self.tag.trim();
        if tag.is_empty() {
            return None;
        }
        edit_task(board, &self.list_id, &self.task_id, |task| {
            let mut task = task.clone();
            task.tags.push(tag.to_string());
            Some(task)
        })
    }

    fn description(&self) -> String {
        format!("Tag task {} with '{}'", self.task_id, self.tag.trim())
    }
}

/// Remove every occurrence of a tag from a task
pub struct DeleteTag {
    pub list_id: ListId,
    pub task_id: TaskId,
    pub tag: String,
}

impl Command for DeleteTag {
    fn apply(&self, board: &Board) -> Option<Board> {
        edit_task(board, &self.list_id, &self.task_id, |task| {
            if !task.has_tag(&self.tag) {
                return None;
            }
            let mut task = task.clone();
            task.tags.retain(|t| t != &self.tag);
            Some(task)
        })
    }

    fn description(&self) -> String {
        format!("Remove tag '{}' from task {}", self.tag, self.task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Task;
    use std::collections::HashSet;

    fn board() -> Board {
        let mut board = Board::default();
        let mut task = Task::new(TaskId::new("t1"), "Task");
        task.tags = vec!["work".to_string()];
        board.lists[0].tasks.push(task);
        board
    }

    fn tags(board: &Board) -> Vec<String> {
        board.lists[0].tasks[0].tags.clone()
    }

    #[test]
    fn test_add_tag_trims() {
        let cmd = AddTag {
            list_id: ListId::new("1"),
            task_id: TaskId::new("t1"),
            tag: "  urgent ".to_string(),
        };
        let next = cmd.apply(&board()).unwrap();
        assert_eq!(tags(&next), vec!["work", "urgent"]);
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        for blank in ["", "   ", "\t\n"] {
            let cmd = AddTag {
                list_id: ListId::new("1"),
                task_id: TaskId::new("t1"),
                tag: blank.to_string(),
            };
            assert!(cmd.apply(&board()).is_none());
        }
    }

    #[test]
    fn test_delete_tag_removes_all_occurrences() {
        let mut board = board();
        board.lists[0].tasks[0].tags = vec!["a".into(), "b".into(), "a".into()];
        let cmd = DeleteTag {
            list_id: ListId::new("1"),
            task_id: TaskId::new("t1"),
            tag: "a".to_string(),
        };
        let next = cmd.apply(&board).unwrap();
        assert_eq!(tags(&next), vec!["b"]);
    }

    #[test]
    fn test_delete_missing_tag_is_noop() {
        let cmd = DeleteTag {
            list_id: ListId::new("1"),
            task_id: TaskId::new("t1"),
            tag: "nope".to_string(),
        };
        assert!(cmd.apply(&board()).is_none());
    }

    #[test]
    fn test_tag_round_trip_restores_set() {
        let original = board();
        let added = AddTag {
            list_id: ListId::new("1"),
            task_id: TaskId::new("t1"),
            tag: "x".to_string(),
        }
        .apply(&original)
        .unwrap();
        let removed = DeleteTag {
            list_id: ListId::new("1"),
            task_id: TaskId::new("t1"),
            tag: "x".to_string(),
        }
        .apply(&added)
        .unwrap();

        let before: HashSet<String> = tags(&original).into_iter().collect();
        let after: HashSet<String> = tags(&removed).into_iter().collect();
        assert_eq!(before, after);
    }
}
