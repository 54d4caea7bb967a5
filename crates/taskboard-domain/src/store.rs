//! Board State Store.
//!
//! Holds the authoritative board as a shared, immutable snapshot. Each
//! successful command swaps in a freshly built board; handles returned by
//! [`BoardStore::snapshot`] keep seeing the state they were taken from.

use std::sync::Arc;
use taskboard_core::config::DEFAULT_TASK_NAME;

use crate::{Board, BoardOperations, Command};

#[derive(Debug, Clone)]
pub struct BoardStore {
    current: Arc<Board>,
    default_task_name: String,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            current: Arc::new(board),
            default_task_name: DEFAULT_TASK_NAME.to_string(),
        }
    }

    pub fn with_default_task_name(mut self, name: impl Into<String>) -> Self {
        self.default_task_name = name.into();
        self
    }

    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.current)
    }
}

impl BoardOperations for BoardStore {
    fn board(&self) -> &Board {
        &self.current
    }

    fn default_task_name(&self) -> &str {
        &self.default_task_name
    }

    fn execute(&mut self, command: &dyn Command) -> bool {
        match command.apply(&self.current) {
            Some(next) => {
                self.current = Arc::new(next);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, ListId, StageList, TaskId, TaskUpdate};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn list(id: &str) -> ListId {
        ListId::new(id)
    }

    fn ids(board: &Board) -> Vec<Vec<String>> {
        board
            .lists
            .iter()
            .map(|l| l.tasks.iter().map(|t| t.id.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_add_task_uses_default_name() {
        let mut store = BoardStore::default().with_default_task_name("Nueva tarea");
        let id = store.add_task(&list("2")).unwrap();

        let (owner, task) = store.board().find_task(&id).unwrap();
        assert_eq!(owner.id, list("2"));
        assert_eq!(task.name, "Nueva tarea");
        assert!(task.tags.is_empty());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_add_task_to_unknown_list_is_noop() {
        let mut store = BoardStore::default();
        let before = store.snapshot();
        assert_eq!(store.add_task(&list("missing")), None);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut store = BoardStore::default();
        let created: Vec<TaskId> = (0..50).filter_map(|_| store.add_task(&list("1"))).collect();
        let unique: HashSet<&TaskId> = created.iter().collect();
        assert_eq!(created.len(), 50);
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_snapshots_survive_mutation() {
        let mut store = BoardStore::default();
        let id = store.add_task(&list("1")).unwrap();
        let before = store.snapshot();

        assert!(store.move_task(&id, &list("1"), Direction::Right));

        assert_eq!(before.lists[0].tasks.len(), 1);
        assert_eq!(store.board().lists[0].tasks.len(), 0);
        assert_eq!(store.board().lists[1].tasks.len(), 1);
    }

    #[test]
    fn test_move_at_left_boundary_leaves_board_unchanged() {
        let mut store = BoardStore::default();
        let id = store.add_task(&list("1")).unwrap();
        let before = (*store.snapshot()).clone();

        assert!(!store.move_task(&id, &list("1"), Direction::Left));
        assert_eq!(*store.board(), before);
    }

    #[test]
    fn test_move_at_right_boundary_leaves_board_unchanged() {
        let mut store = BoardStore::default();
        let id = store.add_task(&list("3")).unwrap();
        let before = (*store.snapshot()).clone();

        assert!(!store.move_task(&id, &list("3"), Direction::Right));
        assert_eq!(*store.board(), before);
    }

    #[test]
    fn test_move_right_keeps_task_fields() {
        let mut store = BoardStore::default();
        let id = store.add_task(&list("1")).unwrap();
        store.update_task(
            &list("1"),
            &id,
            TaskUpdate {
                description: Some("details".into()),
                ..Default::default()
            },
        );
        store.add_tag(&list("1"), &id, "urgent");
        let moved = store.board().lists[0].tasks[0].clone();

        assert!(store.move_task(&id, &list("1"), Direction::Right));
        assert_eq!(ids(store.board()), vec![vec![], vec![id.to_string()], vec![]]);
        assert_eq!(store.board().lists[1].tasks[0], moved);
    }

    #[test]
    fn test_update_unknown_task_leaves_board_unchanged() {
        let mut store = BoardStore::default();
        store.add_task(&list("1"));
        let before = (*store.snapshot()).clone();

        assert!(!store.update_task(&list("1"), &TaskId::new("nonexistent"), TaskUpdate::name("x")));
        assert_eq!(*store.board(), before);
    }

    #[test]
    fn test_empty_update_keeps_snapshot() {
        let mut store = BoardStore::default();
        let id = store.add_task(&list("1")).unwrap();
        let before = store.snapshot();

        assert!(!store.update_task(&list("1"), &id, TaskUpdate::default()));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_delete_task_and_tags() {
        let mut store = BoardStore::default();
        let id = store.add_task(&list("1")).unwrap();

        assert!(store.add_tag(&list("1"), &id, "home"));
        assert!(!store.add_tag(&list("1"), &id, "   "));
        assert!(store.delete_tag(&list("1"), &id, "home"));
        assert!(store.board().lists[0].tasks[0].tags.is_empty());

        assert!(!store.delete_task(&list("2"), &id));
        assert!(store.delete_task(&list("1"), &id));
        assert_eq!(store.board().task_count(), 0);
    }

    #[test]
    fn test_set_board_replaces_state() {
        let mut store = BoardStore::default();
        let replacement = Board::new(vec![StageList::new("only", "Only")]);
        assert!(store.set_board(replacement.clone()));
        assert_eq!(*store.board(), replacement);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Move(usize, usize, bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..4).prop_map(Op::Add),
            (0usize..4, 0usize..8, any::<bool>()).prop_map(|(l, t, right)| Op::Move(l, t, right)),
        ]
    }

    proptest! {
        #[test]
        fn prop_task_ids_stay_unique(ops in prop::collection::vec(op(), 0..60)) {
            let mut store = BoardStore::default();
            let list_ids: Vec<ListId> = store.board().lists.iter().map(|l| l.id.clone()).collect();

            for op in ops {
                match op {
                    Op::Add(l) => {
                        // index 3 addresses a list that does not exist
                        let id = list_ids.get(l).cloned().unwrap_or_else(|| list("ghost"));
                        store.add_task(&id);
                    }
                    Op::Move(l, t, right) => {
                        let Some(source) = list_ids.get(l) else { continue };
                        let task_id = store
                            .board()
                            .list(source)
                            .and_then(|list| list.tasks.get(t))
                            .map(|task| task.id.clone());
                        if let Some(task_id) = task_id {
                            let direction = if right { Direction::Right } else { Direction::Left };
                            store.move_task(&task_id, source, direction);
                        }
                    }
                }
                prop_assert!(store.board().check_invariants().is_ok());
            }
        }
    }
}
