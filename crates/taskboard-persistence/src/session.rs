use std::sync::Arc;
use taskboard_core::{AppConfig, BoardResult};
use taskboard_domain::commands::SetBoard;
use taskboard_domain::{Board, BoardOperations, BoardStore, Command};

use crate::adapter::{PersistenceAdapter, PersistenceStatus};
use crate::traits::PersistenceStore;

/// A board store wired to its durable slot.
///
/// Every change to the board is mirrored to the slot right after it is made.
/// Commands that leave the board unchanged do not touch the slot.
pub struct BoardSession<S> {
    store: BoardStore,
    adapter: PersistenceAdapter<S>,
    import_error: Option<String>,
}

impl<S: PersistenceStore> BoardSession<S> {
    /// Loads the board from the slot, falling back to the default stages.
    pub async fn open(persistence: S, config: &AppConfig) -> Self {
        let mut adapter = PersistenceAdapter::new(persistence);
        let board = adapter.load_or_default().await;
        let store =
            BoardStore::new(board).with_default_task_name(config.effective_default_task_name());
        Self {
            store,
            adapter,
            import_error: None,
        }
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn snapshot(&self) -> Arc<Board> {
        self.store.snapshot()
    }

    pub fn status(&self) -> &PersistenceStatus {
        self.adapter.status()
    }

    pub async fn execute(&mut self, command: &dyn Command) -> bool {
        let changed = self.store.execute(command);
        self.after_change(changed, &command.description()).await;
        changed
    }

    /// Runs any board operation and mirrors the result if the board changed.
    ///
    /// ```ignore
    /// let id = session.apply(|store| store.add_task(&list_id)).await;
    /// ```
    pub async fn apply<R>(&mut self, operation: impl FnOnce(&mut BoardStore) -> R) -> R {
        let before = self.store.snapshot();
        let result = operation(&mut self.store);
        let changed = !Arc::ptr_eq(&before, &self.store.snapshot());
        self.after_change(changed, "board operation").await;
        result
    }

    pub fn export_snapshot(&self) -> BoardResult<String> {
        self.adapter.export_snapshot(self.store.board())
    }

    /// Replaces the board with the parsed snapshot. On failure the board is
    /// left as it was and the message is kept as [`Self::import_error`] until
    /// dismissed or until a later import succeeds.
    pub async fn import_snapshot(&mut self, text: &str) -> BoardResult<()> {
        match self.adapter.import_snapshot(text) {
            Ok(board) => {
                self.import_error = None;
                self.execute(&SetBoard { board }).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Import rejected: {}", e);
                self.import_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn import_error(&self) -> Option<&str> {
        self.import_error.as_deref()
    }

    pub fn dismiss_import_error(&mut self) {
        self.import_error = None;
    }

    async fn after_change(&mut self, changed: bool, what: &str) {
        if changed {
            tracing::debug!("{} changed the board, mirroring", what);
            self.adapter.mirror(self.store.board()).await;
        } else {
            tracing::debug!("{} left the board unchanged", what);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use taskboard_domain::commands::AddTask;
    use taskboard_domain::{Direction, ListId, SnapshotImporter, Task, TaskId};

    async fn open(store: &MemoryStore) -> BoardSession<MemoryStore> {
        BoardSession::open(store.clone(), &AppConfig::default()).await
    }

    fn slot_board(store: &MemoryStore) -> Option<Board> {
        store
            .contents()
            .map(|bytes| SnapshotImporter::from_json(std::str::from_utf8(&bytes).unwrap()).unwrap())
    }

    #[tokio::test]
    async fn test_every_change_is_mirrored() {
        let store = MemoryStore::new();
        let mut session = open(&store).await;
        assert!(store.contents().is_none());

        let todo = ListId::new("1");
        let id = session.apply(|s| s.add_task(&todo)).await.unwrap();
        assert_eq!(slot_board(&store).as_ref(), Some(session.board()));

        session.apply(|s| s.move_task(&id, &todo, Direction::Right)).await;
        assert_eq!(slot_board(&store).unwrap().lists[1].tasks[0].id, id);
    }

    #[tokio::test]
    async fn test_noop_does_not_write() {
        let store = MemoryStore::new();
        let mut session = open(&store).await;

        let moved = session
            .apply(|s| s.move_task(&TaskId::new("ghost"), &ListId::new("1"), Direction::Right))
            .await;
        assert!(!moved);
        assert!(store.contents().is_none());
    }

    #[tokio::test]
    async fn test_reopen_restores_board() {
        let store = MemoryStore::new();
        let mut session = open(&store).await;
        session
            .execute(&AddTask {
                list_id: ListId::new("2"),
                task: Task::new(TaskId::new("t1"), "Survive restart"),
            })
            .await;

        let reopened = open(&store).await;
        assert_eq!(reopened.board(), session.board());
    }

    #[tokio::test]
    async fn test_export_import_round_trip() {
        let mut session = open(&MemoryStore::new()).await;
        let todo = ListId::new("1");
        let id = session.apply(|s| s.add_task(&todo)).await.unwrap();
        session.apply(|s| s.add_tag(&todo, &id, "urgent")).await;
        let exported = session.export_snapshot().unwrap();
        let at_export = session.board().clone();

        session.apply(|s| s.delete_task(&todo, &id)).await;
        session.import_snapshot(&exported).await.unwrap();

        assert_eq!(*session.board(), at_export);
        assert!(session.import_error().is_none());
    }

    #[tokio::test]
    async fn test_failed_import_keeps_board_and_reports() {
        let store = MemoryStore::new();
        let mut session = open(&store).await;
        let id = session.apply(|s| s.add_task(&ListId::new("1"))).await.unwrap();
        let before = session.board().clone();
        let slot_before = store.contents();

        assert!(session.import_snapshot("{not valid json").await.is_err());

        assert_eq!(*session.board(), before);
        assert_eq!(store.contents(), slot_before);
        assert!(session.board().contains_task(&id));
        let message = session.import_error().unwrap().to_string();
        assert!(message.contains("Invalid JSON"));

        // the message stays until dismissed
        session.apply(|s| s.add_task(&ListId::new("2"))).await;
        assert_eq!(session.import_error(), Some(message.as_str()));
        session.dismiss_import_error();
        assert!(session.import_error().is_none());
    }

    #[tokio::test]
    async fn test_open_uses_configured_task_name() {
        let config = AppConfig {
            default_task_name: Some("Nueva tarea".to_string()),
            ..Default::default()
        };
        let mut session = BoardSession::open(MemoryStore::new(), &config).await;
        let id = session.apply(|s| s.add_task(&ListId::new("1"))).await.unwrap();
        assert_eq!(session.board().find_task(&id).unwrap().1.name, "Nueva tarea");
    }
}
