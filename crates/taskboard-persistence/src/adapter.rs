//! Persistence Adapter.
//!
//! Mirrors the board into a durable slot and converts between boards and
//! snapshot text. Slot failures are logged and recorded in
//! [`PersistenceStatus`]; they never reach the caller and never undo an
//! in-memory change.

use serde::Serialize;
use taskboard_core::{BoardResult, LogEntry, Loggable};
use taskboard_domain::{Board, SnapshotExporter, SnapshotImporter};
use uuid::Uuid;

use crate::traits::{PersistenceMetadata, PersistenceStore};

const MAX_ERROR_LOG: usize = 50;

/// What the UI can show about the durable slot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersistenceStatus {
    pub last_saved: Option<PersistenceMetadata>,
    /// The most recent failure, cleared by the next successful save.
    pub last_error: Option<LogEntry>,
    errors: Vec<LogEntry>,
}

impl PersistenceStatus {
    pub fn is_healthy(&self) -> bool {
        self.last_error.is_none()
    }

    fn record_failure(&mut self, message: String) {
        self.add_log(message);
        self.last_error = self.last_log().cloned();
    }

    fn record_save(&mut self, metadata: PersistenceMetadata) {
        self.last_saved = Some(metadata);
        self.last_error = None;
    }
}

impl Loggable for PersistenceStatus {
    fn add_log(&mut self, message: String) {
        if self.errors.len() == MAX_ERROR_LOG {
            self.errors.remove(0);
        }
        self.errors.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.errors
    }
}

pub struct PersistenceAdapter<S> {
    store: S,
    instance_id: Uuid,
    status: PersistenceStatus,
}

impl<S: PersistenceStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            instance_id: Uuid::new_v4(),
            status: PersistenceStatus::default(),
        }
    }

    pub fn status(&self) -> &PersistenceStatus {
        &self.status
    }

    /// Reads the slot. An empty slot, or one that cannot be read or does not
    /// hold a valid snapshot, yields the default three-stage board.
    pub async fn load_or_default(&mut self) -> Board {
        if !self.store.exists().await {
            tracing::info!(
                "No board at {}, starting with default stages",
                self.store.location()
            );
            return Board::default();
        }

        let bytes = match self.store.load().await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Board::default(),
            Err(e) => {
                self.fail(format!("Failed to read {}: {}", self.store.location(), e));
                return Board::default();
            }
        };

        let parsed = std::str::from_utf8(&bytes)
            .map_err(|e| taskboard_core::BoardError::Serialization(e.to_string()))
            .and_then(SnapshotImporter::from_json);
        match parsed {
            Ok(board) => {
                tracing::info!(
                    "Loaded {} lists with {} tasks from {}",
                    board.lists.len(),
                    board.task_count(),
                    self.store.location()
                );
                board
            }
            Err(e) => {
                self.fail(format!(
                    "Ignoring unreadable board at {}: {}",
                    self.store.location(),
                    e
                ));
                Board::default()
            }
        }
    }

    /// Writes the board to the slot. Returns whether the write succeeded.
    pub async fn mirror(&mut self, board: &Board) -> bool {
        let json = match SnapshotExporter::to_json(board) {
            Ok(json) => json,
            Err(e) => {
                self.fail(format!("Failed to serialize board: {}", e));
                return false;
            }
        };

        let bytes = json.len();
        match self.store.save(json.into_bytes()).await {
            Ok(()) => {
                self.status
                    .record_save(PersistenceMetadata::new(self.instance_id, bytes));
                true
            }
            Err(e) => {
                self.fail(format!("Failed to save {}: {}", self.store.location(), e));
                false
            }
        }
    }

    /// The exact text the slot holds for `board`.
    pub fn export_snapshot(&self, board: &Board) -> BoardResult<String> {
        SnapshotExporter::to_json(board)
    }

    pub fn import_snapshot(&self, text: &str) -> BoardResult<Board> {
        SnapshotImporter::from_json(text)
    }

    fn fail(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.status.record_failure(message);
    }
}
