use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_core::BoardResult;
use uuid::Uuid;

/// Record of one successful write to the durable slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Process-local id of the writer
    pub instance_id: Uuid,
    pub saved_at: DateTime<Utc>,
    /// Size of the serialized board
    pub bytes: usize,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid, bytes: usize) -> Self {
        Self {
            instance_id,
            saved_at: Utc::now(),
            bytes,
        }
    }
}

/// A single named key-value slot holding the latest serialized board.
///
/// Implementations decide where the bytes live (a file, memory); they do not
/// interpret them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Replace the slot contents
    async fn save(&self, data: Vec<u8>) -> BoardResult<()>;

    /// Read the slot, `None` when nothing has been written yet
    async fn load(&self) -> BoardResult<Option<Vec<u8>>>;

    async fn exists(&self) -> bool;

    /// Where the slot lives, for log and status messages
    fn location(&self) -> String;
}
