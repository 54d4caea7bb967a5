use crate::traits::PersistenceStore;
use parking_lot::Mutex;
use std::sync::Arc;
use taskboard_core::BoardResult;

/// In-process slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot already holds `data`.
    pub fn with_contents(data: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(data.into()))),
        }
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.slot.lock().clone()
    }
}

#[async_trait::async_trait]
impl PersistenceStore for MemoryStore {
    async fn save(&self, data: Vec<u8>) -> BoardResult<()> {
        *self.slot.lock() = Some(data);
        Ok(())
    }

    async fn load(&self) -> BoardResult<Option<Vec<u8>>> {
        Ok(self.slot.lock().clone())
    }

    async fn exists(&self) -> bool {
        self.slot.lock().is_some()
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
