use crate::store::atomic_writer::AtomicWriter;
use crate::traits::PersistenceStore;
use std::path::{Path, PathBuf};
use taskboard_core::{AppConfig, BoardResult};

/// File-backed durable slot: `<dir>/<slot name>.json`
#[derive(Debug, Clone)]
pub struct JsonSlotStore {
    path: PathBuf,
}

impl JsonSlotStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn in_dir(dir: impl AsRef<Path>, slot_name: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", slot_name)))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.slot_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonSlotStore {
    async fn save(&self, data: Vec<u8>) -> BoardResult<()> {
        AtomicWriter::write_atomic(&self.path, &data).await?;
        tracing::info!("Saved {} bytes to {}", data.len(), self.path.display());
        Ok(())
    }

    async fn load(&self) -> BoardResult<Option<Vec<u8>>> {
        let data = AtomicWriter::read_if_exists(&self.path).await?;
        if let Some(bytes) = &data {
            tracing::info!("Loaded {} bytes from {}", bytes.len(), self.path.display());
        }
        Ok(data)
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
