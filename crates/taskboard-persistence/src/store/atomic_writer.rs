use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use taskboard_core::{BoardError, BoardResult};
use tokio::fs;

/// Whole-file writes that never leave a half-written slot behind.
///
/// Data goes to a temporary file next to the target, is synced, and then
/// renamed over it, so readers see either the previous or the new contents.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).await?;

        let target = path.to_path_buf();
        let bytes = data.to_vec();
        tokio::task::spawn_blocking(move || -> BoardResult<()> {
            let mut temp = tempfile::NamedTempFile::new_in(&parent)?;
            temp.write_all(&bytes)?;
            temp.as_file().sync_all()?;
            temp.persist(&target).map_err(|e| BoardError::Io(e.error))?;
            Ok(())
        })
        .await
        .map_err(|e| BoardError::Internal(format!("slot write task failed: {}", e)))??;

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Reads the whole file, or `None` if it does not exist.
    pub async fn read_if_exists(path: &Path) -> BoardResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
