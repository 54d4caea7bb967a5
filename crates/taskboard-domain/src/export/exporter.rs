use crate::Board;
use taskboard_core::{BoardError, BoardResult};

/// Renders boards in snapshot format.
pub struct SnapshotExporter;

impl SnapshotExporter {
    /// Serialize a board to pretty-printed snapshot JSON.
    pub fn to_json(board: &Board) -> BoardResult<String> {
        serde_json::to_string_pretty(board).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    pub fn to_file(board: &Board, path: &std::path::Path) -> BoardResult<()> {
        let json = Self::to_json(board)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
