use super::validation::validate_shape;
use crate::Board;
use taskboard_core::{BoardError, BoardResult};

/// Reads boards back from snapshot format.
pub struct SnapshotImporter;

impl SnapshotImporter {
    /// Parse and validate snapshot text.
    ///
    /// Rejects malformed JSON, any deviation from the snapshot shape, and
    /// duplicate list or task ids. Nothing is partially accepted.
    pub fn from_json(json: &str) -> BoardResult<Board> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|err| {
            BoardError::Serialization(format!("Invalid JSON in snapshot: {}", err))
        })?;
        validate_shape(&value)?;

        let board: Board = serde_json::from_value(value)
            .map_err(|err| BoardError::Validation(err.to_string()))?;
        board.check_invariants()?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnapshotExporter;

    #[test]
    fn test_import_valid_snapshot() {
        let json = r#"[
            {"id": "1", "name": "Por hacer", "tasks": [
                {"id": "1718000000000", "name": "Nueva tarea", "description": "",
                 "tags": ["casa"], "dueDate": null}
            ]},
            {"id": "2", "name": "Completado", "tasks": []}
        ]"#;

        let board = SnapshotImporter::from_json(json).unwrap();
        assert_eq!(board.lists.len(), 2);
        assert_eq!(board.lists[0].tasks[0].tags, vec!["casa"]);
        assert_eq!(board.lists[1].name, "Completado");
    }

    #[test]
    fn test_import_round_trip() {
        let mut board = Board::default();
        let mut task = crate::Task::new(crate::TaskId::new("42"), "Plan sprint");
        task.description = "with the team".into();
        task.tags = vec!["work".into(), "work".into()];
        task.due_date = Some("2024-09-01T12:00:00Z".into());
        board.lists[1].tasks.push(task);

        let json = SnapshotExporter::to_json(&board).unwrap();
        assert_eq!(SnapshotImporter::from_json(&json).unwrap(), board);
    }

    #[test]
    fn test_import_invalid_json() {
        let err = SnapshotImporter::from_json("{not valid json").unwrap_err();
        assert!(matches!(err, BoardError::Serialization(_)));
    }

    #[test]
    fn test_import_wrong_shape() {
        let err = SnapshotImporter::from_json(r#"{"boards": []}"#).unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
    }

    #[test]
    fn test_import_duplicate_task_ids() {
        let json = r#"[
            {"id": "1", "name": "A", "tasks": [
                {"id": "x", "name": "a", "description": "", "tags": [], "dueDate": null}]},
            {"id": "2", "name": "B", "tasks": [
                {"id": "x", "name": "b", "description": "", "tags": [], "dueDate": null}]}
        ]"#;
        let err = SnapshotImporter::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate task id 'x'"));
    }

    #[test]
    fn test_import_ignores_unknown_fields() {
        let json = r#"[{"id": "1", "name": "A", "color": "red", "tasks": [
            {"id": "t", "name": "a", "description": "", "tags": [], "dueDate": null, "listId": "1"}]}]"#;
        let board = SnapshotImporter::from_json(json).unwrap();
        let exported = SnapshotExporter::to_json(&board).unwrap();
        assert!(!exported.contains("color"));
        assert!(!exported.contains("listId"));
    }
}
