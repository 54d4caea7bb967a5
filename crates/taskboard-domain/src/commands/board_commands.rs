use super::Command;
use crate::Board;

/// Replace the whole board, as an import does.
///
/// The incoming board must satisfy the id invariants, otherwise the command
/// does not apply.
pub struct SetBoard {
    pub board: Board,
}

impl Command for SetBoard {
    fn apply(&self, _board: &Board) -> Option<Board> {
        self.board.check_invariants().ok()?;
        Some(self.board.clone())
    }

    fn description(&self) -> String {
        format!("Replace board ({} lists)", self.board.lists.len())
    }
}
