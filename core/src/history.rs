//! Linear undo/redo over board snapshots.

use board::Board;

/// Two-stack snapshot history. `push` records the pre-move state and
/// clears the redo stack, so redo only replays moves undone on the current
/// line; there is no branching history.
#[derive(Default)]
pub struct History {
    undo_stack: Vec<Board>,
    redo_stack: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, board: &Board) {
        self.undo_stack.push(*board);
        self.redo_stack.clear();
    }

    /// Swaps the live board for the previous snapshot. Returns false, and
    /// leaves the board untouched, when there is nothing to undo.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(*board);
        *board = previous;
        true
    }

    /// Swaps the live board for the snapshot undone last. Returns false,
    /// and leaves the board untouched, when there is nothing to redo.
    pub fn redo(&mut self, board: &mut Board) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(*board);
        *board = next;
        true
    }
}
