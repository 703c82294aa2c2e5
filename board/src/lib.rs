//! Board representation and rules for six-pit Kalah.
//!
//! The board is a fixed 14-slot array: pits 0-5 and store 6 belong to
//! player A, pits 7-12 and store 13 to player B. Everything here is cheap
//! to copy so the search layer can clone one board per explored node.

mod rules;
mod state;
mod zobrist;

pub use rules::{
    is_store, opposite, Player, A_STORE, B_STORE, MAX_PIT_STONES, PITS_PER_SIDE, TOTAL_PITS,
};
pub use state::{Board, EndReason, MoveError, MoveOutcome};
pub use zobrist::Zobrist;
