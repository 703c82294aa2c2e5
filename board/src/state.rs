//! Board state and the move-application state machine.

use std::error::Error;
use std::fmt;

use arrayvec::ArrayVec;

use crate::rules::{is_store, opposite, Player, PITS_PER_SIDE, TOTAL_PITS};

/// Why a finished game ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EndReason {
    /// One side ran out of stones; every remaining stone was swept into
    /// its own side's store.
    SideEmpty,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::SideEmpty => write!(f, "side_empty"),
        }
    }
}

/// What a successfully applied move did.
#[derive(Clone, Copy, Debug)]
pub struct MoveOutcome {
    /// The last stone landed in the mover's own store; they keep the turn.
    pub extra_turn: bool,
    /// Set when the move ended the game.
    pub end: Option<EndReason>,
}

/// A rejected `apply_move` call. The board is left untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveError {
    /// The chosen pit is not on the current player's side. This is a
    /// caller bug, not a user mistake.
    WrongSide { pit: usize, player: Player },
    /// The chosen pit holds no stones. Expected user input error; the
    /// caller should report it and re-prompt.
    EmptyPit { pit: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::WrongSide { pit, player } => {
                write!(f, "pit {pit} is not on player {player}'s side")
            }
            MoveError::EmptyPit { pit } => write!(f, "illegal move: pit {pit} is empty"),
        }
    }
}

impl Error for MoveError {}

/// A full game position: 12 pits, 2 stores and the side to move.
///
/// A fixed-size value type. Copying one is 15 machine words, so the search
/// layer takes an independent copy per explored node instead of sharing
/// mutable state across branches.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    pits: [u32; TOTAL_PITS],
    current: Player,
}

impl Board {
    /// Fresh board: `start_stones` in every pit, empty stores, A to move.
    pub fn new(start_stones: u32) -> Self {
        let mut pits = [start_stones; TOTAL_PITS];
        pits[Player::A.own_store()] = 0;
        pits[Player::B.own_store()] = 0;
        Board {
            pits,
            current: Player::A,
        }
    }

    /// Builds an arbitrary position, for fixtures and previews.
    pub fn from_parts(pits: [u32; TOTAL_PITS], current: Player) -> Self {
        Board { pits, current }
    }

    #[inline(always)]
    pub fn current(&self) -> Player {
        self.current
    }

    #[inline(always)]
    pub fn stones(&self, index: usize) -> u32 {
        self.pits[index]
    }

    #[inline(always)]
    pub fn pits(&self) -> &[u32; TOTAL_PITS] {
        &self.pits
    }

    /// Stones banked in `player`'s store.
    #[inline(always)]
    pub fn score(&self, player: Player) -> u32 {
        self.pits[player.own_store()]
    }

    /// Non-empty pits on the current player's side, in pit order.
    pub fn legal_moves(&self) -> ArrayVec<usize, PITS_PER_SIDE> {
        self.current
            .pit_range()
            .filter(|&i| self.pits[i] > 0)
            .collect()
    }

    pub fn side_empty(&self, player: Player) -> bool {
        player.pit_range().all(|i| self.pits[i] == 0)
    }

    /// True once every non-store pit is empty, regardless of whose turn it
    /// is. The search layer uses this as its leaf test.
    pub fn terminal(&self) -> bool {
        (0..TOTAL_PITS)
            .filter(|&i| !is_store(i))
            .all(|i| self.pits[i] == 0)
    }

    /// Applies one move for the side to move.
    ///
    /// Lifts every stone out of `pit` and sows them counter-clockwise, one
    /// per slot, skipping the opponent's store entirely. The last stone
    /// decides extra turns and captures; if either side is empty afterwards
    /// both sides sweep their remaining stones into their own stores and
    /// the game ends. The turn advances only when the mover earned no
    /// extra turn and the game continues.
    ///
    /// Validation failures return before any mutation.
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        let player = self.current;
        if !player.pit_range().contains(&pit) {
            return Err(MoveError::WrongSide { pit, player });
        }
        let mut stones = self.pits[pit];
        if stones == 0 {
            return Err(MoveError::EmptyPit { pit });
        }
        self.pits[pit] = 0;

        let mut idx = pit;
        while stones > 0 {
            idx = (idx + 1) % TOTAL_PITS;
            if idx == player.opp_store() {
                continue;
            }
            self.pits[idx] += 1;
            stones -= 1;
        }

        let extra_turn = idx == player.own_store();

        // Last stone landed alone in one of the mover's pits: capture it
        // together with the opposite pit, unless the opposite pit is empty.
        if !extra_turn && player.pit_range().contains(&idx) && self.pits[idx] == 1 {
            let opp = opposite(idx);
            let captured = self.pits[opp];
            if captured > 0 {
                self.pits[player.own_store()] += captured + 1;
                self.pits[idx] = 0;
                self.pits[opp] = 0;
            }
        }

        let mut end = None;
        if self.side_empty(Player::A) || self.side_empty(Player::B) {
            for side in [Player::A, Player::B] {
                let store = side.own_store();
                for i in side.pit_range() {
                    self.pits[store] += self.pits[i];
                    self.pits[i] = 0;
                }
            }
            end = Some(EndReason::SideEmpty);
        }

        if !extra_turn && end.is_none() {
            self.current = player.other();
        }
        Ok(MoveOutcome { extra_turn, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{A_STORE, B_STORE};

    fn total(board: &Board) -> u32 {
        board.pits().iter().sum()
    }

    #[test]
    fn new_board_invariants() {
        let b = Board::new(4);
        assert_eq!(total(&b), 48);
        assert_eq!(b.score(Player::A), 0);
        assert_eq!(b.score(Player::B), 0);
        assert_eq!(b.current(), Player::A);
    }

    #[test]
    fn legal_moves_at_start() {
        let b = Board::new(4);
        assert_eq!(b.legal_moves().as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn sowing_skips_opponent_store() {
        // 9 stones from pit 5 wrap past B's store without dropping into it.
        let mut pits = [0u32; TOTAL_PITS];
        pits[5] = 9;
        let mut b = Board::from_parts(pits, Player::A);
        b.apply_move(5).unwrap();
        assert_eq!(b.stones(B_STORE), 0);
        // One stone in each of 7..=12, skip 13, then pits 0 and 1. The last
        // stone lands alone in pit 1 and captures opposite(1) == 11, which
        // was sown on the way past.
        assert_eq!(b.stones(A_STORE), 3);
        assert_eq!(b.stones(12), 1);
        assert_eq!(b.stones(0), 1);
        assert_eq!(b.stones(1), 0);
        assert_eq!(b.stones(11), 0);
        assert_eq!(total(&b), 9);
    }

    #[test]
    fn extra_turn_keeps_the_mover() {
        let mut b = Board::new(4);
        let outcome = b.apply_move(2).unwrap();
        assert!(outcome.extra_turn);
        assert!(outcome.end.is_none());
        assert_eq!(b.current(), Player::A);
        assert_eq!(b.stones(A_STORE), 1);
        assert_eq!(
            b.pits(),
            &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]
        );
    }

    #[test]
    fn single_stone_capture() {
        let pits = [0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0];
        let mut b = Board::from_parts(pits, Player::A);
        let outcome = b.apply_move(2).unwrap();
        assert!(!outcome.extra_turn);
        // Pit 2's stone lands in the empty pit 3; opposite(3) == 9 holds one
        // stone, so both go to A's store. That empties A's side and sweeps.
        assert_eq!(b.score(Player::A), 2);
        assert_eq!(outcome.end, Some(EndReason::SideEmpty));
        assert!(b.terminal());
    }

    #[test]
    fn no_capture_into_occupied_pit() {
        let mut pits = [0u32; TOTAL_PITS];
        pits[0] = 2;
        pits[2] = 1;
        pits[10] = 5;
        let mut b = Board::from_parts(pits, Player::A);
        b.apply_move(0).unwrap();
        // Lands in pit 2 which already held a stone: no capture.
        assert_eq!(b.stones(2), 2);
        assert_eq!(b.stones(10), 5);
        assert_eq!(b.score(Player::A), 0);
    }

    #[test]
    fn no_capture_when_opposite_is_empty() {
        let mut pits = [0u32; TOTAL_PITS];
        pits[0] = 1;
        pits[9] = 3; // keeps B's side non-empty
        let mut b = Board::from_parts(pits, Player::A);
        b.apply_move(0).unwrap();
        // Lands alone in pit 1, but opposite(1) == 11 is empty.
        assert_eq!(b.stones(1), 1);
        assert_eq!(b.score(Player::A), 0);
    }

    #[test]
    fn terminal_sweep_collects_both_sides() {
        let mut pits = [0u32; TOTAL_PITS];
        pits[5] = 1;
        pits[7] = 2;
        pits[9] = 3;
        let mut b = Board::from_parts(pits, Player::A);
        let outcome = b.apply_move(5).unwrap();
        assert_eq!(outcome.end, Some(EndReason::SideEmpty));
        assert!(b.terminal());
        assert_eq!(b.score(Player::A), 1);
        assert_eq!(b.score(Player::B), 5);
        assert_eq!(outcome.end.unwrap().to_string(), "side_empty");
    }

    #[test]
    fn wrong_side_is_rejected_without_mutation() {
        let mut b = Board::new(4);
        let before = b;
        let err = b.apply_move(9).unwrap_err();
        assert_eq!(
            err,
            MoveError::WrongSide {
                pit: 9,
                player: Player::A
            }
        );
        assert_eq!(b, before);
    }

    #[test]
    fn empty_pit_is_rejected_without_mutation() {
        let mut pits = [4u32; TOTAL_PITS];
        pits[A_STORE] = 0;
        pits[B_STORE] = 0;
        pits[3] = 0;
        let mut b = Board::from_parts(pits, Player::A);
        let before = b;
        let err = b.apply_move(3).unwrap_err();
        assert_eq!(err, MoveError::EmptyPit { pit: 3 });
        assert_eq!(b, before);
    }

    #[test]
    fn stones_are_conserved_through_a_full_game() {
        // Always playing the lowest legal pit finishes a default game in
        // exactly 10 moves with A on 12 and B on 36.
        let mut b = Board::new(4);
        let mut moves = 0;
        while !b.terminal() {
            let mv = b.legal_moves()[0];
            b.apply_move(mv).unwrap();
            moves += 1;
            assert_eq!(total(&b), 48);
            assert!(moves <= 1000, "game failed to terminate");
        }
        assert_eq!(moves, 10);
        assert_eq!(b.score(Player::A), 12);
        assert_eq!(b.score(Player::B), 36);
    }
}
