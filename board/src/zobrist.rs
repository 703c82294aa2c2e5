//! Position hashing for transposition lookups.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rules::{Player, MAX_PIT_STONES, TOTAL_PITS};
use crate::state::Board;

const DEFAULT_SEED: u64 = 12345;
const KEYS_PER_SLOT: usize = MAX_PIT_STONES as usize + 1;

/// Zobrist keys for every (slot, stone count) pair plus a side-to-move key.
///
/// Keys come from a fixed-seed `StdRng`, so the same position hashes to the
/// same value on every run. Distinct positions can collide on 64 bits; the
/// hash is only ever a cache key, so a collision costs accuracy, not
/// correctness of play.
pub struct Zobrist {
    keys: [[u64; KEYS_PER_SLOT]; TOTAL_PITS],
    turn_key: u64,
}

impl Zobrist {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut keys = [[0u64; KEYS_PER_SLOT]; TOTAL_PITS];
        for slot_keys in keys.iter_mut() {
            for key in slot_keys.iter_mut() {
                *key = rng.gen();
            }
        }
        Zobrist {
            keys,
            turn_key: rng.gen(),
        }
    }

    /// Hashes a full position. Counts above the per-pit ceiling clamp to
    /// the last key rather than indexing out of range.
    pub fn hash(&self, board: &Board) -> u64 {
        let mut h = 0u64;
        for (slot, &count) in board.pits().iter().enumerate() {
            h ^= self.keys[slot][count.min(MAX_PIT_STONES) as usize];
        }
        if board.current() == Player::B {
            h ^= self.turn_key;
        }
        h
    }
}

impl Default for Zobrist {
    fn default() -> Self {
        Self::new()
    }
}
