use ahash::AHashMap;

/// Indicates whether a stored value is exact or a bound.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bound {
    /// True minimax value (alpha < value < beta).
    Exact,
    /// Value >= beta (beta cutoff).
    Lower,
    /// Value <= alpha (every move failed low).
    Upper,
}

#[derive(Clone, Copy)]
struct Entry {
    bound: Bound,
    value: f64,
}

/// Memoized subtree results keyed by (position hash, remaining depth).
///
/// The table lives as long as its engine and is reused across turns, since
/// identical positions recur through different move orders. Two known
/// imprecisions are tolerated rather than fixed: entries are classified
/// against the alpha/beta window as it stands AFTER the move loop, and the
/// key carries no root-player context, so a cached value can be replayed
/// under a window or perspective it was not computed for. The fallout is a
/// sub-optimal move, never an illegal one. No eviction: the state space is
/// small and the table dies with the engine.
pub struct TranspositionTable {
    map: AHashMap<(u64, u8), Entry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a cached value usable under the current window, if any.
    pub fn probe(&self, hash: u64, depth: u8, alpha: f64, beta: f64) -> Option<f64> {
        let entry = self.map.get(&(hash, depth))?;
        match entry.bound {
            Bound::Exact => Some(entry.value),
            Bound::Upper if entry.value <= alpha => Some(entry.value),
            Bound::Lower if entry.value >= beta => Some(entry.value),
            _ => None,
        }
    }

    /// Classifies and records a finished subtree search.
    pub fn store(&mut self, hash: u64, depth: u8, value: f64, alpha: f64, beta: f64) {
        let bound = if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.map.insert((hash, depth), Entry { bound, value });
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
