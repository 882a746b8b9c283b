#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tree search algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStrategy {
    /// Full minimax tree
    Minimax,
    /// Minimax with alpha-beta cutoffs; same result, fewer nodes
    #[default]
    AlphaBeta,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    pub strategy: SearchStrategy,
    /// Plies to search; 0 returns the static evaluation
    pub depth: i32,
}

impl SearchParams {
    #[must_use]
    pub fn new(strategy: SearchStrategy, depth: i32) -> Self {
        SearchParams { strategy, depth }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            strategy: SearchStrategy::AlphaBeta,
            depth: 3,
        }
    }
}
