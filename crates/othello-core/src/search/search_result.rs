//! Search result types.

use std::time::Duration;

use crate::square::Square;
use crate::types::{Depth, Scoref};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Value of the position from Light's point of view.
    pub value: Scoref,
    pub best_move: Option<Square>,
    /// Root depth after adaptive shrinking.
    pub depth: Depth,
    pub n_nodes: u64,
    pub cache_hits: u64,
    pub elapsed: Duration,
    /// The time budget ran out before the search finished.
    pub timed_out: bool,
}

impl SearchResult {
    /// Converts the result into the move handed back to the game layer.
    ///
    /// # Returns
    ///
    /// `None` when the searched position had no legal move.
    pub fn decision(&self) -> Option<MoveDecision> {
        let square = self.best_move?;
        Some(MoveDecision {
            row: square.row(),
            col: square.col(),
            square,
            depth_used: self.depth,
            value: self.value,
            elapsed: self.elapsed,
        })
    }
}

/// The engine's answer to a move request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveDecision {
    pub row: usize,
    pub col: usize,
    pub square: Square,
    pub depth_used: Depth,
    pub value: Scoref,
    pub elapsed: Duration,
}
