//! Search depth selection.
//!
//! The remaining depth of a node is shrunk before each child is searched
//! according to how many legal moves the child position offers: narrow
//! positions are searched deeper, wide ones shallower. Once the time budget
//! is spent every policy collapses to a single ply.

use crate::types::Depth;

/// Depth used by every policy once the time budget is exhausted.
pub const EXHAUSTED_DEPTH: Depth = 1;

/// Depth schedule keyed on the number of legal moves.
///
/// `depth_for(n)` is `wide_depth` when `n > wide_threshold`, `medium_depth`
/// when `n > medium_threshold`, and `narrow_depth` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdaptiveDepth {
    pub wide_threshold: u32,
    pub wide_depth: Depth,
    pub medium_threshold: u32,
    pub medium_depth: Depth,
    pub narrow_depth: Depth,
}

impl AdaptiveDepth {
    pub const fn new(
        wide_threshold: u32,
        wide_depth: Depth,
        medium_threshold: u32,
        medium_depth: Depth,
        narrow_depth: Depth,
    ) -> Self {
        AdaptiveDepth {
            wide_threshold,
            wide_depth,
            medium_threshold,
            medium_depth,
            narrow_depth,
        }
    }

    /// Returns the depth for a position with `n_moves` legal moves.
    pub fn depth_for(&self, n_moves: u32) -> Depth {
        if n_moves > self.wide_threshold {
            self.wide_depth
        } else if n_moves > self.medium_threshold {
            self.medium_depth
        } else {
            self.narrow_depth
        }
    }
}

impl Default for AdaptiveDepth {
    fn default() -> Self {
        AdaptiveDepth::new(8, 3, 5, 4, 5)
    }
}

/// How the search picks its depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthPolicy {
    /// Always search to the given depth.
    Fixed(Depth),
    /// Pick the depth from the legal move count.
    Adaptive(AdaptiveDepth),
}

impl DepthPolicy {
    /// Returns the depth to search a position with `n_moves` legal moves.
    ///
    /// # Arguments
    ///
    /// * `n_moves` - Number of legal moves in the position
    /// * `time_exhausted` - Whether the time budget is already spent
    ///
    /// # Returns
    ///
    /// A depth of at least 1.
    pub fn depth_for(&self, n_moves: u32, time_exhausted: bool) -> Depth {
        if time_exhausted {
            return EXHAUSTED_DEPTH;
        }
        let depth = match self {
            DepthPolicy::Fixed(depth) => *depth,
            DepthPolicy::Adaptive(schedule) => schedule.depth_for(n_moves),
        };
        depth.max(1)
    }
}

impl Default for DepthPolicy {
    fn default() -> Self {
        DepthPolicy::Adaptive(AdaptiveDepth::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let policy = DepthPolicy::default();
        assert_eq!(policy.depth_for(12, false), 3);
        assert_eq!(policy.depth_for(9, false), 3);
        assert_eq!(policy.depth_for(8, false), 4);
        assert_eq!(policy.depth_for(6, false), 4);
        assert_eq!(policy.depth_for(5, false), 5);
        assert_eq!(policy.depth_for(0, false), 5);
    }

    #[test]
    fn test_takes_bitboard_move_count() {
        let board = crate::board::Board::new();
        let policy = DepthPolicy::default();
        assert_eq!(policy.depth_for(board.legal_moves().count(), false), 5);
    }

    #[test]
    fn test_exhausted_collapses_to_one() {
        assert_eq!(DepthPolicy::default().depth_for(3, true), 1);
        assert_eq!(DepthPolicy::Fixed(6).depth_for(3, true), 1);
    }

    #[test]
    fn test_fixed() {
        let policy = DepthPolicy::Fixed(4);
        assert_eq!(policy.depth_for(1, false), 4);
        assert_eq!(policy.depth_for(20, false), 4);
        assert_eq!(DepthPolicy::Fixed(0).depth_for(20, false), 1);
    }
}
