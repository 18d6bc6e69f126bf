//! Static position evaluation.
//!
//! The score is an additive blend of five terms, each a signed value from the
//! evaluated color's point of view scaled by a weight from [`EvalWeights`]:
//!
//! 1. positional: the [`POSITION_TABLE`] value of every occupied square
//! 2. frontier: percentage difference of discs touching an empty square, negated
//! 3. discs: percentage difference of disc counts
//! 4. corners and near-corners: owned corners, and squares next to empty corners
//! 5. mobility: percentage difference of legal move counts
//!
//! Every percentage term uses [`pct_diff`], which is antisymmetric, so
//! `evaluate(board, Light) == -evaluate(board, Dark)` for every board.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Disc;
use crate::move_list;
use crate::square::CORNER_NEIGHBOURS;
use crate::types::Scoref;

/// Per-square positional values, A1 to H8.
#[rustfmt::skip]
pub const POSITION_TABLE: [i32; 64] = [
    20, -3, 11,  8,  8, 11, -3, 20,
    -3, -7, -4,  1,  1, -4, -7, -3,
    11, -4,  2,  2,  2,  2, -4, 11,
     8,  1,  2, -3, -3,  2,  1,  8,
     8,  1,  2, -3, -3,  2,  1,  8,
    11, -4,  2,  2,  2,  2, -4, 11,
    -3, -7, -4,  1,  1, -4, -7, -3,
    20, -3, 11,  8,  8, 11, -3, 20,
];

/// Multipliers applied to each evaluation term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalWeights {
    pub positional: Scoref,
    pub frontier: Scoref,
    pub discs: Scoref,
    pub corners: Scoref,
    /// Applied per near-corner disc; negative so that owning one is penalized.
    pub near_corner: Scoref,
    pub mobility: Scoref,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            positional: 5.0,
            frontier: 74.396,
            discs: 500.0,
            corners: 801.724 * 25.0,
            near_corner: -12.5 * 382.026,
            mobility: 78.922,
        }
    }
}

/// Signed percentage difference between a count `a` (self) and `b` (other).
///
/// # Returns
///
/// * `100·a/(a+b)` when `a > b`
/// * `-100·b/(a+b)` when `a < b`
/// * `0` when equal
#[inline]
pub fn pct_diff(a: u32, b: u32) -> Scoref {
    let total = (a + b) as Scoref;
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => 100.0 * a as Scoref / total,
        std::cmp::Ordering::Less => -100.0 * b as Scoref / total,
        std::cmp::Ordering::Equal => 0.0,
    }
}

/// Evaluates positions with a fixed set of weights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Evaluator { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Full evaluation of `board`, higher is better for `color`.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to score.
    /// * `color` - The color whose point of view the score takes.
    ///
    /// # Returns
    ///
    /// The static terms plus the mobility differential.
    pub fn evaluate(&self, board: &Board, color: Disc) -> Scoref {
        let (own, opp) = split(board, color);
        let own_moves = move_list::legal_moves(own, opp).count();
        let opp_moves = move_list::legal_moves(opp, own).count();
        self.evaluate_static(board, color) + self.mobility_term(own_moves, opp_moves)
    }

    /// Evaluation without the mobility term.
    ///
    /// Used when the search supplies its own mobility estimate.
    pub fn evaluate_static(&self, board: &Board, color: Disc) -> Scoref {
        let (own, opp) = split(board, color);
        let w = &self.weights;

        w.positional * positional(own, opp)
            + w.frontier * frontier(own, opp, board.empty())
            + w.discs * pct_diff(own.count(), opp.count())
            + w.corners * corners(own, opp)
            + w.near_corner * near_corners(board, color)
    }

    /// Weighted mobility differential for two legal-move counts.
    #[inline]
    pub fn mobility_term(&self, own_moves: u32, opp_moves: u32) -> Scoref {
        self.weights.mobility * pct_diff(own_moves, opp_moves)
    }
}

/// Evaluates `board` for `color` with the default weights.
pub fn evaluate(board: &Board, color: Disc) -> Scoref {
    Evaluator::default().evaluate(board, color)
}

#[inline]
fn split(board: &Board, color: Disc) -> (Bitboard, Bitboard) {
    debug_assert!(color != Disc::Empty);
    (board.occupancy(color), board.occupancy(color.opposite()))
}

fn positional(own: Bitboard, opp: Bitboard) -> Scoref {
    let sum = |bb: Bitboard| -> i32 { bb.iter().map(|sq| POSITION_TABLE[sq.index()]).sum() };
    (sum(own) - sum(opp)) as Scoref
}

fn frontier(own: Bitboard, opp: Bitboard, empty: Bitboard) -> Scoref {
    let exposed = empty.neighbours();
    -pct_diff((own & exposed).count(), (opp & exposed).count())
}

fn corners(own: Bitboard, opp: Bitboard) -> Scoref {
    own.corners().count() as Scoref - opp.corners().count() as Scoref
}

fn near_corners(board: &Board, color: Disc) -> Scoref {
    let mut score = 0;
    for (corner, neighbours) in CORNER_NEIGHBOURS {
        if board.disc_at(corner) != Disc::Empty {
            continue;
        }
        for sq in neighbours {
            score += owner_sign(board.disc_at(sq), color);
        }
    }
    score as Scoref
}

#[inline]
fn owner_sign(disc: Disc, color: Disc) -> i32 {
    if disc == Disc::Empty {
        0
    } else if disc == color {
        1
    } else {
        -1
    }
}
