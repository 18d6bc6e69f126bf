//! Legal move generation.
//!
//! Moves are produced by scanning the empty squares in row-major order and
//! keeping those whose placement flips at least one disc. That order is the
//! move ordering of the search.

use arrayvec::ArrayVec;
use std::slice;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::flip;
use crate::square::Square;

/// Maximum number of moves possible in an Othello position.
const MAX_MOVES: usize = 34;

/// Computes the legal destinations for the side owning `p`.
///
/// # Arguments
///
/// * `p` - Bitboard of the mover's discs
/// * `o` - Bitboard of the opponent's discs
///
/// # Returns
///
/// A bitboard of every empty square whose placement flips at least one
/// opponent disc.
pub fn legal_moves(p: Bitboard, o: Bitboard) -> Bitboard {
    let empty = !(p | o);
    // Only squares touching an opponent disc can flip anything.
    let candidates = empty & o.neighbours();
    candidates
        .iter()
        .filter(|&sq| !flip::flip(sq, p, o).is_empty())
        .fold(Bitboard::default(), |acc, sq| acc.set(sq))
}

/// Represents a single move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Bitboard representing all opponent discs flipped by this move.
    pub flipped: Bitboard,
}

impl Move {
    /// Creates a new move with the specified square and flipped discs.
    #[inline]
    pub fn new(sq: Square, flipped: Bitboard) -> Move {
        debug_assert!(sq != Square::None, "Move cannot have Square::None");
        debug_assert!(!flipped.is_empty(), "Move must flip at least one disc");
        Move { sq, flipped }
    }
}

/// All legal moves of a position, in generator order.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
    corner_move: Option<usize>,
}

impl MoveList {
    /// Generates all legal moves for the side to move.
    ///
    /// # Arguments
    ///
    /// * `board` - The current position
    ///
    /// # Returns
    ///
    /// A new MoveList holding every legal move with its flipped discs.
    pub fn new(board: &Board) -> MoveList {
        let mover = board.side_to_move();
        let p = board.occupancy(mover);
        let o = board.occupancy(mover.opposite());

        let mut moves = ArrayVec::new();
        let mut corner_move = None;
        for sq in board.legal_moves().iter() {
            let flipped = flip::flip(sq, p, o);
            if corner_move.is_none() && sq.is_corner() {
                corner_move = Some(moves.len());
            }
            moves.push(Move::new(sq, flipped));
        }

        MoveList { moves, corner_move }
    }

    /// Returns the first corner move in generator order, if any.
    #[inline]
    pub fn corner_move(&self) -> Option<&Move> {
        self.corner_move.map(|i| &self.moves[i])
    }

    /// Returns the number of legal moves in this position.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in the list, if any exists.
    #[inline]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns an iterator over all moves in generator order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
