//! Zobrist fingerprints of board occupancy.

use rand::Rng;

use crate::board::Board;
use crate::disc::Disc;
use crate::square::TOTAL_SQUARES;

/// Random codes for every (square, color) pair.
///
/// A board's fingerprint is the XOR of the codes of its occupied squares, so
/// two boards with the same occupancy always share a fingerprint. The side to
/// move is not part of it.
#[derive(Clone, Debug)]
pub struct Zobrist {
    table: [[u64; 2]; TOTAL_SQUARES],
}

impl Zobrist {
    /// Draws a fresh code table from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut table = [[0u64; 2]; TOTAL_SQUARES];
        for codes in table.iter_mut() {
            for code in codes.iter_mut() {
                *code = rng.random::<u64>();
            }
        }
        Zobrist { table }
    }

    #[inline]
    fn color_index(color: Disc) -> usize {
        match color {
            Disc::Dark => 0,
            Disc::Light => 1,
            Disc::Empty => unreachable!("empty squares have no code"),
        }
    }

    /// Returns the code of a `color` disc on square index `sq`.
    #[inline]
    pub fn code(&self, sq: usize, color: Disc) -> u64 {
        self.table[sq][Self::color_index(color)]
    }

    /// Computes the fingerprint of `board`.
    pub fn hash(&self, board: &Board) -> u64 {
        let mut key = 0;
        for color in [Disc::Dark, Disc::Light] {
            for sq in board.occupancy(color).iter() {
                key ^= self.code(sq.index(), color);
            }
        }
        key
    }
}
