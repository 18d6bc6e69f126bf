//! Bitboard square sets.
//!
//! [`Bitboard`] stores a set of squares in a single `u64`, where bit 0 is A1
//! and bit 63 is H8. Iteration is LSB first, which is row-major order; the
//! move generator and the search rely on that order being stable.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::square::Square;

/// Bitboard mask representing the four corner squares (A1, H1, A8, H8).
pub const CORNER_MASK: u64 = 0x8100000000000081;

/// Every square except those on file A.
const NOT_FILE_A: u64 = 0xfefefefefefefefe;

/// Every square except those on file H.
const NOT_FILE_H: u64 = 0x7f7f7f7f7f7f7f7f;

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a new bitboard with the bit at the given square set.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to set.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with the specified square's bit set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard())
    }

    /// Returns a new bitboard with the bit at the given square removed.
    #[inline(always)]
    pub fn remove(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard())
    }

    /// Checks if the bitboard contains the bit at the given square.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to check.
    ///
    /// # Returns
    ///
    /// `true` if the specified square's bit is set, `false` otherwise.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        sq != Square::None && self.0 & sq.bitboard() != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the square corresponding to the least significant set bit.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for the LSB position, or `None` if the bitboard is empty.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_usize(self.0.trailing_zeros() as usize)
        }
    }

    /// Splits off the least significant set square.
    ///
    /// # Returns
    ///
    /// The LSB square and the remaining bitboard with that bit cleared.
    #[inline(always)]
    pub fn pop_lsb(self) -> (Square, Self) {
        debug_assert!(!self.is_empty());
        let sq = Square::from_usize_unchecked(self.0.trailing_zeros() as usize);
        (sq, Bitboard(self.0 & self.0.wrapping_sub(1)))
    }

    /// Returns the squares of this set that are corners.
    #[inline(always)]
    pub const fn corners(self) -> Self {
        Bitboard(self.0 & CORNER_MASK)
    }

    /// Returns every square adjacent (in any of the 8 directions) to a square
    /// of this set. The set itself is not included unless a member touches
    /// another member.
    pub fn neighbours(self) -> Self {
        let b = self.0;
        let horizontal = ((b << 1) & NOT_FILE_A) | ((b >> 1) & NOT_FILE_H);
        let row = b | horizontal;
        Bitboard(horizontal | (row << 8) | (row >> 8))
    }

    /// Returns an iterator over the set squares in row-major order.
    #[inline]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        Bitboard(sq.bitboard())
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

/// An iterator that yields each set bit position in a bitboard as a `Square`.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            return None;
        }

        let (square, rest) = self.bitboard.pop_lsb();
        self.bitboard = rest;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.count() as usize;
        (n, Some(n))
    }
}
