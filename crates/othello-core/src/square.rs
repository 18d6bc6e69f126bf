use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;

/// Represents a square on an Othello board, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H and ranks (rows) 1-8. A square's index is
/// `row * 8 + col`, so `(row, col) = (2, 3)` is D3:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
///
/// The additional `None` variant represents an unspecified square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
    None,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The four corners in row-major order.
pub const CORNERS: [Square; 4] = [Square::A1, Square::H1, Square::A8, Square::H8];

/// Each corner paired with the three squares touching it.
pub const CORNER_NEIGHBOURS: [(Square, [Square; 3]); 4] = [
    (Square::A1, [Square::B1, Square::A2, Square::B2]),
    (Square::H1, [Square::G1, Square::H2, Square::G2]),
    (Square::A8, [Square::A7, Square::B8, Square::B7]),
    (Square::H8, [Square::H7, Square::G8, Square::G7]),
];

#[rustfmt::skip]
const ALL_SQUARES: [Square; TOTAL_SQUARES + 1] = [
    Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
    Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
    Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
    Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
    Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
    Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
    Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
    Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    Square::None,
];

impl Square {
    /// Converts the `Square` into a u64 with a single bit set.
    ///
    /// A1 returns 0x1, B1 returns 0x2, H8 returns 0x8000000000000000.
    #[inline]
    pub fn bitboard(self) -> u64 {
        debug_assert!(
            (self as usize) < TOTAL_SQUARES,
            "Index out of bounds for Square enum. self: {self:?}"
        );
        1 << self as u8
    }

    /// Converts the `Square` into a `usize` index (0-63, or 64 for `None`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Safely converts an index into a `Square`.
    ///
    /// # Arguments
    /// * `index` - The index to convert.
    ///
    /// # Returns
    /// `Some(Square)` if the index is valid (0-64), `None` otherwise.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Square> {
        ALL_SQUARES.get(index).copied()
    }

    /// Converts an index into a `Square`, mapping anything out of range to
    /// `Square::None`.
    #[inline]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(
            index <= TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        Square::from_usize(index).unwrap_or(Square::None)
    }

    /// Creates a `Square` from `(row, col)` coordinates.
    ///
    /// # Arguments
    ///
    /// * `row` - The row index (0-7) where 0 is rank 1.
    /// * `col` - The column index (0-7) where 0 is file A.
    ///
    /// # Returns
    ///
    /// `Some(Square)` when both coordinates lie on the board.
    #[inline]
    pub fn from_row_col(row: usize, col: usize) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Square::from_usize(row * BOARD_SIZE + col)
        } else {
            Option::None
        }
    }

    /// Returns the row (rank) of this square, 0 for rank 1.
    ///
    /// # Panics
    ///
    /// Panics if called on `Square::None`.
    #[inline]
    pub fn row(self) -> usize {
        assert!(self != Square::None, "Square::row called on Square::None");
        self.index() / BOARD_SIZE
    }

    /// Returns the column (file) of this square, 0 for file A.
    ///
    /// # Panics
    ///
    /// Panics if called on `Square::None`.
    #[inline]
    pub fn col(self) -> usize {
        assert!(self != Square::None, "Square::col called on Square::None");
        self.index() % BOARD_SIZE
    }

    /// Returns `true` for A1, H1, A8 and H8.
    #[inline]
    pub fn is_corner(self) -> bool {
        CORNERS.contains(&self)
    }

    /// Returns an iterator over all 64 valid squares in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL_SQUARES[..TOTAL_SQUARES].iter().copied()
    }
}

// We want Square::None as the default value, not the first variant (A1)
// which would be chosen by #[derive(Default)]
#[allow(clippy::derivable_impls)]
impl Default for Square {
    fn default() -> Self {
        Square::None
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses a square in algebraic notation (`"d3"`, `"D3"`) or as
    /// whitespace separated `row col` coordinates (`"2 3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let mut parts = s.split_whitespace();
        if let (Some(row), Some(col), Option::None) = (parts.next(), parts.next(), parts.next()) {
            let row: usize = row.parse().map_err(|_| SquareError::InvalidFormat)?;
            let col: usize = col.parse().map_err(|_| SquareError::InvalidFormat)?;
            return Square::from_row_col(row, col).ok_or(SquareError::OutOfRange(row, col));
        }

        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), Option::None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Square::from_row_col(row, col).ok_or(SquareError::OutOfRange(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Square::None {
            return write!(f, "None");
        }

        let file = (self.col() as u8 + b'a') as char;
        let rank = (self.row() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}
