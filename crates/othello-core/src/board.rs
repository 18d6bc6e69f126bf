//! Othello board representation using bitboards.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::bitboard::Bitboard;
use crate::disc::Disc;
use crate::error::BoardParseError;
use crate::flip;
use crate::move_list;
use crate::square::{BOARD_SIZE, Square, TOTAL_SQUARES};

/// An Othello position.
///
/// Occupancy is held as one bitboard per color; per-color disc counts are
/// their population counts, so counts and cells can never disagree. The board
/// also records the color to move and caches that color's legal destinations.
///
/// Boards are `Copy`: search explores each hypothetical move on its own copy.
/// Equality and hashing consider occupancy only.
#[derive(Debug, Copy, Clone)]
pub struct Board {
    dark: Bitboard,
    light: Bitboard,
    side_to_move: Disc,
    moves: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Light discs on D4 and E5
    /// - Dark discs on E4 and D5
    /// - Dark to move
    fn default() -> Self {
        Board::from_bitboards(
            Square::E4.bitboard() | Square::D5.bitboard(),
            Square::D4.bitboard() | Square::E5.bitboard(),
            Disc::Dark,
        )
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dark == other.dark && self.light == other.light
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dark.hash(state);
        self.light.hash(state);
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a `Board` from per-color bitboards.
    ///
    /// # Arguments
    /// * `dark` - Bitboard of dark discs.
    /// * `light` - Bitboard of light discs.
    /// * `side_to_move` - The color whose legal moves are cached.
    ///
    /// # Returns
    /// A new `Board` with its legal-move cache populated.
    pub fn from_bitboards(
        dark: impl Into<Bitboard>,
        light: impl Into<Bitboard>,
        side_to_move: Disc,
    ) -> Board {
        debug_assert!(side_to_move != Disc::Empty);
        let mut board = Board {
            dark: dark.into(),
            light: light.into(),
            side_to_move,
            moves: Bitboard::default(),
        };
        debug_assert!((board.dark & board.light).is_empty());
        board.recompute_legal_moves(side_to_move);
        board
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string lists the 64 squares from A1 to H8 using `X` for dark,
    /// `O` for light and `-` for empty. Whitespace is ignored.
    ///
    /// # Arguments
    /// * `board_string` - A string representing the board.
    /// * `side_to_move` - The color to move.
    ///
    /// # Errors
    /// Returns [`BoardParseError`] if a character is unknown or the string
    /// does not describe exactly 64 squares.
    pub fn from_string(board_string: &str, side_to_move: Disc) -> Result<Board, BoardParseError> {
        let mut dark = Bitboard::default();
        let mut light = Bitboard::default();
        let mut n = 0;

        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let disc = Disc::from_char(c).ok_or(BoardParseError::InvalidChar(c))?;
            if n < TOTAL_SQUARES {
                let sq = Square::from_usize_unchecked(n);
                match disc {
                    Disc::Dark => dark = dark.set(sq),
                    Disc::Light => light = light.set(sq),
                    Disc::Empty => {}
                }
            }
            n += 1;
        }

        if n != TOTAL_SQUARES {
            return Err(BoardParseError::InvalidLength(n));
        }
        Ok(Board::from_bitboards(dark, light, side_to_move))
    }

    /// Returns the color whose legal moves are cached.
    #[inline]
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns the cached legal destinations for the side to move.
    #[inline]
    pub fn legal_moves(&self) -> Bitboard {
        self.moves
    }

    /// Recomputes and caches the legal destinations for `color`, which
    /// becomes the side to move.
    ///
    /// # Arguments
    /// * `color` - The color to generate moves for.
    ///
    /// # Returns
    /// The freshly generated legal-move set.
    pub fn recompute_legal_moves(&mut self, color: Disc) -> Bitboard {
        self.side_to_move = color;
        self.moves = move_list::legal_moves(self.occupancy(color), self.occupancy(color.opposite()));
        self.moves
    }

    /// Checks whether the side to move has any legal move.
    #[inline]
    pub fn has_legal_moves(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Checks whether `sq` is a legal destination for the side to move.
    #[inline]
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.moves.contains(sq)
    }

    /// Places a disc of `color` at `sq` and flips every bounded run.
    ///
    /// Fails without mutating the board when the square is occupied, when
    /// `color` is not the side whose legal moves are cached, or when the
    /// square is not among those legal moves. On success the turn passes to
    /// the opponent and its legal moves are recomputed.
    ///
    /// # Returns
    /// `true` if the move was applied.
    pub fn apply_move(&mut self, sq: Square, color: Disc) -> bool {
        if sq == Square::None || !self.is_square_empty(sq) {
            return false;
        }
        if color != self.side_to_move || !self.is_legal_move(sq) {
            return false;
        }

        let flipped = flip::flip(sq, self.occupancy(color), self.occupancy(color.opposite()));
        debug_assert!(!flipped.is_empty());
        self.place(sq, flipped, color);
        true
    }

    /// Returns a copy of the board with `sq` played by the side to move.
    ///
    /// # Returns
    /// `None` if the move is not legal.
    pub fn try_make_move(&self, sq: Square) -> Option<Board> {
        let mut next = *self;
        next.apply_move(sq, self.side_to_move).then_some(next)
    }

    /// Returns a copy of the board after playing a move whose flips are
    /// already known.
    ///
    /// # Arguments
    /// * `flipped` - The discs flipped by the move (from the move generator).
    /// * `sq` - The square played by the side to move.
    pub fn make_move_with_flipped(&self, flipped: Bitboard, sq: Square) -> Board {
        debug_assert!(self.is_legal_move(sq));
        let mut next = *self;
        next.place(sq, flipped, self.side_to_move);
        next
    }

    fn place(&mut self, sq: Square, flipped: Bitboard, color: Disc) {
        let placed = Bitboard::from(sq) | flipped;
        match color {
            Disc::Dark => {
                self.dark |= placed;
                self.light = self.light & !flipped;
            }
            Disc::Light => {
                self.light |= placed;
                self.dark = self.dark & !flipped;
            }
            Disc::Empty => unreachable!("cannot place an empty disc"),
        }
        self.recompute_legal_moves(color.opposite());
    }

    /// Returns a copy with the turn handed to the opponent without a move.
    pub fn pass(&self) -> Board {
        let mut next = *self;
        next.recompute_legal_moves(self.side_to_move.opposite());
        next
    }

    /// Checks if the game is over (neither color can move).
    pub fn is_game_over(&self) -> bool {
        if self.has_legal_moves() {
            return false;
        }
        !self.pass().has_legal_moves()
    }

    /// Returns the disc occupying `sq`.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        if self.dark.contains(sq) {
            Disc::Dark
        } else if self.light.contains(sq) {
            Disc::Light
        } else {
            Disc::Empty
        }
    }

    /// Returns the disc at `(row, col)`, or `None` off the board.
    pub fn disc_at_row_col(&self, row: usize, col: usize) -> Option<Disc> {
        Square::from_row_col(row, col).map(|sq| self.disc_at(sq))
    }

    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        !(self.dark | self.light).contains(sq)
    }

    /// Returns the bitboard of discs of `color` (empty squares for `Disc::Empty`).
    #[inline]
    pub fn occupancy(&self, color: Disc) -> Bitboard {
        match color {
            Disc::Dark => self.dark,
            Disc::Light => self.light,
            Disc::Empty => self.empty(),
        }
    }

    /// Gets the empty squares.
    #[inline]
    pub fn empty(&self) -> Bitboard {
        !(self.dark | self.light)
    }

    /// Returns the number of squares holding `color`.
    #[inline]
    pub fn count(&self, color: Disc) -> u32 {
        self.occupancy(color).count()
    }

    #[inline]
    pub fn dark_count(&self) -> u32 {
        self.dark.count()
    }

    #[inline]
    pub fn light_count(&self) -> u32 {
        self.light.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.empty().count()
    }
}

impl fmt::Display for Board {
    /// Formats the board as 8 rows of `X`, `O` and `-`, rank 1 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let disc = self.disc_at_row_col(row, col).unwrap_or(Disc::Empty);
                write!(f, "{}", disc.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.dark_count(), 2);
        assert_eq!(board.light_count(), 2);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.side_to_move(), Disc::Dark);
        assert_eq!(board.legal_moves().count(), 4);
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(board.disc_at_row_col(3, 3), Some(Disc::Light));
        assert_eq!(board.disc_at_row_col(4, 4), Some(Disc::Light));
        assert_eq!(board.disc_at_row_col(3, 4), Some(Disc::Dark));
        assert_eq!(board.disc_at_row_col(4, 3), Some(Disc::Dark));
        assert_eq!(board.disc_at_row_col(8, 0), None);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string(
            "--------\
             --------\
             --------\
             ---OX---\
             ---XO---\
             --------\
             --------\
             --------",
            Disc::Dark,
        )
        .unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.legal_moves(), Board::new().legal_moves());
    }

    #[test]
    fn test_from_string_errors() {
        assert_eq!(
            Board::from_string("---", Disc::Dark).unwrap_err(),
            BoardParseError::InvalidLength(3)
        );
        let bad = format!("{}Z", "-".repeat(63));
        assert_eq!(
            Board::from_string(&bad, Disc::Dark).unwrap_err(),
            BoardParseError::InvalidChar('Z')
        );
    }

    #[test]
    fn test_display_round_trip() {
        let board = Board::new();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 8);
        assert_eq!(Board::from_string(&text, Disc::Dark).unwrap(), board);
    }

    #[test]
    fn test_apply_move_opening() {
        let mut board = Board::new();
        assert!(board.apply_move(Square::D3, Disc::Dark));
        assert_eq!(board.dark_count(), 4);
        assert_eq!(board.light_count(), 1);
        assert_eq!(board.disc_at(Square::D4), Disc::Dark);
        assert_eq!(board.side_to_move(), Disc::Light);
        assert!(board.has_legal_moves());
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = Board::new();
        let before = board;
        assert!(!board.apply_move(Square::D4, Disc::Dark));
        assert_eq!(board, before);
        assert_eq!(board.side_to_move(), Disc::Dark);
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let mut board = Board::new();
        assert!(!board.apply_move(Square::A1, Disc::Dark));
        assert!(!board.apply_move(Square::None, Disc::Dark));
        // D3 is legal for dark, but light is not the side with cached moves.
        assert!(!board.apply_move(Square::D3, Disc::Light));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_recompute_legal_moves_switches_mover() {
        let mut board = Board::new();
        let light_moves = board.recompute_legal_moves(Disc::Light);
        assert_eq!(board.side_to_move(), Disc::Light);
        assert_eq!(light_moves.count(), 4);
        assert!(light_moves.contains(Square::E3));
        assert!(board.apply_move(Square::E3, Disc::Light));
        assert_eq!(board.light_count(), 4);
    }

    #[test]
    fn test_try_make_move() {
        let board = Board::new();
        assert!(board.try_make_move(Square::A1).is_none());
        let next = board.try_make_move(Square::C4).unwrap();
        assert_eq!(next.dark_count(), 4);
        // The original is untouched.
        assert_eq!(board.dark_count(), 2);
    }

    #[test]
    fn test_equality_ignores_side_to_move() {
        let board = Board::new();
        assert_eq!(board, board.pass());
        assert_ne!(board, board.try_make_move(Square::D3).unwrap());
    }

    #[test]
    fn test_disc_conservation() {
        let mut board = Board::new();
        for _ in 0..60 {
            if !board.has_legal_moves() {
                board = board.pass();
                if !board.has_legal_moves() {
                    break;
                }
            }
            let before = board.dark_count() + board.light_count();
            let sq = board.legal_moves().lsb_square().unwrap();
            let color = board.side_to_move();
            assert!(board.apply_move(sq, color));
            assert_eq!(board.dark_count() + board.light_count(), before + 1);
            assert_eq!(board.dark_count() + board.light_count() + board.empty_count(), 64);
        }
    }

    #[test]
    fn test_game_over() {
        let board = Board::from_string(&"X".repeat(64), Disc::Light).unwrap();
        assert!(board.is_game_over());
        assert!(!Board::new().is_game_over());
    }
}
