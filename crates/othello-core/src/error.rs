//! Error types for board parsing and game-state transitions.

use thiserror::Error;

use crate::square::Square;

/// Errors produced while parsing a square in algebraic or `row col` notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("invalid square format: expected e.g. 'd3' or '2 3'")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
    /// Row or column outside 0..8
    #[error("coordinates ({0}, {1}) are outside the 8x8 board")]
    OutOfRange(usize, usize),
}

/// Errors produced by [`crate::board::Board::from_string`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("board string must describe 64 cells, got {0}")]
    InvalidLength(usize),
    #[error("unexpected character '{0}' in board string")]
    InvalidChar(char),
}

/// Errors returned by [`crate::game_state::GameState`] transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(Square),
    #[error("square {0} is already occupied")]
    OccupiedSquare(Square),
    #[error("cannot pass while legal moves are available")]
    CannotPass,
    #[error("the game is over")]
    GameOver,
}
