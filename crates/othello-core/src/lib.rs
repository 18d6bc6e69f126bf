//! Othello engine core.
//!
//! Board representation and move generation, a weighted static evaluator,
//! a Zobrist-keyed transposition cache and a time-bounded alpha-beta search,
//! plus a game-state manager for driving a full game.
//!
//! ```
//! use othello_core::board::Board;
//! use othello_core::disc::Disc;
//! use othello_core::search::Search;
//! use othello_core::search::options::SearchOptions;
//!
//! let board = Board::new();
//! let mut search = Search::new(&SearchOptions::new(1));
//! let decision = search.request_move(&board, Disc::Dark, None).unwrap();
//! assert!(board.is_legal_move(decision.square));
//! ```

pub mod bitboard;
pub mod board;
pub mod disc;
pub mod error;
pub mod eval;
pub mod flip;
pub mod game_state;
pub mod level;
pub mod move_list;
pub mod perft;
pub mod search;
pub mod square;
pub mod transposition_table;
pub mod types;
pub mod zobrist;
