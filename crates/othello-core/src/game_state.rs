//! Game state management for Othello.
//!
//! [`GameState`] owns the authoritative board of a game. It validates and
//! applies moves, passes automatically when the next mover is stuck, keeps
//! a history for undo, and reports the outcome once neither side can move.

use crate::board::Board;
use crate::disc::Disc;
use crate::error::GameError;
use crate::square::Square;

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Disc),
    Draw,
}

/// Represents the state of an Othello game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position; its side to move is the player to move.
    board: Board,
    /// Move history: (move, board_before_move).
    /// None for move indicates a pass.
    history: Vec<(Option<Square>, Board)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Dark to move.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from; its side to move moves next
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.board.side_to_move()
    }

    /// Executes a move and updates the game state.
    ///
    /// When the opponent has no legal reply but the game is not over, its
    /// turn is passed automatically.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to place a disc on
    ///
    /// # Errors
    ///
    /// * [`GameError::GameOver`] if neither side can move
    /// * [`GameError::OccupiedSquare`] if `sq` already holds a disc
    /// * [`GameError::IllegalMove`] if `sq` flips nothing
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if sq == Square::None {
            return Err(GameError::IllegalMove(sq));
        }
        if !self.board.is_square_empty(sq) {
            return Err(GameError::OccupiedSquare(sq));
        }

        let before = self.board;
        if !self.board.apply_move(sq, before.side_to_move()) {
            return Err(GameError::IllegalMove(sq));
        }
        self.history.push((Some(sq), before));

        if !self.board.has_legal_moves() && !self.board.is_game_over() {
            self.handle_pass();
        }

        Ok(())
    }

    /// Executes a pass move (switching players without placing a disc).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotPass`] if legal moves are available and
    /// [`GameError::GameOver`] once the game has ended.
    pub fn make_pass(&mut self) -> Result<(), GameError> {
        if self.board.has_legal_moves() {
            return Err(GameError::CannotPass);
        }
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.handle_pass();
        Ok(())
    }

    fn handle_pass(&mut self) {
        tracing::debug!(side = ?self.board.side_to_move(), "no legal move, passing");
        self.history.push((None, self.board));
        self.board = self.board.pass();
    }

    /// Checks if the game has ended: neither player has a legal move.
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Returns the disc count for both players.
    ///
    /// # Returns
    ///
    /// A tuple `(dark_count, light_count)`.
    pub fn get_score(&self) -> (u32, u32) {
        (self.board.dark_count(), self.board.light_count())
    }

    /// Returns the result once the game is over.
    ///
    /// # Returns
    ///
    /// `None` while either side can still move.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }
        let (dark, light) = self.get_score();
        Some(match dark.cmp(&light) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Disc::Dark),
            std::cmp::Ordering::Less => GameOutcome::Winner(Disc::Light),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }

    /// Returns the last move played.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if a regular move was played, `None` if the last move was a pass
    /// or if no moves have been played yet
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|(sq, _)| *sq)
    }

    /// Returns the move history as (move, board_before_move) pairs.
    /// `None` for the move indicates a pass.
    pub fn move_history(&self) -> &[(Option<Square>, Board)] {
        &self.history
    }

    /// Undoes the last move if possible.
    ///
    /// Automatic passes recorded after the move are undone with it, so the
    /// player who made the move is to move again.
    ///
    /// # Returns
    ///
    /// `true` if a move was successfully undone, `false` if there are no moves to undo
    pub fn undo(&mut self) -> bool {
        let mut undone = false;
        while let Some((sq, prev_board)) = self.history.pop() {
            self.board = prev_board;
            undone = true;
            if sq.is_some() {
                break;
            }
        }
        undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Disc::Dark);
        assert!(!game.is_game_over());
        assert_eq!(game.get_score(), (2, 2));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        assert!(game.make_move(Square::D3).is_ok());
        assert_eq!(game.side_to_move(), Disc::Light);
        assert_eq!(game.get_score(), (4, 1));
        assert_eq!(game.last_move(), Some(Square::D3));
    }

    #[test]
    fn test_illegal_move() {
        let mut game = GameState::new();
        assert_eq!(
            game.make_move(Square::A1),
            Err(GameError::IllegalMove(Square::A1))
        );
        assert_eq!(
            game.make_move(Square::D4),
            Err(GameError::OccupiedSquare(Square::D4))
        );
        assert_eq!(game.side_to_move(), Disc::Dark);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_cannot_pass_with_moves() {
        let mut game = GameState::new();
        assert_eq!(game.make_pass(), Err(GameError::CannotPass));
    }

    #[test]
    fn test_game_over() {
        let mut game = GameState::new();

        while !game.is_game_over() {
            let first_move = game.board().legal_moves().lsb_square();
            match first_move {
                Some(sq) => game.make_move(sq).unwrap(),
                None => game.make_pass().unwrap(),
            }
        }

        assert!(game.outcome().is_some());
        let (dark, light) = game.get_score();
        assert!(dark + light <= 64);
        assert!(game.make_move(Square::A1).is_err());
    }

    #[test]
    fn test_wipeout_ends_game() {
        let board = Board::from_string(
            "-OX-----\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             ------X-",
            Disc::Dark,
        )
        .unwrap();
        let mut game = GameState::from_board(board);
        game.make_move(Square::A1).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Disc::Dark)));
    }

    #[test]
    fn test_pass_recorded_in_history() {
        // After Dark plays F1, Light has no move while Dark can still play C2.
        let board = Board::from_string(
            "-O----OX\
             XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
            Disc::Dark,
        )
        .unwrap();
        let mut game = GameState::from_board(board);
        assert!(game.board().is_legal_move(Square::F1));
        game.make_move(Square::F1).unwrap();
        assert_eq!(game.side_to_move(), Disc::Dark);
        assert_eq!(game.move_history().last().map(|(sq, _)| *sq), Some(None));
        assert_eq!(game.last_move(), None);

        // Undo removes the pass together with the move.
        assert!(game.undo());
        assert_eq!(*game.board(), board);
        assert_eq!(game.side_to_move(), Disc::Dark);
    }

    #[test]
    fn test_undo() {
        let mut game = GameState::new();
        let original_board = *game.board();

        game.make_move(Square::D3).unwrap();
        assert_ne!(*game.board(), original_board);

        assert!(game.undo());
        assert_eq!(*game.board(), original_board);
        assert_eq!(game.side_to_move(), Disc::Dark);
    }

    #[test]
    fn test_undo_multiple() {
        let mut game = GameState::new();

        game.make_move(Square::D3).unwrap();
        game.make_move(Square::C3).unwrap();
        game.make_move(Square::C4).unwrap();

        assert!(game.undo());
        assert!(game.undo());
        assert!(game.undo());

        assert_eq!(game.side_to_move(), Disc::Dark);
        assert_eq!(game.get_score(), (2, 2));
    }

    #[test]
    fn test_undo_when_empty() {
        let mut game = GameState::new();
        assert!(!game.undo());
        assert_eq!(game.side_to_move(), Disc::Dark);
    }
}
