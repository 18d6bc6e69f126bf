//! Colored console rendering of a game.
//!
//! A thin wrapper around the core `GameState` that adds terminal display.

use colored::Colorize;
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::error::GameError;
use othello_core::game_state::{self, GameOutcome};
use othello_core::square::Square;

pub struct GameState {
    core: game_state::GameState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
        }
    }

    pub fn board(&self) -> &Board {
        self.core.board()
    }

    pub fn side_to_move(&self) -> Disc {
        self.core.side_to_move()
    }

    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        self.core.make_move(sq)
    }

    pub fn make_pass(&mut self) -> Result<(), GameError> {
        self.core.make_pass()
    }

    pub fn undo(&mut self) -> bool {
        self.core.undo()
    }

    pub fn is_game_over(&self) -> bool {
        self.core.is_game_over()
    }

    /// Number of passes recorded since the last regular move.
    pub fn trailing_passes(&self) -> usize {
        self.core
            .move_history()
            .iter()
            .rev()
            .take_while(|(sq, _)| sq.is_none())
            .count()
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// Legal moves of the side to move are marked with a dot and the last
    /// move is highlighted.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let last_move = self.core.last_move();
        let (dark_count, light_count) = self.core.get_score();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for row in 0..8 {
            print!("  {} │", row + 1);

            for col in 0..8 {
                let Some(sq) = Square::from_row_col(row, col) else {
                    continue;
                };
                let is_last_move = Some(sq) == last_move;

                let symbol = match board.disc_at(sq) {
                    Disc::Dark if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::Light if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Dark => " X ".bright_green(),
                    Disc::Light => " O ".bright_yellow(),
                    Disc::Empty if board.is_legal_move(sq) => " · ".bright_cyan(),
                    Disc::Empty => "   ".normal(),
                };
                print!("{symbol}│");
            }

            match row {
                2 if !self.core.is_game_over() => {
                    let player_info = match side_to_move {
                        Disc::Dark => "Dark's turn (X)".bright_green(),
                        _ => "Light's turn (O)".bright_yellow(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Dark:  {}", format!("{dark_count:2}").bright_green()),
                4 => println!("   Light: {}", format!("{light_count:2}").bright_yellow()),
                6 => match self.core.outcome() {
                    Some(GameOutcome::Winner(Disc::Dark)) => {
                        println!("   {}", "Dark wins!".bright_green())
                    }
                    Some(GameOutcome::Winner(_)) => {
                        println!("   {}", "Light wins!".bright_yellow())
                    }
                    Some(GameOutcome::Draw) => println!("   {}", "Draw".bright_cyan()),
                    None => println!(),
                },
                7 if self.core.is_game_over() => {
                    println!("   {}", "*** Game Over ***".bright_red())
                }
                _ => println!(),
            }

            if row < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
        if let Some(sq) = last_move {
            println!("    last move: {sq} ({}, {})", sq.row(), sq.col());
        }
    }
}
