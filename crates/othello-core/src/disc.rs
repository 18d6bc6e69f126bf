/// Represents a disc in the game.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - Represents an empty cell on the board.
/// * `Dark` - Represents a dark disc. Dark moves first.
/// * `Light` - Represents a light disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Dark,
    Light,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Dark`
    /// * `'O'` for `Disc::Light`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Dark => 'X',
            Disc::Light => 'O',
        }
    }

    /// Returns the opposite disc.
    ///
    /// # Returns
    ///
    /// * `Disc::Light` for `Disc::Dark`
    /// * `Disc::Dark` for `Disc::Light`
    /// * `Disc::Empty` for `Disc::Empty`
    pub fn opposite(&self) -> Disc {
        match self {
            Disc::Dark => Disc::Light,
            Disc::Light => Disc::Dark,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Parses a board character back into a disc.
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            'X' | 'x' => Some(Disc::Dark),
            'O' | 'o' => Some(Disc::Light),
            '-' | '.' => Some(Disc::Empty),
            _ => None,
        }
    }
}
