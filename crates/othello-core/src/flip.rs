//! Disc flip calculation for move execution.

use crate::bitboard::Bitboard;
use crate::square::{BOARD_SIZE, Square};

/// The eight `(row, col)` step vectors scanned from a placed disc.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Steps one square from `(row, col)` along `dir`, or `None` off the edge.
#[inline(always)]
fn step(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < BOARD_SIZE && c < BOARD_SIZE).then_some((r, c))
}

/// Collects the run of opponent discs bounded by an own disc in one direction.
///
/// # Returns
///
/// The bounded run, or an empty bitboard if the scan hits an empty square or
/// the board edge before an own disc.
#[inline]
fn flip_direction(sq: Square, dir: (isize, isize), p: Bitboard, o: Bitboard) -> Bitboard {
    let mut run = Bitboard::default();
    let mut pos = step(sq.row(), sq.col(), dir);

    while let Some((row, col)) = pos {
        let Some(next) = Square::from_row_col(row, col) else {
            break;
        };
        if o.contains(next) {
            run = run.set(next);
        } else if p.contains(next) {
            return run;
        } else {
            break;
        }
        pos = step(row, col, dir);
    }

    Bitboard::default()
}

/// Calculates which opponent discs would be flipped by placing a disc at the given square.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `p` - Bitboard representing the mover's discs
/// * `o` - Bitboard representing the opponent's discs
///
/// # Returns
///
/// A bitboard of all opponent discs flipped by this placement.
/// Empty if no discs would be flipped (illegal move).
pub fn flip(sq: Square, p: Bitboard, o: Bitboard) -> Bitboard {
    DIRECTIONS
        .iter()
        .fold(Bitboard::default(), |acc, &dir| {
            acc | flip_direction(sq, dir, p, o)
        })
}
