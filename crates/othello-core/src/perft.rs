use crate::board::Board;
use crate::move_list::MoveList;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total leaf count of the move tree.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), depth)
}

/// Counts the leaves of the move tree below `board`.
///
/// A pass does not consume depth, and a finished game counts as one leaf.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let mut nodes = 0;
    let move_list = MoveList::new(board);

    if move_list.count() > 0 {
        for m in move_list.iter() {
            if depth <= 1 {
                nodes += 1;
            } else {
                let next = board.make_move_with_flipped(m.flipped, m.sq);
                nodes += perft(&next, depth - 1);
            }
        }
    } else {
        let next = board.pass();
        if next.has_legal_moves() {
            nodes += perft(&next, depth);
        } else {
            nodes += 1;
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_perft() {
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 12);
        assert_eq!(perft_root(3), 56);
    }
}
