//! Persistent tree of explored positions.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Each node caches
//! the move list of its position, so re-entering a subtree that was explored
//! on an earlier turn does not regenerate moves. Children are matched by
//! board equality; a new node is allocated only for an unseen position.

use crate::board::Board;
use crate::move_list::MoveList;

/// Index of a node inside a [`GameTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct TreeNode {
    board: Board,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    moves: Option<MoveList>,
}

impl TreeNode {
    fn new(board: Board, parent: Option<NodeId>) -> Self {
        TreeNode {
            board,
            parent,
            children: Vec::new(),
            moves: None,
        }
    }
}

pub struct GameTree {
    nodes: Vec<TreeNode>,
    current: NodeId,
}

impl GameTree {
    /// Creates a tree holding only `board`.
    pub fn new(board: Board) -> Self {
        GameTree {
            nodes: vec![TreeNode::new(board, None)],
            current: NodeId(0),
        }
    }

    /// Drops every node and restarts from `board`.
    pub fn reset(&mut self, board: Board) {
        self.nodes.clear();
        self.nodes.push(TreeNode::new(board, None));
        self.current = NodeId(0);
    }

    /// The node of the position currently on the board.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn board(&self, id: NodeId) -> &Board {
        &self.nodes[id.0].board
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Finds the child of `parent` whose board equals `board`.
    pub fn find_child(&self, parent: NodeId, board: &Board) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].board == *board)
    }

    /// Returns the child of `parent` matching `board`, allocating it if absent.
    pub fn find_or_insert_child(&mut self, parent: NodeId, board: &Board) -> NodeId {
        if let Some(child) = self.find_child(parent, board) {
            return child;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(*board, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Returns the move list of a node, generating and caching it on first use.
    pub fn moves(&mut self, id: NodeId) -> &MoveList {
        let node = &mut self.nodes[id.0];
        let board = node.board;
        node.moves.get_or_insert_with(|| MoveList::new(&board))
    }

    /// Moves `current` to the node holding `board` and discards every node
    /// outside its subtree.
    ///
    /// A board equal to the current one (a pass) keeps the current node. A
    /// board that is neither current nor a child of current is inserted as a
    /// new child first.
    pub fn advance(&mut self, board: &Board) -> NodeId {
        let current = &self.nodes[self.current.0].board;
        if current == board && current.side_to_move() == board.side_to_move() {
            return self.current;
        }
        if current != board {
            self.current = self.find_or_insert_child(self.current, board);
        }
        self.sync_side_to_move(self.current, board);
        self.reroot();
        self.current
    }

    /// Equal boards may differ in side to move after a pass; the cached moves
    /// and children of such a node belong to the other color.
    fn sync_side_to_move(&mut self, id: NodeId, board: &Board) {
        let node = &mut self.nodes[id.0];
        if node.board.side_to_move() != board.side_to_move() {
            node.board = *board;
            node.moves = None;
            node.children.clear();
        }
    }

    /// Rebuilds the arena so that it holds only `current` and its descendants.
    fn reroot(&mut self) {
        let mut nodes: Vec<TreeNode> = Vec::new();
        let mut stack = vec![(self.current, None)];

        while let Some((old_id, new_parent)) = stack.pop() {
            let new_id = NodeId(nodes.len());
            let old = &self.nodes[old_id.0];
            nodes.push(TreeNode {
                board: old.board,
                parent: new_parent,
                children: Vec::with_capacity(old.children.len()),
                moves: old.moves.clone(),
            });
            if let Some(NodeId(parent)) = new_parent {
                nodes[parent].children.push(new_id);
            }
            for &child in old.children.iter().rev() {
                stack.push((child, Some(new_id)));
            }
        }

        self.nodes = nodes;
        self.current = NodeId(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_find_or_insert_reuses_equal_board() {
        let root_board = Board::new();
        let mut tree = GameTree::new(root_board);
        let root = tree.current();
        let child_board = root_board.try_make_move(Square::D3).unwrap();

        let a = tree.find_or_insert_child(root, &child_board);
        let b = tree.find_or_insert_child(root, &child_board);
        assert_eq!(a, b);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.children(root), &[a]);
        assert_eq!(tree.parent(a), Some(root));
    }

    #[test]
    fn test_moves_are_cached() {
        let mut tree = GameTree::new(Board::new());
        let root = tree.current();
        assert_eq!(tree.moves(root).count(), 4);
        assert_eq!(tree.moves(root).count(), 4);
    }

    #[test]
    fn test_advance_keeps_explored_subtree() {
        let board = Board::new();
        let mut tree = GameTree::new(board);
        let root = tree.current();

        let d3 = board.try_make_move(Square::D3).unwrap();
        let c4 = board.try_make_move(Square::C4).unwrap();
        let d3_node = tree.find_or_insert_child(root, &d3);
        tree.find_or_insert_child(root, &c4);
        let d3_c3 = d3.try_make_move(Square::C3).unwrap();
        tree.find_or_insert_child(d3_node, &d3_c3);
        assert_eq!(tree.len(), 4);

        let current = tree.advance(&d3);
        assert_eq!(tree.board(current), &d3);
        // Sibling C4 is gone, the grandchild survives.
        assert_eq!(tree.len(), 2);
        assert!(tree.find_child(current, &d3_c3).is_some());
        assert_eq!(tree.parent(current), None);
    }

    #[test]
    fn test_advance_to_unknown_board_inserts() {
        let board = Board::new();
        let mut tree = GameTree::new(board);
        let f5 = board.try_make_move(Square::F5).unwrap();
        let current = tree.advance(&f5);
        assert_eq!(tree.board(current), &f5);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_advance_on_pass_refreshes_mover() {
        let board = Board::new();
        let mut tree = GameTree::new(board);
        let passed = board.pass();
        let current = tree.advance(&passed);
        assert_eq!(tree.board(current).side_to_move(), passed.side_to_move());
        assert_eq!(tree.moves(current).count(), 4);
    }

    #[test]
    fn test_reset() {
        let board = Board::new();
        let mut tree = GameTree::new(board);
        let root = tree.current();
        tree.find_or_insert_child(root, &board.try_make_move(Square::D3).unwrap());
        tree.reset(board);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
    }
}
