//! Game tree search engine.
//!
//! A depth-first minimax search with alpha-beta pruning. Values are always
//! expressed from Light's point of view: Light maximizes and Dark minimizes,
//! whichever color asked for a move. Moves are searched in generator order
//! (row-major), which keeps the chosen move reproducible.

pub mod depth_policy;
pub mod game_tree;
pub mod options;
pub mod search_context;
pub mod search_result;
pub mod time_control;

use std::slice;
use std::time::Duration;

use crate::board::Board;
use crate::disc::Disc;
use crate::move_list::MoveList;
use crate::search::game_tree::NodeId;
use crate::search::options::SearchOptions;
use crate::search::search_context::SearchContext;
use crate::search::search_result::{MoveDecision, SearchResult};
use crate::square::Square;
use crate::transposition_table::{CacheStats, TTEntry};
use crate::types::{Depth, SCORE_INF, Scoref};

/// Main search engine structure.
///
/// Holds a [`SearchContext`] for the whole game, so the transposition cache
/// and the optional game tree carry over from one move to the next.
pub struct Search {
    ctx: SearchContext,
    options: SearchOptions,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            ctx: SearchContext::new(options),
            options: *options,
        }
    }

    /// Resets the search state for a new game.
    pub fn new_game(&mut self) {
        self.ctx.clear();
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Cumulative transposition cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.ctx.tt().stats()
    }

    /// Number of nodes in the retained game tree, if one is kept.
    pub fn tree_len(&self) -> Option<usize> {
        self.ctx.tree().map(|tree| tree.len())
    }

    /// Tells the engine about a move played on the real board.
    ///
    /// Only needed when the game tree is retained; otherwise a no-op.
    pub fn sync(&mut self, board: &Board) {
        self.ctx.sync(board);
    }

    /// Chooses a move for `color` using the configured time budget.
    pub fn run(&mut self, board: &Board, color: Disc) -> SearchResult {
        self.run_with_budget(board, color, self.options.time_budget)
    }

    /// Chooses a move for `color` on `board`.
    ///
    /// The board is never modified; search runs on copies.
    ///
    /// # Arguments
    ///
    /// * `board` - The current position.
    /// * `color` - The color to move. If it differs from the board's side to
    ///   move, legal moves are regenerated for `color`.
    /// * `budget` - Wall-clock allowance, `None` for unlimited.
    ///
    /// # Returns
    ///
    /// The chosen move and its value. `best_move` is `None` only when
    /// `color` has no legal move.
    pub fn run_with_budget(
        &mut self,
        board: &Board,
        color: Disc,
        budget: Option<Duration>,
    ) -> SearchResult {
        let mut root = *board;
        if root.side_to_move() != color {
            root.recompute_legal_moves(color);
        }

        self.ctx.begin(budget);
        let node = self.ctx.sync(&root);
        let depth = self
            .ctx
            .policy
            .depth_for(root.legal_moves().count(), self.ctx.time.is_exhausted());

        let (value, best_move) = alpha_beta(&mut self.ctx, &root, node, depth, -SCORE_INF, SCORE_INF, 0);

        let result = SearchResult {
            value,
            best_move,
            depth: self.ctx.root_depth,
            n_nodes: self.ctx.n_nodes,
            cache_hits: self.ctx.cache_hits,
            elapsed: self.ctx.time.elapsed(),
            timed_out: self.ctx.timed_out,
        };

        tracing::debug!(
            color = ?color,
            best_move = %best_move.unwrap_or(Square::None),
            value = result.value,
            depth = result.depth,
            nodes = result.n_nodes,
            cache_hits = result.cache_hits,
            elapsed_ms = result.elapsed.as_millis() as u64,
            timed_out = result.timed_out,
            "search finished"
        );
        result
    }

    /// Answers a move request from the game layer.
    ///
    /// # Returns
    ///
    /// `Some` whenever `color` has a legal move, even if the budget is
    /// already exhausted; `None` if `color` must pass.
    pub fn request_move(
        &mut self,
        board: &Board,
        color: Disc,
        budget: Option<Duration>,
    ) -> Option<MoveDecision> {
        self.run_with_budget(board, color, budget).decision()
    }
}

/// Searches `board` for its side to move.
///
/// # Arguments
///
/// * `ctx` - Search context with cache, clock and policy
/// * `board` - The position; its side to move is the player
/// * `node` - The position's game tree node, if a tree is retained
/// * `depth` - Remaining plies
/// * `alpha` - Lower bound of the window
/// * `beta` - Upper bound of the window
///
/// # Returns
///
/// The value of the position from Light's point of view and the best move,
/// or no move at a terminal node.
pub fn search(
    ctx: &mut SearchContext,
    board: &Board,
    node: Option<NodeId>,
    depth: Depth,
    alpha: Scoref,
    beta: Scoref,
) -> (Scoref, Option<Square>) {
    alpha_beta(ctx, board, node, depth, alpha, beta, 0)
}

fn alpha_beta(
    ctx: &mut SearchContext,
    board: &Board,
    node: Option<NodeId>,
    mut depth: Depth,
    mut alpha: Scoref,
    mut beta: Scoref,
    ply: u32,
) -> (Scoref, Option<Square>) {
    ctx.n_nodes += 1;

    let move_list = ctx.move_list(board, node);
    if depth == 0 || move_list.is_empty() {
        return (evaluate_leaf(ctx, board, &move_list), None);
    }

    let maximizing = board.side_to_move() == Disc::Light;
    let mut best_value = if maximizing { -SCORE_INF } else { SCORE_INF };
    let mut best_move = None;

    // A corner is taken without looking at its siblings.
    let candidates = match move_list.corner_move() {
        Some(corner) if ctx.corner_cutoff => slice::from_ref(corner),
        _ => move_list.as_slice(),
    };

    for mv in candidates {
        if ctx.time.is_exhausted() {
            if !ctx.timed_out {
                tracing::trace!(ply, "time budget exhausted");
            }
            ctx.timed_out = true;
            break;
        }

        let child = board.make_move_with_flipped(mv.flipped, mv.sq);
        let child_node = ctx.child_node(node, &child);
        depth = depth.min(
            ctx.policy
                .depth_for(child.legal_moves().count(), ctx.time.is_exhausted()),
        );

        let child_value = match ctx.probe(&child) {
            Some(entry) => entry.value,
            None => {
                let (value, _) = alpha_beta(ctx, &child, child_node, depth - 1, alpha, beta, ply + 1);
                ctx.store(&child, TTEntry { value });
                value
            }
        };

        if maximizing {
            if child_value > best_value {
                best_value = child_value;
                best_move = Some(mv.sq);
            }
            alpha = alpha.max(best_value);
        } else {
            if child_value < best_value {
                best_value = child_value;
                best_move = Some(mv.sq);
            }
            beta = beta.min(best_value);
        }

        if beta <= alpha {
            break;
        }
    }

    if ply == 0 {
        ctx.root_depth = depth;
    }

    if best_move.is_none() {
        // Nothing was searched before the clock ran out.
        let first = move_list.first().map(|m| m.sq);
        if ply == 0 {
            tracing::warn!(fallback = %first.unwrap_or(Square::None), "no move searched in time, playing first legal move");
        }
        return (evaluate_leaf(ctx, board, &move_list), first);
    }

    (best_value, best_move)
}

/// Scores a position where the search stops.
///
/// With lookahead mobility the plain mobility differential is replaced by the
/// mover's move count against the largest reply count among its moves.
fn evaluate_leaf(ctx: &SearchContext, board: &Board, move_list: &MoveList) -> Scoref {
    let evaluator = ctx.evaluator();
    if !ctx.lookahead_mobility {
        return evaluator.evaluate(board, Disc::Light);
    }

    let best_reply = move_list
        .iter()
        .map(|m| {
            board
                .make_move_with_flipped(m.flipped, m.sq)
                .legal_moves()
                .count()
        })
        .max()
        .unwrap_or(0);
    let mobility = evaluator.mobility_term(move_list.count() as u32, best_reply);
    let sign = if board.side_to_move() == Disc::Light { 1.0 } else { -1.0 };

    evaluator.evaluate_static(board, Disc::Light) + sign * mobility
}
