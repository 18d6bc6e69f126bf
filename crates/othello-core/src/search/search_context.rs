//! Search context for maintaining state during game tree search.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::eval::Evaluator;
use crate::move_list::MoveList;
use crate::search::depth_policy::DepthPolicy;
use crate::search::game_tree::{GameTree, NodeId};
use crate::search::options::SearchOptions;
use crate::search::time_control::TimeControl;
use crate::transposition_table::{TTEntry, TranspositionTable};
use crate::types::Depth;
use crate::zobrist::Zobrist;

/// State shared by every node of a search, created once per game session.
///
/// The fingerprint table, transposition cache and (optionally) the explored
/// game tree persist across moves; the counters and clock are reset by
/// [`SearchContext::begin`] at the start of each move.
pub struct SearchContext {
    /// Number of nodes searched for the current move
    pub n_nodes: u64,
    /// Children whose value came from the cache
    pub cache_hits: u64,
    /// Root depth after adaptive shrinking
    pub root_depth: Depth,
    /// Set once the time budget stopped the search early
    pub timed_out: bool,
    pub time: TimeControl,
    pub policy: DepthPolicy,
    pub corner_cutoff: bool,
    pub lookahead_mobility: bool,
    use_cache: bool,
    evaluator: Evaluator,
    zobrist: Zobrist,
    tt: TranspositionTable,
    tree: Option<GameTree>,
}

impl SearchContext {
    /// Creates a context from engine options.
    ///
    /// # Arguments
    /// * `options` - Engine configuration; `options.seed` fixes the random
    ///   fingerprint and cache constants.
    pub fn new(options: &SearchOptions) -> Self {
        let seed = options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let zobrist = Zobrist::new(&mut rng);
        let tt = TranspositionTable::new(options.cache, &mut rng);

        SearchContext {
            n_nodes: 0,
            cache_hits: 0,
            root_depth: 0,
            timed_out: false,
            time: TimeControl::new(options.time_budget),
            policy: options.depth_policy,
            corner_cutoff: options.corner_cutoff,
            lookahead_mobility: options.lookahead_mobility,
            use_cache: options.use_cache,
            evaluator: Evaluator::new(options.eval),
            zobrist,
            tt,
            tree: options.retain_tree.then(|| GameTree::new(Board::new())),
        }
    }

    /// Resets per-move counters and starts the clock.
    pub fn begin(&mut self, budget: Option<Duration>) {
        self.n_nodes = 0;
        self.cache_hits = 0;
        self.root_depth = 0;
        self.timed_out = false;
        self.time = TimeControl::new(budget);
    }

    /// Forgets everything learned during the current game.
    pub fn clear(&mut self) {
        self.tt.clear();
        if let Some(tree) = self.tree.as_mut() {
            tree.reset(Board::new());
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn tree(&self) -> Option<&GameTree> {
        self.tree.as_ref()
    }

    #[inline]
    pub fn fingerprint(&self, board: &Board) -> u64 {
        self.zobrist.hash(board)
    }

    /// Looks `board` up in the transposition cache.
    ///
    /// # Returns
    /// The cached entry, or `None` on a miss or when caching is disabled.
    pub fn probe(&mut self, board: &Board) -> Option<TTEntry> {
        if !self.use_cache {
            return None;
        }
        let key = self.fingerprint(board);
        let entry = self.tt.probe(key, board);
        if entry.is_some() {
            self.cache_hits += 1;
        }
        entry
    }

    /// Records a searched value for `board`.
    pub fn store(&mut self, board: &Board, entry: TTEntry) {
        if self.use_cache {
            let key = self.fingerprint(board);
            self.tt.store(key, board, entry);
        }
    }

    /// Returns the moves of `board`, taken from the game tree when `node`
    /// is known there.
    pub fn move_list(&mut self, board: &Board, node: Option<NodeId>) -> MoveList {
        match (self.tree.as_mut(), node) {
            (Some(tree), Some(id)) => tree.moves(id).clone(),
            _ => MoveList::new(board),
        }
    }

    /// Returns the tree node of `child` below `parent`, allocating it if new.
    pub fn child_node(&mut self, parent: Option<NodeId>, child: &Board) -> Option<NodeId> {
        let parent = parent?;
        self.tree
            .as_mut()
            .map(|tree| tree.find_or_insert_child(parent, child))
    }

    /// Moves the game tree to `board`, returning its node.
    ///
    /// # Returns
    /// `None` when no tree is retained.
    pub fn sync(&mut self, board: &Board) -> Option<NodeId> {
        let tree = self.tree.as_mut()?;
        let before = tree.len();
        let id = tree.advance(board);
        tracing::trace!(nodes_before = before, nodes_after = tree.len(), "game tree advanced");
        Some(id)
    }
}
