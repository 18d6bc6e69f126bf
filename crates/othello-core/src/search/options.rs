use std::time::Duration;

use crate::eval::EvalWeights;
use crate::level::{DEFAULT_LEVEL, get_level};
use crate::search::depth_policy::DepthPolicy;
use crate::search::time_control::DEFAULT_TIME_BUDGET;
use crate::transposition_table::CacheOptions;
use crate::types::Depth;

/// Engine configuration, fixed for the lifetime of a [`crate::search::Search`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    pub depth_policy: DepthPolicy,
    /// Default per-move budget; `None` searches without a time limit.
    pub time_budget: Option<Duration>,
    /// Reuse values from the transposition cache.
    pub use_cache: bool,
    pub cache: CacheOptions,
    /// Take a corner as soon as it is found among a node's moves.
    pub corner_cutoff: bool,
    /// Score leaves with the mover's mobility against its best reply instead
    /// of the plain mobility differential.
    pub lookahead_mobility: bool,
    /// Keep the explored game tree across turns.
    pub retain_tree: bool,
    pub eval: EvalWeights,
    /// Seed of the fingerprint and cache random constants.
    pub seed: Option<u64>,
}

impl SearchOptions {
    /// Create search options for a difficulty level with defaults for
    /// everything else.
    #[must_use]
    pub fn new(level: usize) -> Self {
        SearchOptions {
            depth_policy: DepthPolicy::Adaptive(get_level(level)),
            ..Default::default()
        }
    }

    /// Search every move to the same depth.
    #[must_use]
    pub fn with_fixed_depth(mut self, depth: Depth) -> Self {
        self.depth_policy = DepthPolicy::Fixed(depth);
        self
    }

    #[must_use]
    pub fn with_depth_policy(mut self, depth_policy: DepthPolicy) -> Self {
        self.depth_policy = depth_policy;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, time_budget: Option<Duration>) -> Self {
        self.time_budget = time_budget;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Override the cache size, collision check and bucket bound.
    #[must_use]
    pub fn with_cache_options(mut self, cache: CacheOptions) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn with_corner_cutoff(mut self, corner_cutoff: bool) -> Self {
        self.corner_cutoff = corner_cutoff;
        self
    }

    #[must_use]
    pub fn with_lookahead_mobility(mut self, lookahead_mobility: bool) -> Self {
        self.lookahead_mobility = lookahead_mobility;
        self
    }

    #[must_use]
    pub fn with_retain_tree(mut self, retain_tree: bool) -> Self {
        self.retain_tree = retain_tree;
        self
    }

    #[must_use]
    pub fn with_eval_weights(mut self, eval: EvalWeights) -> Self {
        self.eval = eval;
        self
    }

    /// Fix the random constants so that runs are reproducible; `None` draws
    /// fresh ones for every new context.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth_policy: DepthPolicy::Adaptive(get_level(DEFAULT_LEVEL)),
            time_budget: Some(DEFAULT_TIME_BUDGET),
            use_cache: true,
            cache: CacheOptions::default(),
            corner_cutoff: true,
            lookahead_mobility: false,
            retain_tree: false,
            eval: EvalWeights::default(),
            seed: None,
        }
    }
}
