//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Floating-point evaluation score, always from Light's point of view
/// inside the search.
pub type Scoref = f64;

/// Sentinel larger than any evaluation the evaluator can produce.
pub const SCORE_INF: Scoref = f64::INFINITY;
