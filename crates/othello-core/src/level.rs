//! Game difficulty levels and search depth configuration.

use crate::search::depth_policy::AdaptiveDepth;

/// The level used when none is requested.
pub const DEFAULT_LEVEL: usize = 4;

/// Depth schedules by level, weakest first.
///
/// Each entry is `(wide_threshold, wide_depth, medium_threshold,
/// medium_depth, narrow_depth)`: positions with more than 8 legal moves use
/// the wide depth, more than 5 the medium depth, anything else the narrow
/// depth.
#[rustfmt::skip]
const LEVELS: [AdaptiveDepth; 9] = [
    AdaptiveDepth::new(8, 1, 5, 1, 1),
    AdaptiveDepth::new(8, 1, 5, 2, 2),
    AdaptiveDepth::new(8, 2, 5, 2, 3),
    AdaptiveDepth::new(8, 2, 5, 3, 4),
    AdaptiveDepth::new(8, 3, 5, 4, 5),
    AdaptiveDepth::new(8, 4, 5, 5, 6),
    AdaptiveDepth::new(8, 5, 5, 6, 7),
    AdaptiveDepth::new(8, 6, 5, 7, 8),
    AdaptiveDepth::new(8, 7, 5, 8, 9),
];

/// Number of available levels.
pub const N_LEVELS: usize = LEVELS.len();

/// Retrieves the depth schedule for a specific difficulty level.
///
/// # Arguments
///
/// * `lv` - The level index (0-8), where 0 is the weakest and 8 the strongest.
///
/// # Returns
///
/// The `AdaptiveDepth` schedule of that level.
///
/// # Panics
///
/// Panics if `lv` is outside the valid range of 0-8.
pub fn get_level(lv: usize) -> AdaptiveDepth {
    if lv >= LEVELS.len() {
        panic!(
            "Invalid level: {}. Valid range is 0 to {}",
            lv,
            LEVELS.len() - 1
        );
    }
    LEVELS[lv]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_matches_default_schedule() {
        assert_eq!(get_level(DEFAULT_LEVEL), AdaptiveDepth::default());
    }

    #[test]
    fn test_levels_are_monotonic() {
        for pair in LEVELS.windows(2) {
            assert!(pair[0].wide_depth <= pair[1].wide_depth);
            assert!(pair[0].medium_depth <= pair[1].medium_depth);
            assert!(pair[0].narrow_depth <= pair[1].narrow_depth);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid level")]
    fn test_invalid_level() {
        get_level(N_LEVELS);
    }
}
