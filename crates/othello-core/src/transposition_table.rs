//! Bucketed transposition cache keyed by Zobrist fingerprint.
//!
//! The fingerprint is compressed into a bucket index with a random
//! multiply-add-modulo step. Each bucket holds a short list of entries
//! matched by fingerprint equality, with the newest write for a fingerprint
//! replacing the old one.
//!
//! By default the cache is lossy: two different boards with the same 64-bit
//! fingerprint share an entry, and nothing is ever evicted. Both behaviours
//! can be tightened through [`CacheOptions`].

use rand::Rng;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Disc;
use crate::types::Scoref;

/// Prime modulus of the bucket-index compression step.
const INDEX_PRIME: u64 = 109_345_121;

/// Largest supported table size; the compression step cannot address more
/// buckets than `INDEX_PRIME`.
const MAX_SIZE_LOG2: u32 = 26;

/// Sizing and precision knobs of the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    /// Log2 of the number of buckets.
    pub size_log2: u32,
    /// Verify both color occupancies on probe, rejecting fingerprint collisions.
    pub exact: bool,
    /// Maximum entries per bucket; the oldest entry is dropped on overflow.
    pub max_bucket_len: Option<usize>,
}

impl Default for CacheOptions {
    fn default() -> Self {
        CacheOptions {
            size_log2: 16,
            exact: false,
            max_bucket_len: None,
        }
    }
}

/// A cached search result, stored from Light's point of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TTEntry {
    pub value: Scoref,
}

/// Probe and store counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
}

#[derive(Clone, Debug)]
struct Slot {
    key: u64,
    occupancy: Option<(Bitboard, Bitboard)>,
    entry: TTEntry,
}

pub struct TranspositionTable {
    buckets: Vec<Vec<Slot>>,
    capacity: u64,
    a: u64,
    b: u64,
    options: CacheOptions,
    len: usize,
    stats: CacheStats,
}

impl TranspositionTable {
    /// Creates an empty table.
    ///
    /// # Arguments
    ///
    /// * `options` - Size and precision settings
    /// * `rng` - Source of the compression constants
    pub fn new<R: Rng + ?Sized>(options: CacheOptions, rng: &mut R) -> Self {
        let size_log2 = options.size_log2.min(MAX_SIZE_LOG2);
        let capacity = 1u64 << size_log2;
        let mut buckets = Vec::with_capacity(capacity as usize);
        buckets.resize_with(capacity as usize, Vec::new);

        TranspositionTable {
            buckets,
            capacity,
            a: rng.random_range(1..INDEX_PRIME),
            b: rng.random_range(0..INDEX_PRIME),
            options: CacheOptions {
                size_log2,
                ..options
            },
            len: 0,
            stats: CacheStats::default(),
        }
    }

    /// Compresses a fingerprint into a bucket index.
    #[inline]
    fn index(&self, key: u64) -> usize {
        let mixed = (self.a as u128 * key as u128 + self.b as u128) % INDEX_PRIME as u128;
        (mixed as u64 % self.capacity) as usize
    }

    #[inline]
    fn occupancy(board: &Board) -> (Bitboard, Bitboard) {
        (board.occupancy(Disc::Dark), board.occupancy(Disc::Light))
    }

    /// Looks up the entry stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - Fingerprint of `board`
    /// * `board` - The queried position, consulted only in exact mode
    ///
    /// # Returns
    ///
    /// The stored entry, or `None` on a miss.
    pub fn probe(&mut self, key: u64, board: &Board) -> Option<TTEntry> {
        let index = self.index(key);
        let exact = self.options.exact;
        let found = self.buckets[index]
            .iter()
            .find(|slot| slot.key == key)
            .filter(|slot| !exact || slot.occupancy == Some(Self::occupancy(board)))
            .map(|slot| slot.entry);

        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Stores `entry` for `key`, replacing any entry with the same fingerprint.
    pub fn store(&mut self, key: u64, board: &Board, entry: TTEntry) {
        let index = self.index(key);
        let occupancy = self.options.exact.then(|| Self::occupancy(board));
        let max_len = self.options.max_bucket_len;
        self.stats.stores += 1;

        let bucket = &mut self.buckets[index];
        if let Some(slot) = bucket.iter_mut().find(|slot| slot.key == key) {
            slot.occupancy = occupancy;
            slot.entry = entry;
            return;
        }

        if max_len.is_some_and(|max_len| bucket.len() >= max_len.max(1)) {
            bucket.remove(0);
            self.len -= 1;
        }
        bucket.push(Slot {
            key,
            occupancy,
            entry,
        });
        self.len += 1;
    }

    /// Removes every entry and resets the counters.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
        self.stats = CacheStats::default();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::square::Square;

    fn table(options: CacheOptions) -> TranspositionTable {
        TranspositionTable::new(options, &mut StdRng::seed_from_u64(42))
    }

    fn entry(value: Scoref) -> TTEntry {
        TTEntry { value }
    }

    #[test]
    fn test_new() {
        let tt = table(CacheOptions {
            size_log2: 4,
            ..Default::default()
        });
        assert_eq!(tt.capacity(), 16);
        assert!(tt.is_empty());
    }

    #[test]
    fn test_size_is_clamped() {
        let tt = table(CacheOptions {
            size_log2: 40,
            ..Default::default()
        });
        assert_eq!(tt.options().size_log2, MAX_SIZE_LOG2);
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = table(CacheOptions::default());
        let board = Board::new();
        assert_eq!(tt.probe(123, &board), None);
        tt.store(123, &board, entry(1.5));
        assert_eq!(tt.probe(123, &board), Some(entry(1.5)));
        assert_eq!(tt.probe(124, &board), None);

        let stats = tt.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.stores, 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut tt = table(CacheOptions::default());
        let board = Board::new();
        tt.store(7, &board, entry(1.0));
        tt.store(7, &board, entry(-2.0));
        assert_eq!(tt.len(), 1);
        assert_eq!(tt.probe(7, &board).map(|e| e.value), Some(-2.0));
    }

    #[test]
    fn test_lossy_mode_returns_colliding_entry() {
        let mut tt = table(CacheOptions::default());
        let board = Board::new();
        let other = board.try_make_move(Square::D3).unwrap();
        tt.store(99, &board, entry(3.0));
        // Same fingerprint, different board: accepted in lossy mode.
        assert_eq!(tt.probe(99, &other), Some(entry(3.0)));
    }

    #[test]
    fn test_exact_mode_rejects_collision() {
        let mut tt = table(CacheOptions {
            exact: true,
            ..Default::default()
        });
        let board = Board::new();
        let other = board.try_make_move(Square::D3).unwrap();
        tt.store(99, &board, entry(3.0));
        assert_eq!(tt.probe(99, &other), None);
        assert_eq!(tt.probe(99, &board), Some(entry(3.0)));
    }

    #[test]
    fn test_bucket_bound_evicts_oldest() {
        let mut tt = table(CacheOptions {
            size_log2: 0,
            max_bucket_len: Some(2),
            ..Default::default()
        });
        let board = Board::new();
        tt.store(1, &board, entry(1.0));
        tt.store(2, &board, entry(2.0));
        tt.store(3, &board, entry(3.0));
        assert_eq!(tt.len(), 2);
        assert_eq!(tt.probe(1, &board), None);
        assert!(tt.probe(2, &board).is_some());
        assert!(tt.probe(3, &board).is_some());
    }

    #[test]
    fn test_unbounded_buckets_grow() {
        let mut tt = table(CacheOptions {
            size_log2: 0,
            ..Default::default()
        });
        let board = Board::new();
        for key in 0..100 {
            tt.store(key, &board, entry(key as Scoref));
        }
        assert_eq!(tt.len(), 100);
        for key in 0..100 {
            assert_eq!(tt.probe(key, &board).map(|e| e.value), Some(key as Scoref));
        }
    }

    #[test]
    fn test_clear() {
        let mut tt = table(CacheOptions::default());
        let board = Board::new();
        tt.store(5, &board, entry(0.5));
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.probe(5, &board), None);
        assert_eq!(tt.stats().stores, 0);
    }
}
