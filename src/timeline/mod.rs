//! The timeline: placed entries in chronological order.
//!
//! ## Invariant
//!
//! The timeline's entries, read in order, always have strictly
//! increasing `order_key` values - no duplicates. The candidate
//! selector keeps same-key entries from ever being drawn against a
//! timeline that already holds that key; [`Timeline::is_valid_insertion`]
//! re-checks duplicates anyway so the judgment is self-contained.
//!
//! ## Key Operations
//!
//! - [`Timeline::is_valid_insertion`]: pure correctness judgment for a
//!   guessed slot
//! - [`Timeline::allowed_positions`]: the collapsed set of slots worth
//!   offering a player
//! - [`Timeline::insert`]: commit an entry at its true chronological
//!   position
//!
//! Backed by a persistent vector, so cloning a timeline for a snapshot
//! is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::CatalogEntry;

/// Offered insertion slots. Rarely more than a handful, so inline.
pub type Positions = SmallVec<[usize; 8]>;

/// The growing chronologically-consistent sequence of placed entries.
///
/// Created with exactly one seed entry at session start; grows by one
/// entry per resolved round; never shrinks.
///
/// ## Example
///
/// ```
/// use chronology::catalog::{CatalogEntry, EntryId};
/// use chronology::timeline::Timeline;
///
/// let mut tl = Timeline::seeded(CatalogEntry::new(EntryId::new(1), "Seed", 1990));
/// let candidate = CatalogEntry::new(EntryId::new(2), "Next", 1995);
///
/// assert!(tl.is_valid_insertion(&candidate, 1));  // after 1990
/// assert!(!tl.is_valid_insertion(&candidate, 0)); // before 1990
///
/// tl.insert(candidate);
/// assert_eq!(tl.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Kept sorted ascending by `order_key` at all times.
    entries: Vector<CatalogEntry>,
}

impl Timeline {
    /// Create a timeline holding a single seed entry.
    #[must_use]
    pub fn seeded(seed: CatalogEntry) -> Self {
        let mut entries = Vector::new();
        entries.push_back(seed);
        Self { entries }
    }

    /// Number of placed entries. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Present for API completeness; a timeline always has its seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at a position in the sorted view.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Iterate over placed entries, ascending by `order_key`.
    ///
    /// This is the render view: ties are impossible by invariant, so
    /// the order is total.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// An O(1) copy of the current timeline.
    ///
    /// Presentation layers that keep a per-round view can snapshot
    /// freely; the underlying storage is shared structurally.
    #[must_use]
    pub fn snapshot(&self) -> Timeline {
        self.clone()
    }

    /// Judge a guessed insertion slot. Pure: the timeline is unchanged.
    ///
    /// Splices the candidate's key into the sorted key projection at
    /// `insert_idx` (0-based, valid range `0..=len`) and returns whether
    /// the tentative sequence is strictly increasing - that is, sorted
    /// with no duplicate keys. An out-of-range index is simply wrong,
    /// never a panic.
    #[must_use]
    pub fn is_valid_insertion(&self, candidate: &CatalogEntry, insert_idx: usize) -> bool {
        if insert_idx > self.entries.len() {
            return false;
        }

        let mut keys: Vec<i64> = self.entries.iter().map(|e| e.order_key).collect();
        keys.insert(insert_idx, candidate.order_key);
        keys.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// The insertion slots worth offering a player.
    ///
    /// "Before first" (0) and "after last" (len) are always offered. A
    /// slot between two adjacent entries is offered only when the gap
    /// between their keys exceeds one unit: with consecutive years, no
    /// key could ever fit strictly between, so the slot would be a trap
    /// with no correct answer. Correctness is still judged against the
    /// real index space; this only restricts what is offered.
    #[must_use]
    pub fn allowed_positions(&self) -> Positions {
        let mut positions = Positions::new();
        positions.push(0);

        for i in 0..self.entries.len().saturating_sub(1) {
            let left = &self.entries[i];
            let right = &self.entries[i + 1];
            if right.order_key - left.order_key > 1 {
                positions.push(i + 1);
            }
        }

        positions.push(self.entries.len());
        positions
    }

    /// Commit an entry at its true chronological position.
    ///
    /// Called for every resolved round, correct guess or not - a wrong
    /// guess still reveals the entry and reconciles the timeline.
    /// Returns the index the entry landed at.
    pub fn insert(&mut self, entry: CatalogEntry) -> usize {
        let idx = self
            .entries
            .iter()
            .position(|e| e.order_key > entry.order_key)
            .unwrap_or(self.entries.len());

        self.entries.insert(idx, entry);
        debug_assert!(self.is_strictly_ordered());
        idx
    }

    /// Whether the sorted projection has strictly increasing keys.
    ///
    /// Holds at all times; exposed for tests and debug assertions.
    #[must_use]
    pub fn is_strictly_ordered(&self) -> bool {
        self.entries
            .iter()
            .zip(self.entries.iter().skip(1))
            .all(|(a, b)| a.order_key < b.order_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryId;

    fn entry(id: u32, key: i64) -> CatalogEntry {
        CatalogEntry::new(EntryId::new(id), format!("Song {}", id), key)
    }

    fn timeline(keys: &[i64]) -> Timeline {
        let mut iter = keys.iter().enumerate();
        let (_, &first) = iter.next().expect("at least one key");
        let mut tl = Timeline::seeded(entry(0, first));
        for (i, &key) in iter {
            tl.insert(entry(i as u32, key));
        }
        tl
    }

    #[test]
    fn test_seeded() {
        let tl = Timeline::seeded(entry(1, 1990));

        assert_eq!(tl.len(), 1);
        assert!(!tl.is_empty());
        assert_eq!(tl.get(0).unwrap().order_key, 1990);
    }

    #[test]
    fn test_valid_insertion_single_entry() {
        let tl = Timeline::seeded(entry(1, 1990));
        let later = entry(2, 1995);
        let earlier = entry(3, 1985);

        assert!(tl.is_valid_insertion(&later, 1));
        assert!(!tl.is_valid_insertion(&later, 0));
        assert!(tl.is_valid_insertion(&earlier, 0));
        assert!(!tl.is_valid_insertion(&earlier, 1));
    }

    #[test]
    fn test_valid_insertion_between() {
        let tl = timeline(&[1990, 2000]);
        let mid = entry(9, 1995);

        assert!(!tl.is_valid_insertion(&mid, 0));
        assert!(tl.is_valid_insertion(&mid, 1));
        assert!(!tl.is_valid_insertion(&mid, 2));
    }

    #[test]
    fn test_duplicate_key_never_valid() {
        let tl = timeline(&[1990, 2000]);
        let dup = entry(9, 1990);

        // No slot accepts a key already on the timeline
        for idx in 0..=tl.len() {
            assert!(!tl.is_valid_insertion(&dup, idx));
        }
    }

    #[test]
    fn test_out_of_range_index_is_wrong() {
        let tl = Timeline::seeded(entry(1, 1990));
        let cand = entry(2, 1995);

        assert!(!tl.is_valid_insertion(&cand, 2));
        assert!(!tl.is_valid_insertion(&cand, 100));
    }

    #[test]
    fn test_insert_commits_true_position() {
        let mut tl = timeline(&[1990, 2000]);

        // Committed at the true position regardless of any guess
        let idx = tl.insert(entry(9, 1995));
        assert_eq!(idx, 1);

        let keys: Vec<_> = tl.entries().map(|e| e.order_key).collect();
        assert_eq!(keys, vec![1990, 1995, 2000]);
        assert!(tl.is_strictly_ordered());
    }

    #[test]
    fn test_insert_at_ends() {
        let mut tl = timeline(&[1990, 2000]);

        assert_eq!(tl.insert(entry(8, 1980)), 0);
        assert_eq!(tl.insert(entry(9, 2010)), 3);

        let keys: Vec<_> = tl.entries().map(|e| e.order_key).collect();
        assert_eq!(keys, vec![1980, 1990, 2000, 2010]);
    }

    #[test]
    fn test_allowed_positions_always_offers_ends() {
        let tl = Timeline::seeded(entry(1, 1990));
        let positions = tl.allowed_positions();

        assert_eq!(positions.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_allowed_positions_collapses_adjacent_years() {
        // 1990/1991 are consecutive: nothing fits between them
        let tl = timeline(&[1990, 1991, 2000]);
        let positions = tl.allowed_positions();

        assert_eq!(positions.as_slice(), &[0, 2, 3]);
    }

    #[test]
    fn test_allowed_positions_offers_real_gaps() {
        let tl = timeline(&[1990, 1992, 2000]);
        let positions = tl.allowed_positions();

        assert_eq!(positions.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_never_offers_gap_of_one() {
        let tl = timeline(&[1990, 1991, 1992, 1993]);
        let positions = tl.allowed_positions();

        // Only the ends survive collapsing
        assert_eq!(positions.as_slice(), &[0, 4]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut tl = timeline(&[1990, 2000]);
        let snap = tl.snapshot();

        tl.insert(entry(9, 1995));

        assert_eq!(snap.len(), 2);
        assert_eq!(tl.len(), 3);
    }

    #[test]
    fn test_serialization() {
        let tl = timeline(&[1990, 1995, 2000]);

        let json = serde_json::to_string(&tl).unwrap();
        let deserialized: Timeline = serde_json::from_str(&json).unwrap();

        assert_eq!(tl, deserialized);
    }
}
