//! Non-repeating candidate selection.
//!
//! The selector tracks the session's used entry ids and used order
//! keys, and draws uniformly from whatever remains. Excluding by key
//! as well as id keeps two same-year entries from ever coexisting on
//! one timeline, where "strictly increasing" placement would become
//! ambiguous - a design constraint, not an incidental limitation.

use rustc_hash::FxHashSet;

use crate::catalog::{Catalog, CatalogEntry, EntryId};
use crate::core::GameRng;

/// Draws the next unused entry under the no-repeats contract.
///
/// Draws are side-effect free: the caller commits a draw with
/// [`CandidateSelector::mark_used`] only once the round resolves, so a
/// cancelled round leaves no trace.
#[derive(Clone, Debug, Default)]
pub struct CandidateSelector {
    used_ids: FxHashSet<EntryId>,
    used_keys: FxHashSet<i64>,
}

impl CandidateSelector {
    /// Create a selector with empty used-sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a uniformly random entry whose id and order key are both
    /// unused.
    ///
    /// Returns `None` when no such entry remains - the deck is
    /// exhausted, a normal terminal condition rather than an error.
    #[must_use]
    pub fn draw<'a>(&self, catalog: &'a Catalog, rng: &mut GameRng) -> Option<&'a CatalogEntry> {
        let candidates: Vec<&CatalogEntry> = catalog
            .iter()
            .filter(|e| !self.used_ids.contains(&e.id) && !self.used_keys.contains(&e.order_key))
            .collect();

        rng.choose(&candidates).copied()
    }

    /// Mark an entry's id and order key as used.
    pub fn mark_used(&mut self, entry: &CatalogEntry) {
        self.used_ids.insert(entry.id);
        self.used_keys.insert(entry.order_key);
    }

    /// Whether an entry could still be drawn.
    #[must_use]
    pub fn is_available(&self, entry: &CatalogEntry) -> bool {
        !self.used_ids.contains(&entry.id) && !self.used_keys.contains(&entry.order_key)
    }

    /// Number of entries drawn (and committed) so far.
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used_ids.len()
    }
}
