//! The validated pool of catalog entries.
//!
//! A `Catalog` is assembled once from already-ingested entries,
//! validated (non-empty, unique ids), and then only read. It outlives
//! any single session; sessions borrow it.

use rustc_hash::FxHashMap;

use super::entry::{CatalogEntry, EntryId};
use crate::core::ConfigError;

/// Read-only pool of entries a session draws from.
///
/// Construction is the one place catalog-level problems can surface;
/// afterwards every lookup is infallible or returns `Option`.
///
/// ## Example
///
/// ```
/// use chronology::catalog::{Catalog, CatalogEntry, EntryId};
///
/// let catalog = Catalog::new(vec![
///     CatalogEntry::new(EntryId::new(1), "Hey Jude", 1968),
///     CatalogEntry::new(EntryId::new(2), "Billie Jean", 1982),
/// ]).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(EntryId::new(1)).unwrap().order_key, 1968);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: FxHashMap<EntryId, usize>,
}

impl Catalog {
    /// Build a catalog from ingested entries.
    ///
    /// Fails with [`ConfigError::EmptyCatalog`] on empty input and
    /// [`ConfigError::DuplicateEntryId`] if two entries share an id.
    /// Duplicate `order_key` values are permitted; the candidate
    /// selector keeps them off a single timeline.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.id, i).is_some() {
                return Err(ConfigError::DuplicateEntryId(entry.id));
            }
        }

        Ok(Self { entries, index })
    }

    /// Get an entry by ID.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    /// Check if an entry ID is present.
    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of entries. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Present for API completeness; a constructed catalog is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in ingestion order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Derive a sub-pool of the entries matching a predicate.
    ///
    /// This is how "popular only" style pools are built: the caller
    /// supplies the policy (say, `popularity >= 75` from metadata) and
    /// decides what to do when nothing matches - the engine just
    /// reports the empty result as [`ConfigError::EmptyCatalog`].
    pub fn filtered<F>(&self, predicate: F) -> Result<Catalog, ConfigError>
    where
        F: Fn(&CatalogEntry) -> bool,
    {
        Catalog::new(
            self.entries
                .iter()
                .filter(|e| predicate(e))
                .cloned()
                .collect(),
        )
    }
}
