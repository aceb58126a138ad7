//! Catalog entries - the immutable dated items a session draws from.
//!
//! A `CatalogEntry` is created once at catalog-load time (by the
//! external ingestion layer) and never mutated afterward. Its
//! `order_key` - the year, here - is the chronological sort key the
//! whole game revolves around. Everything beyond id, display name, and
//! key lives in opaque `metadata`.

use serde::{Deserialize, Serialize};

use super::metadata::{MetaKey, MetaValue, Metadata};

/// Unique identifier for a catalog entry.
///
/// Unique within a catalog; fixed for the entry's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    /// Create a new entry ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// An immutable dated item drawable for placement.
///
/// `order_key` is the chronological sort key. Different entries may
/// share a key within a catalog (two songs from the same year); the
/// candidate selector guarantees no two such entries ever coexist on
/// one timeline.
///
/// ## Example
///
/// ```
/// use chronology::catalog::{CatalogEntry, EntryId};
///
/// let entry = CatalogEntry::new(EntryId::new(1), "Bohemian Rhapsody", 1975)
///     .with_meta("artist", "Queen")
///     .with_meta("popularity", 87i64);
///
/// assert_eq!(entry.order_key, 1975);
/// assert_eq!(entry.meta_int("popularity", 0), 87);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier within the catalog.
    pub id: EntryId,

    /// Name shown to players (the song title and artist, typically).
    pub display_name: String,

    /// Chronological sort key (the year).
    pub order_key: i64,

    /// Opaque metadata for the presentation layer.
    pub metadata: Metadata,
}

impl CatalogEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(id: EntryId, display_name: impl Into<String>, order_key: i64) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            order_key,
            metadata: Metadata::default(),
        }
    }

    /// Attach a metadata field (builder pattern).
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<MetaKey>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Get a metadata value.
    #[must_use]
    pub fn get_meta(&self, key: &str) -> Option<&MetaValue> {
        self.metadata.get(&MetaKey::new(key))
    }

    /// Get an integer metadata field with a default value.
    #[must_use]
    pub fn meta_int(&self, key: &str, default: i64) -> i64 {
        self.get_meta(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Get a boolean metadata field with a default value.
    #[must_use]
    pub fn meta_bool(&self, key: &str, default: bool) -> bool {
        self.get_meta(key).and_then(|v| v.as_bool()).unwrap_or(default)
    }

    /// Get a text metadata field.
    #[must_use]
    pub fn meta_text(&self, key: &str) -> Option<&str> {
        self.get_meta(key).and_then(|v| v.as_text())
    }
}
