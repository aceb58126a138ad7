//! Opaque metadata carried by catalog entries.
//!
//! Entries keep whatever the ingestion layer attached: artist, preview
//! URL, popularity, cover art. The engine stores and returns these
//! values but never interprets them; only the presentation layer (or a
//! caller filtering the pool) assigns meaning.
//!
//! ## MetaValue Types
//!
//! - `Int`: Numbers (popularity, track length)
//! - `Bool`: Flags
//! - `Text`: Strings (artist, URLs)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing entry metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaKey(pub String);

impl MetaKey {
    /// Create a new metadata key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for MetaKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MetaKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for an entry metadata field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    /// Integer value (popularity, duration).
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Text value (artist, preview URL).
    Text(String),
}

impl MetaValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetaValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

// Convenient From implementations
impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        MetaValue::Int(v)
    }
}

impl From<i32> for MetaValue {
    fn from(v: i32) -> Self {
        MetaValue::Int(v as i64)
    }
}

impl From<bool> for MetaValue {
    fn from(v: bool) -> Self {
        MetaValue::Bool(v)
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::Text(v)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Text(v.to_string())
    }
}

/// Collection of metadata fields.
pub type Metadata = FxHashMap<MetaKey, MetaValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_key() {
        let key1 = MetaKey::new("artist");
        let key2: MetaKey = "artist".into();
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_meta_value_int() {
        let val = MetaValue::Int(75);
        assert_eq!(val.as_int(), Some(75));
        assert_eq!(val.as_bool(), None);
    }

    #[test]
    fn test_meta_value_text() {
        let val = MetaValue::Text("Queen".to_string());
        assert_eq!(val.as_text(), Some("Queen"));
        assert_eq!(val.as_int(), None);
    }

    #[test]
    fn test_meta_value_from() {
        let int: MetaValue = 42i32.into();
        assert_eq!(int.as_int(), Some(42));

        let boolean: MetaValue = true.into();
        assert_eq!(boolean.as_bool(), Some(true));

        let text: MetaValue = "url".into();
        assert_eq!(text.as_text(), Some("url"));
    }

    #[test]
    fn test_metadata_map() {
        let mut meta = Metadata::default();
        meta.insert("popularity".into(), 80i64.into());
        meta.insert("artist".into(), "Queen".into());

        assert_eq!(
            meta.get(&"popularity".into()).and_then(|v| v.as_int()),
            Some(80)
        );
        assert_eq!(
            meta.get(&"artist".into()).and_then(|v| v.as_text()),
            Some("Queen")
        );
    }
}
