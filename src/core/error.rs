//! Configuration errors surfaced before a session starts.
//!
//! Only catalog- and setup-level problems are fatal. Everything that
//! happens during play (an out-of-range choice, a cancellation, an
//! exhausted deck) is handled in place by the session state machine
//! and never becomes an error.

use thiserror::Error;

use crate::catalog::EntryId;

/// Fatal configuration problems.
///
/// A session cannot be constructed (or a catalog assembled) when one of
/// these fires; the caller decides how to recover.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The catalog (or a filtered sub-pool) contains no entries.
    #[error("catalog contains no entries")]
    EmptyCatalog,

    /// Two catalog entries share an id.
    #[error("duplicate entry id {0} in catalog")]
    DuplicateEntryId(EntryId),

    /// Sessions support exactly one or two players.
    #[error("unsupported player count {0}, expected 1 or 2")]
    UnsupportedPlayerCount(usize),

    /// A player must start with at least one life.
    #[error("starting lives must be at least 1")]
    ZeroLives,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::EmptyCatalog.to_string(),
            "catalog contains no entries"
        );
        assert_eq!(
            ConfigError::DuplicateEntryId(EntryId::new(7)).to_string(),
            "duplicate entry id Entry(7) in catalog"
        );
        assert_eq!(
            ConfigError::UnsupportedPlayerCount(3).to_string(),
            "unsupported player count 3, expected 1 or 2"
        );
    }
}
