//! # chronology
//!
//! A turn-based chronology placement game engine.
//!
//! Players are shown a catalog entry (a song with a year) and must insert
//! it into a growing chronologically ordered timeline at the correct
//! relative position, under a limited-lives budget, for one or two players.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: Catalog ingestion, terminal rendering, and input
//!    parsing live outside this crate. The engine consumes a validated
//!    [`Catalog`] and talks to a [`Presenter`] through typed prompts and
//!    events.
//!
//! 2. **Pure Validation**: Insertion correctness and the offered-position
//!    view are pure functions over [`Timeline`]; all mutation flows
//!    through the round state machine in [`GameSession`].
//!
//! 3. **Injected Randomness**: Candidate selection draws through
//!    [`GameRng`], seedable for deterministic tests and entropy-seeded
//!    once per session otherwise.
//!
//! ## Modules
//!
//! - `core`: Player identity and state, RNG, configuration errors
//! - `catalog`: Immutable entries, opaque metadata, the validated pool
//! - `timeline`: Ordered placements, insertion validity, offered positions
//! - `session`: Candidate selection, the presenter boundary, the round
//!   state machine

pub mod core;
pub mod catalog;
pub mod timeline;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameRng, PlayerId, PlayerState, MAX_LIVES};

pub use crate::catalog::{Catalog, CatalogEntry, EntryId, MetaKey, MetaValue, Metadata};

pub use crate::timeline::Timeline;

pub use crate::session::{
    CandidateSelector, EndReason, GameSession, Placement, PlacementPrompt,
    PlayerStanding, Presenter, RoundOutcome, RoundRecord, RoundStatus,
    SessionBuilder, SessionOutcome, SessionReport, Verdict,
};
