//! Session orchestration: selection, the presenter boundary, the round
//! state machine.
//!
//! ## Key Types
//!
//! - `CandidateSelector`: non-repeating uniform draws from the catalog
//! - `Presenter`: the trait the presentation layer implements
//! - `GameSession` / `SessionBuilder`: one full game from construction
//!   to terminal outcome
//! - `SessionReport` / `Verdict` / `EndReason`: how it ended

pub mod game;
pub mod presenter;
pub mod selector;

pub use game::{GameSession, RoundRecord, RoundStatus, SessionBuilder, SessionOutcome};
pub use presenter::{
    EndReason, Placement, PlacementPrompt, PlayerStanding, Presenter, RoundOutcome,
    SessionReport, Verdict,
};
pub use selector::CandidateSelector;
