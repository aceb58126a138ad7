//! The presentation boundary.
//!
//! The engine never prints or parses anything. Each round it hands the
//! presentation layer a [`PlacementPrompt`] and blocks on
//! [`Presenter::choose_position`]; outcomes and session endings arrive
//! as typed events. A terminal UI, a test harness, and a bot all
//! implement the same trait.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::core::PlayerId;
use crate::timeline::Timeline;

/// A player's response to a placement prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Insert at this index of the sorted timeline. Must be one of the
    /// prompt's offered positions; anything else is rejected and
    /// re-prompted.
    At(usize),
    /// Abort the session immediately, without penalty and without
    /// committing the draw.
    Cancel,
}

/// Everything the presentation layer needs to pose one placement.
#[derive(Debug)]
pub struct PlacementPrompt<'a> {
    /// Whose turn it is.
    pub player: PlayerId,
    /// The drawn entry to place. Its `order_key` is the secret; show
    /// the display name and metadata only.
    pub candidate: &'a CatalogEntry,
    /// The current timeline, sorted ascending by key.
    pub timeline: &'a Timeline,
    /// The insertion indices on offer, ascending. Collapsed per the
    /// gap rule; always contains before-first and after-last.
    pub allowed_positions: &'a [usize],
}

/// How one round resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The player who placed.
    pub player: PlayerId,
    /// Whether the guessed slot was chronologically correct.
    pub correct: bool,
    /// The candidate's order key, now revealed.
    pub revealed_key: i64,
    /// The player's score after the round.
    pub score: u32,
    /// The player's lives after the round.
    pub lives: u8,
}

/// Why a session reached its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every drawable entry has been placed. A win, not a loss.
    DeckCleared,
    /// Every participating player ran out of lives.
    PlayersEliminated,
}

/// Final two-player verdict. Score decides; lives never break ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Strictly higher final score.
    Winner(PlayerId),
    /// Equal final scores, regardless of remaining lives.
    Tie,
}

impl Verdict {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Verdict::Winner(p) if *p == player)
    }
}

/// A player's final line in the session report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStanding {
    /// The player.
    pub player: PlayerId,
    /// Display name.
    pub name: String,
    /// Final score.
    pub score: u32,
    /// Remaining lives. Reported, never tie-breaking.
    pub lives: u8,
}

/// The terminal report for a completed session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// What ended the session.
    pub reason: EndReason,
    /// One standing per player, in turn order.
    pub standings: Vec<PlayerStanding>,
    /// `Some` for two-player sessions, `None` for solo play.
    pub verdict: Option<Verdict>,
}

/// The presentation layer, as seen from the engine.
///
/// [`Presenter::choose_position`] is the one required method - the
/// engine blocks on it each round, with no timeout of its own, until
/// it gets an offered index or a cancellation. The notification
/// methods default to no-ops so a bot or a test script only implements
/// what it cares about.
pub trait Presenter {
    /// Resolve an insertion slot for the drawn candidate.
    ///
    /// Returning an index outside `prompt.allowed_positions` does not
    /// consume the draw or touch any state; the engine notifies
    /// [`Presenter::invalid_choice`] and asks again.
    fn choose_position(&mut self, prompt: &PlacementPrompt<'_>) -> Placement;

    /// An index outside the offered positions was rejected.
    fn invalid_choice(&mut self, _chosen: usize) {}

    /// A round resolved; the candidate's year is now public.
    fn round_resolved(&mut self, _outcome: &RoundOutcome) {}

    /// The session reached a terminal outcome.
    fn session_ended(&mut self, _report: &SessionReport) {}
}
