//! The game session: one full game from start to terminal outcome.
//!
//! ## Round state machine
//!
//! Each round runs draw -> prompt -> resolve -> (round end | session
//! end). Drawing `None` ends the session as a deck-clear win;
//! resolving updates the acting player, commits the candidate at its
//! true chronological position (right or wrong guess alike), and then
//! either terminates or rotates the turn. Cancellation unwinds the
//! in-flight round with no side effects at all.
//!
//! Strictly sequential: exactly one round is in flight, and the only
//! suspension point is the blocking [`Presenter::choose_position`]
//! call.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::presenter::{
    EndReason, Placement, PlacementPrompt, PlayerStanding, Presenter, RoundOutcome,
    SessionReport, Verdict,
};
use super::selector::CandidateSelector;
use crate::catalog::{Catalog, EntryId};
use crate::core::{ConfigError, GameRng, PlayerId, PlayerState, MAX_LIVES};
use crate::timeline::Timeline;

/// One resolved round, as recorded in the session history.
///
/// The history is the session's structured log: everything a replay or
/// a post-game summary needs, one record per committed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u32,
    /// The player who placed.
    pub player: PlayerId,
    /// The entry that was drawn and committed.
    pub entry: EntryId,
    /// The index the player chose.
    pub chosen_index: usize,
    /// Whether the choice was correct.
    pub correct: bool,
}

/// What one call to [`GameSession::play_round`] left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// The session continues; another round can be played.
    Continue,
    /// The session reached a terminal outcome (now or previously).
    Ended(SessionReport),
    /// The presenter cancelled; the round left no trace.
    Cancelled,
}

/// How a session driven by [`GameSession::run`] finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Played to a terminal outcome.
    Completed(SessionReport),
    /// Aborted mid-round by the presenter.
    Cancelled,
}

/// Builder for a [`GameSession`].
///
/// ## Example
///
/// ```
/// use chronology::catalog::{Catalog, CatalogEntry, EntryId};
/// use chronology::session::SessionBuilder;
///
/// let catalog = Catalog::new(vec![
///     CatalogEntry::new(EntryId::new(1), "Hey Jude", 1968),
///     CatalogEntry::new(EntryId::new(2), "Billie Jean", 1982),
/// ]).unwrap();
///
/// let session = SessionBuilder::new()
///     .player("Alice")
///     .player("Bob")
///     .seed(42)
///     .build(&catalog)
///     .unwrap();
///
/// assert_eq!(session.players().len(), 2);
/// assert_eq!(session.timeline().len(), 1); // the seed entry
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    players: Vec<String>,
    starting_lives: u8,
    seed: Option<u64>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            starting_lives: MAX_LIVES,
            seed: None,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player. Call once for solo play, twice for two players.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Override the lives budget (default [`MAX_LIVES`]).
    #[must_use]
    pub fn starting_lives(mut self, lives: u8) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Fix the RNG seed, making draw order deterministic.
    ///
    /// Without this the session reseeds from entropy once at build
    /// time - the production behavior.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session: pick the random seed entry, mark it used,
    /// and set up player states.
    ///
    /// The catalog is borrowed for the session's lifetime and shared
    /// freely with other sessions.
    pub fn build(self, catalog: &Catalog) -> Result<GameSession<'_>, ConfigError> {
        if self.players.is_empty() || self.players.len() > 2 {
            return Err(ConfigError::UnsupportedPlayerCount(self.players.len()));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }

        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        // A constructed catalog is never empty, so a seed entry exists.
        let seed_entry = rng
            .choose(catalog.entries())
            .expect("catalog is non-empty")
            .clone();

        let mut selector = CandidateSelector::new();
        selector.mark_used(&seed_entry);

        let players = self
            .players
            .into_iter()
            .map(|name| PlayerState::new(name, self.starting_lives))
            .collect();

        Ok(GameSession {
            catalog,
            timeline: Timeline::seeded(seed_entry),
            selector,
            players,
            current: 0,
            rng,
            history: Vector::new(),
            finished: None,
        })
    }
}

/// One full game from start to terminal outcome.
///
/// Owns the timeline, the selector's used-sets, and the player states;
/// borrows the catalog. Construct via [`SessionBuilder`], then either
/// drive it to completion with [`GameSession::run`] or step it with
/// [`GameSession::play_round`].
pub struct GameSession<'a> {
    catalog: &'a Catalog,
    timeline: Timeline,
    selector: CandidateSelector,
    players: Vec<PlayerState>,
    /// Index into `players` of the player to move.
    current: usize,
    rng: GameRng,
    history: Vector<RoundRecord>,
    finished: Option<EndReason>,
}

impl<'a> GameSession<'a> {
    /// The catalog this session draws from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// The current timeline, sorted ascending by order key.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// All player states, in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// A single player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.get(id.index())
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// Resolved rounds so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Number of resolved rounds.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.history.len() as u32
    }

    /// Whether the session has reached a terminal outcome.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// The terminal report, once the session has finished.
    #[must_use]
    pub fn report(&self) -> Option<SessionReport> {
        self.finished.map(|reason| self.build_report(reason))
    }

    /// Play rounds until the session ends or the presenter cancels.
    pub fn run<P: Presenter>(&mut self, presenter: &mut P) -> SessionOutcome {
        loop {
            match self.play_round(presenter) {
                RoundStatus::Continue => {}
                RoundStatus::Ended(report) => return SessionOutcome::Completed(report),
                RoundStatus::Cancelled => return SessionOutcome::Cancelled,
            }
        }
    }

    /// Run one draw -> prompt -> resolve cycle.
    ///
    /// Calling this on a finished session reports the terminal outcome
    /// again without replaying anything.
    pub fn play_round<P: Presenter>(&mut self, presenter: &mut P) -> RoundStatus {
        if let Some(reason) = self.finished {
            return RoundStatus::Ended(self.build_report(reason));
        }

        // An eliminated player never draws: rotate away first, and end
        // the session if nobody is left standing.
        if !self.players[self.current].is_alive() {
            match self.next_active_player() {
                Some(idx) => self.current = idx,
                None => {
                    return RoundStatus::Ended(
                        self.finish(EndReason::PlayersEliminated, presenter),
                    )
                }
            }
        }

        // Draw. An exhausted deck is the win condition.
        let candidate = match self.selector.draw(self.catalog, &mut self.rng) {
            Some(entry) => entry.clone(),
            None => return RoundStatus::Ended(self.finish(EndReason::DeckCleared, presenter)),
        };

        // Prompt, re-asking until the presenter picks an offered index.
        // Rejection consumes nothing; cancellation unwinds the round.
        let allowed = self.timeline.allowed_positions();
        let chosen = loop {
            let prompt = PlacementPrompt {
                player: self.current_player(),
                candidate: &candidate,
                timeline: &self.timeline,
                allowed_positions: allowed.as_slice(),
            };
            match presenter.choose_position(&prompt) {
                Placement::Cancel => return RoundStatus::Cancelled,
                Placement::At(idx) if allowed.contains(&idx) => break idx,
                Placement::At(idx) => presenter.invalid_choice(idx),
            }
        };

        // Resolve: judge, update the player, then commit the entry at
        // its true position - a wrong guess still reveals it.
        let correct = self.timeline.is_valid_insertion(&candidate, chosen);
        let player_id = self.current_player();

        if correct {
            self.players[self.current].award_point();
        } else {
            self.players[self.current].lose_life();
        }

        self.timeline.insert(candidate.clone());
        self.selector.mark_used(&candidate);

        let round = self.history.len() as u32 + 1;
        self.history.push_back(RoundRecord {
            round,
            player: player_id,
            entry: candidate.id,
            chosen_index: chosen,
            correct,
        });

        presenter.round_resolved(&RoundOutcome {
            player: player_id,
            correct,
            revealed_key: candidate.order_key,
            score: self.players[self.current].score(),
            lives: self.players[self.current].lives(),
        });

        // Terminate or rotate.
        match self.next_active_player() {
            Some(idx) => {
                self.current = idx;
                RoundStatus::Continue
            }
            None => RoundStatus::Ended(self.finish(EndReason::PlayersEliminated, presenter)),
        }
    }

    /// The player to act next: the other player if they are alive,
    /// otherwise the current player if *they* are, otherwise nobody.
    fn next_active_player(&self) -> Option<usize> {
        if self.players.len() == 2 {
            let other = 1 - self.current;
            if self.players[other].is_alive() {
                return Some(other);
            }
        }
        self.players[self.current].is_alive().then_some(self.current)
    }

    fn finish<P: Presenter>(&mut self, reason: EndReason, presenter: &mut P) -> SessionReport {
        self.finished = Some(reason);
        let report = self.build_report(reason);
        presenter.session_ended(&report);
        report
    }

    fn build_report(&self, reason: EndReason) -> SessionReport {
        let standings = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| PlayerStanding {
                player: PlayerId::new(i as u8),
                name: p.name().to_string(),
                score: p.score(),
                lives: p.lives(),
            })
            .collect();

        // Score alone decides the two-player verdict; lives are
        // reported in the standings but never break ties.
        let verdict = (self.players.len() == 2).then(|| {
            let (a, b) = (self.players[0].score(), self.players[1].score());
            match a.cmp(&b) {
                std::cmp::Ordering::Greater => Verdict::Winner(PlayerId::new(0)),
                std::cmp::Ordering::Less => Verdict::Winner(PlayerId::new(1)),
                std::cmp::Ordering::Equal => Verdict::Tie,
            }
        });

        SessionReport {
            reason,
            standings,
            verdict,
        }
    }
}
