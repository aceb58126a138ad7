//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Sessions hold one or two players;
//! indices are 0-based.
//!
//! ## PlayerState
//!
//! Lives and score for one player. Lives only decrease, score only
//! increases, and elimination (`lives == 0`) is one-way.

use serde::{Deserialize, Serialize};

/// Default lives budget for a new player.
pub const MAX_LIVES: u8 = 3;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player lives and score.
///
/// Created once at session start and mutated after every round the
/// player acts in. The transition `Active -> Eliminated` fires the
/// moment lives reach zero and never reverses.
///
/// ## Example
///
/// ```
/// use chronology::core::{PlayerState, MAX_LIVES};
///
/// let mut player = PlayerState::new("Alice", MAX_LIVES);
/// assert!(player.is_alive());
///
/// player.award_point();
/// assert_eq!(player.score(), 1);
///
/// player.lose_life();
/// assert_eq!(player.lives(), MAX_LIVES - 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    name: String,
    lives: u8,
    score: u32,
}

impl PlayerState {
    /// Create a new player with a full lives budget and zero score.
    #[must_use]
    pub fn new(name: impl Into<String>, lives: u8) -> Self {
        Self {
            name: name.into(),
            lives,
            score: 0,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remaining lives.
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the player can still act (`lives > 0`).
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Award one point for a correct placement.
    pub fn award_point(&mut self) {
        self.score += 1;
    }

    /// Deduct one life for a wrong placement.
    ///
    /// Saturates at zero: an eliminated player's lives never change again.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}
