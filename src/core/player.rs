//! Player identity and roster entry types.
//!
//! ## PlayerId
//!
//! Every roster entry has a unique `PlayerId`, allocated by the owning
//! `Scoreboard` when the player is added. IDs are never reused within a
//! board, which makes them safe keys for UI list diffing.
//!
//! ## Player
//!
//! A roster entry: immutable identity plus a mutable name and score.
//! Names may be empty (the presentation layer decides how to render an
//! unnamed player) and scores are unconstrained.

use serde::{Deserialize, Serialize};

/// A player's running score.
///
/// Scores are plain signed integers with no enforced bounds.
pub type Score = i64;

/// Unique identifier for a player within a scoreboard.
///
/// Allocated at creation, immutable, never reused. Identity only - the
/// display position of a player is its roster index, not its ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a player ID from a raw value.
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

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// A single roster entry.
///
/// The ID is fixed at construction; name and score are freely mutable by
/// the owning scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,

    /// Display name. May be empty.
    pub name: String,

    /// Running score. Unbounded.
    pub score: Score,
}

impl Player {
    /// Create a player with the given identity and name, at score 0.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// The player's identity.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }
}
