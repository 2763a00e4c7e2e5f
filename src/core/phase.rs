//! Game phase state machine.
//!
//! A session moves through a fixed three-phase cycle:
//!
//! ```text
//! Setup -> Playing -> GameOver -> Setup -> ...
//! ```
//!
//! `Setup` is both the initial phase and the phase a finished game returns
//! to. Each phase has exactly one legal successor; everything else is
//! rejected by the scoreboard as a no-op.

use serde::{Deserialize, Serialize};

/// Current phase of a scorekeeping session.
///
/// Exactly one phase is active at a time. New scoreboards start in
/// [`GamePhase::Setup`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Roster and settings are being arranged; play has not begun.
    #[default]
    Setup,
    /// Scores are live.
    Playing,
    /// Play has ended; scores are frozen for review.
    GameOver,
}

impl GamePhase {
    /// The single legal successor of this phase.
    ///
    /// ```
    /// use scorekeeper::GamePhase;
    ///
    /// assert_eq!(GamePhase::Setup.next(), GamePhase::Playing);
    /// assert_eq!(GamePhase::Playing.next(), GamePhase::GameOver);
    /// assert_eq!(GamePhase::GameOver.next(), GamePhase::Setup);
    /// ```
    #[must_use]
    pub const fn next(self) -> GamePhase {
        match self {
            GamePhase::Setup => GamePhase::Playing,
            GamePhase::Playing => GamePhase::GameOver,
            GamePhase::GameOver => GamePhase::Setup,
        }
    }

    /// Check whether moving to `next` is a legal transition.
    #[must_use]
    pub const fn can_transition_to(self, next: GamePhase) -> bool {
        matches!(
            (self, next),
            (GamePhase::Setup, GamePhase::Playing)
                | (GamePhase::Playing, GamePhase::GameOver)
                | (GamePhase::GameOver, GamePhase::Setup)
        )
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GamePhase::Setup => "Setup",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "Game Over",
        };
        write!(f, "{}", label)
    }
}
