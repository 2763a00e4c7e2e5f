//! Win condition selection.
//!
//! Some games crown the highest score, others (golf-style scoring) the
//! lowest. The comparator is an ordinary mutable setting on the scoreboard
//! and takes effect on the next winner computation.

use serde::{Deserialize, Serialize};

/// Which score extreme counts as winning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCondition {
    /// The highest score wins.
    #[default]
    HighestScore,
    /// The lowest score wins.
    LowestScore,
}

impl WinCondition {
    /// True if this condition crowns the highest score.
    #[must_use]
    pub const fn highest_wins(self) -> bool {
        matches!(self, WinCondition::HighestScore)
    }

    /// Build a condition from the "highest score wins" flag.
    #[must_use]
    pub const fn from_highest_wins(highest: bool) -> Self {
        if highest {
            WinCondition::HighestScore
        } else {
            WinCondition::LowestScore
        }
    }
}

impl std::fmt::Display for WinCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WinCondition::HighestScore => "Highest score wins",
            WinCondition::LowestScore => "Lowest score wins",
        };
        write!(f, "{}", label)
    }
}
