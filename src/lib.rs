//! # scorekeeper
//!
//! State model for a multiplayer tabletop scorekeeping aid.
//!
//! ## Design Principles
//!
//! 1. **Model only**: No rendering, layout, or input handling. A
//!    presentation layer reads the accessors and routes user actions to
//!    the operations.
//!
//! 2. **Total operations**: Nothing returns an error and nothing panics.
//!    Unknown IDs and out-of-order phase requests are silent no-ops.
//!
//! 3. **Derived, never cached**: Winners are a pure function of the
//!    current roster and win condition, recomputed on every read. There is
//!    no stored value that can go stale.
//!
//! ## Modules
//!
//! - `core`: Player identity, scores, phases, win conditions
//! - `board`: The `Scoreboard` state owner and its builder

pub mod board;
pub mod core;

// Re-export commonly used types
pub use crate::core::{GamePhase, Player, PlayerId, Score, WinCondition};

pub use crate::board::{Scoreboard, ScoreboardBuilder, Winners};
