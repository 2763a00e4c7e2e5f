//! The scoreboard: sole owner and mutator of session state.
//!
//! Holds the roster, drives the phase state machine, and derives winners
//! on demand. A presentation layer reads the accessors, routes user
//! actions to the operations, and watches [`Scoreboard::revision`] to know
//! when to re-render.

mod scoreboard;

pub use scoreboard::{Scoreboard, ScoreboardBuilder, Winners};
