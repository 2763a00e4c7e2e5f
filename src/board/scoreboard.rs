//! Scoreboard state and operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{GamePhase, Player, PlayerId, Score, WinCondition};

/// The set of current winners, by ID.
///
/// SmallVec keeps the common case (one winner, occasionally a tie of two)
/// off the heap. IDs are unique within a board, so this is a set.
pub type Winners = SmallVec<[PlayerId; 4]>;

/// Owner of all scorekeeping state for one session.
///
/// The scoreboard holds the ordered roster, the current phase, and the win
/// condition, and is the only mutator of any of them. Operations never
/// fail: an unknown ID or an out-of-order phase request leaves the board
/// untouched.
///
/// ## Example
///
/// ```
/// use scorekeeper::{GamePhase, Scoreboard};
///
/// let mut board = Scoreboard::new();
/// let ada = board.add_player("Ada");
/// board.add_player("Grace");
///
/// board.start_game(0);
/// assert_eq!(board.phase(), GamePhase::Playing);
///
/// board.adjust_score(ada, 3);
/// assert_eq!(board.winners().as_slice(), &[ada]);
/// ```
///
/// ## Change tracking
///
/// Every effective mutation bumps [`Scoreboard::revision`] exactly once.
/// No-ops (unknown IDs, invalid transitions) do not. A presentation layer
/// compares revisions between events instead of diffing the whole state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    players: Vec<Player>,
    phase: GamePhase,
    win_condition: WinCondition,
    /// Next ID to allocate. Serialized so IDs stay unique after a round-trip.
    next_player_id: u32,
    revision: u64,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Create an empty scoreboard in `Setup` with the default win condition.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            phase: GamePhase::Setup,
            win_condition: WinCondition::default(),
            next_player_id: 0,
            revision: 0,
        }
    }

    /// Start building a scoreboard with a seeded roster.
    #[must_use]
    pub fn builder() -> ScoreboardBuilder {
        ScoreboardBuilder::new()
    }

    // === Roster ===

    /// Append a new player with the given name and score 0.
    ///
    /// Names may be empty and may repeat. Allowed in any phase; the
    /// presentation layer decides when to offer the control. Returns the
    /// freshly allocated ID, the stable key for this entry.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.alloc_player_id();
        self.players.push(Player::new(id, name));
        debug!("Added {} to roster ({} players)", id, self.players.len());
        self.touch();
        id
    }

    /// Rename the player with the given ID.
    ///
    /// Order and score are untouched. Unknown IDs are ignored.
    pub fn rename_player(&mut self, id: PlayerId, new_name: impl Into<String>) {
        if let Some(player) = self.player_mut(id) {
            player.name = new_name.into();
            self.touch();
        }
    }

    /// The roster, in display order (insertion order).
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a single player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// True if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    // === Scores ===

    /// Overwrite a player's score. No bounds checks. Unknown IDs are ignored.
    pub fn set_score(&mut self, id: PlayerId, new_score: Score) {
        if let Some(player) = self.player_mut(id) {
            player.score = new_score;
            self.touch();
        }
    }

    /// Add `delta` (which may be negative) to a player's score.
    ///
    /// Unknown IDs are ignored. Wraps on i64 overflow rather than panic;
    /// scores are unconstrained and a stepper UI moves by single points.
    pub fn adjust_score(&mut self, id: PlayerId, delta: Score) {
        if let Some(player) = self.player_mut(id) {
            player.score = player.score.wrapping_add(delta);
            self.touch();
        }
    }

    /// Set every player's score to `starting_value`.
    ///
    /// Membership, order, and names are unchanged. Also invoked by
    /// [`Scoreboard::start_game`] to re-baseline scores for a new game.
    pub fn reset_scores(&mut self, starting_value: Score) {
        self.rebaseline(starting_value);
        self.touch();
    }

    // === Phase machine ===

    /// Begin play: `Setup -> Playing`, re-baselining every score to
    /// `starting_points`.
    ///
    /// The starting value belongs to the caller at call time; the board
    /// never stores it. A no-op outside `Setup`.
    pub fn start_game(&mut self, starting_points: Score) {
        if self.phase != GamePhase::Setup {
            trace!("Ignoring start request in {:?}", self.phase);
            return;
        }
        debug!(
            "Phase {:?} -> {:?}, scores re-baselined to {}",
            GamePhase::Setup,
            GamePhase::Playing,
            starting_points
        );
        self.phase = GamePhase::Playing;
        self.rebaseline(starting_points);
        self.touch();
    }

    /// End play: `Playing -> GameOver`. Scores are left as they stand.
    /// A no-op outside `Playing`.
    pub fn end_game(&mut self) {
        if self.phase != GamePhase::Playing {
            trace!("Ignoring end request in {:?}", self.phase);
            return;
        }
        debug!("Phase {:?} -> {:?}", GamePhase::Playing, GamePhase::GameOver);
        self.phase = GamePhase::GameOver;
        self.touch();
    }

    /// Return to setup for a new game: `GameOver -> Setup`.
    ///
    /// Scores survive until the next [`Scoreboard::start_game`]
    /// re-baselines them. A no-op outside `GameOver`.
    pub fn reset_game(&mut self) {
        if self.phase != GamePhase::GameOver {
            trace!("Ignoring reset request in {:?}", self.phase);
            return;
        }
        debug!("Phase {:?} -> {:?}", GamePhase::GameOver, GamePhase::Setup);
        self.phase = GamePhase::Setup;
        self.touch();
    }

    /// Drive the state machine toward `next`.
    ///
    /// Each phase has exactly one legal predecessor, so dispatching on the
    /// target reproduces the cycle: requests for anything other than the
    /// current phase's successor are no-ops. `starting_points` is consulted
    /// only on the `Setup -> Playing` edge.
    pub fn set_phase(&mut self, next: GamePhase, starting_points: Score) {
        match next {
            GamePhase::Playing => self.start_game(starting_points),
            GamePhase::GameOver => self.end_game(),
            GamePhase::Setup => self.reset_game(),
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    // === Win condition ===

    /// The current win condition.
    #[must_use]
    pub fn win_condition(&self) -> WinCondition {
        self.win_condition
    }

    /// Change the win condition. Takes effect on the next
    /// [`Scoreboard::winners`] call.
    pub fn set_win_condition(&mut self, condition: WinCondition) {
        if self.win_condition != condition {
            self.win_condition = condition;
            self.touch();
        }
    }

    /// True if the highest score currently wins.
    #[must_use]
    pub fn highest_wins(&self) -> bool {
        self.win_condition.highest_wins()
    }

    /// Flag form of [`Scoreboard::set_win_condition`].
    pub fn set_highest_wins(&mut self, highest: bool) {
        self.set_win_condition(WinCondition::from_highest_wins(highest));
    }

    // === Winners ===

    /// All players whose score sits at the winning extreme.
    ///
    /// Computed from the current roster and win condition on every call,
    /// never cached. Ties are all co-winners; an empty roster has no
    /// winners.
    #[must_use]
    pub fn winners(&self) -> Winners {
        let extreme = match self.win_condition {
            WinCondition::HighestScore => self.players.iter().map(|p| p.score).max(),
            WinCondition::LowestScore => self.players.iter().map(|p| p.score).min(),
        };

        match extreme {
            Some(best) => self
                .players
                .iter()
                .filter(|p| p.score == best)
                .map(Player::id)
                .collect(),
            None => Winners::new(),
        }
    }

    /// Check if a player is currently among the winners.
    #[must_use]
    pub fn is_winner(&self, id: PlayerId) -> bool {
        self.winners().contains(&id)
    }

    // === Change tracking ===

    /// Monotone change counter.
    ///
    /// Bumped exactly once by every effective mutation; untouched by
    /// no-ops. Compare values between UI events to detect staleness.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // === Internals ===

    fn alloc_player_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    fn rebaseline(&mut self, value: Score) {
        for player in &mut self.players {
            player.score = value;
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Builder for creating a session scoreboard.
///
/// Seeds the starter roster and win condition; the built board is always
/// in `Setup` with every seeded score at 0.
///
/// ```
/// use scorekeeper::{Scoreboard, WinCondition};
///
/// let board = Scoreboard::builder()
///     .player("Elisha")
///     .player("Andre")
///     .player("Jasmine")
///     .win_condition(WinCondition::LowestScore)
///     .build();
///
/// assert_eq!(board.player_count(), 3);
/// assert!(!board.highest_wins());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScoreboardBuilder {
    starters: Vec<String>,
    win_condition: WinCondition,
}

impl ScoreboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one starter player.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.starters.push(name.into());
        self
    }

    /// Seed several starter players, in order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starters.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the initial win condition.
    pub fn win_condition(mut self, condition: WinCondition) -> Self {
        self.win_condition = condition;
        self
    }

    /// Flag form of [`ScoreboardBuilder::win_condition`].
    pub fn highest_wins(mut self, highest: bool) -> Self {
        self.win_condition = WinCondition::from_highest_wins(highest);
        self
    }

    /// Build the scoreboard.
    #[must_use]
    pub fn build(self) -> Scoreboard {
        let mut board = Scoreboard::new();
        board.win_condition = self.win_condition;
        for name in self.starters {
            board.add_player(name);
        }
        board
    }
}
