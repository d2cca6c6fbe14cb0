//! Progression tracker - the only writer of `GameState`.
//!
//! The tracker trusts the engine's outcome contract: a success resolution
//! carries valid non-negative points. It has no failure modes of its own;
//! everything here is in-memory arithmetic.

use smallvec::SmallVec;

use crate::challenge::Resolution;
use crate::core::{Badge, DefenderType, GameState};

/// Cumulative score required for the "Solar Flare Expert" badge.
pub const EXPERT_SCORE_THRESHOLD: u32 = 500;

/// Owns `GameState` and applies deterministic updates on each resolution.
#[derive(Clone, Debug, Default)]
pub struct ProgressionTracker {
    state: GameState,
}

impl ProgressionTracker {
    /// Create a tracker with a fresh round state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the round state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Apply a challenge resolution.
    ///
    /// Failures mutate nothing. Successes add the reward points, record
    /// the completed defender (set semantics), and re-evaluate the badge
    /// thresholds. Returns the badges earned by this particular outcome;
    /// each badge is awarded at most once per round.
    pub fn record_outcome(&mut self, resolution: &Resolution) -> SmallVec<[Badge; 2]> {
        let mut earned = SmallVec::new();
        if !resolution.is_success() {
            return earned;
        }

        self.state.add_score(resolution.points);
        self.state.mark_completed(resolution.defender);

        // Threshold conditions are independent; evaluation order does not
        // matter.
        if self.state.score() >= EXPERT_SCORE_THRESHOLD
            && self.state.grant_badge(Badge::SolarFlareExpert)
        {
            earned.push(Badge::SolarFlareExpert);
        }
        if self.state.completed_count() >= DefenderType::COUNT
            && self.state.grant_badge(Badge::EarthProtector)
        {
            earned.push(Badge::EarthProtector);
        }

        earned
    }

    /// Start a new round: score 0, no badges, no completions, level 1.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
