//! Session-scoped game state.
//!
//! `GameState` lives for the process lifetime and is discarded on reload;
//! there is no persistence layer. It is mutated exclusively by the
//! progression tracker - view code and the challenge engine only read it.
//!
//! Uses `im` persistent data structures so snapshots of the state are
//! cheap to clone for display or replay.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::badge::Badge;
use super::defender::DefenderType;

/// Level counter starting value. The level stays here unless the round is
/// explicitly reset; nothing currently advances it.
pub const INITIAL_LEVEL: u32 = 1;

/// Cumulative score, badges, and completed challenges for the current round.
///
/// Invariants:
/// - `score` is monotonically non-decreasing except on [`GameState::reset`].
/// - A defender type appears in the completed set at most once.
/// - Badge insertion order is preserved for display.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    score: u32,
    level: u32,
    badges: Vector<Badge>,
    completed: ImHashSet<DefenderType>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh round state: zero score, no badges, no completions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            level: INITIAL_LEVEL,
            badges: Vector::new(),
            completed: ImHashSet::new(),
        }
    }

    /// Cumulative score for the current round.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Earned badges in the order they were awarded.
    pub fn badges(&self) -> impl Iterator<Item = Badge> + '_ {
        self.badges.iter().copied()
    }

    /// Number of earned badges.
    #[must_use]
    pub fn badge_count(&self) -> usize {
        self.badges.len()
    }

    /// Check whether a badge has been earned.
    #[must_use]
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }

    /// Defender types completed this round.
    pub fn completed(&self) -> impl Iterator<Item = DefenderType> + '_ {
        self.completed.iter().copied()
    }

    /// Number of distinct completed defender types.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Check whether a defender's challenge was already completed.
    #[must_use]
    pub fn is_completed(&self, defender: DefenderType) -> bool {
        self.completed.contains(&defender)
    }

    // === Mutators (progression tracker only) ===

    /// Add points to the score.
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Grant a badge. Returns false if it was already held.
    pub(crate) fn grant_badge(&mut self, badge: Badge) -> bool {
        if self.badges.contains(&badge) {
            return false;
        }
        self.badges.push_back(badge);
        true
    }

    /// Record a completed defender challenge. Set semantics: re-adding an
    /// already-completed type is a no-op returning false.
    pub(crate) fn mark_completed(&mut self, defender: DefenderType) -> bool {
        if self.completed.contains(&defender) {
            return false;
        }
        self.completed.insert(defender);
        true
    }

    /// Reset to initial values for a new round.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}
