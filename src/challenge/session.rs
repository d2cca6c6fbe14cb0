//! Live challenge session: selection set, countdown, resolution.
//!
//! A session is created by the engine when a defender role is chosen and
//! destroyed when it resolves or is cancelled. The session itself never
//! reaches outside its own definition: reward size comes from the flare
//! intensity captured at start, and time advances only through `tick()`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{ChallengeDefinition, ItemId};
use super::timer::{CountdownTimer, TimerTick, CHALLENGE_SECONDS};
use crate::core::DefenderType;

/// Terminal outcome of a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Target selection count reached before the clock ran out.
    Success,
    /// The countdown reached zero first.
    Timeout,
}

/// A resolved challenge, handed to the progression tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Which defender role was played.
    pub defender: DefenderType,

    /// How the session ended.
    pub outcome: Outcome,

    /// Reward points. Zero on timeout.
    pub points: u32,
}

impl Resolution {
    /// Whether the challenge was won.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Reward points as a step function of flare intensity.
///
/// High-severity flares (>= 8) pay 150 points, medium (>= 5) pay 100,
/// anything below pays 50.
#[must_use]
pub fn reward_points(flare_intensity: f64) -> u32 {
    if flare_intensity >= 8.0 {
        150
    } else if flare_intensity >= 5.0 {
        100
    } else {
        50
    }
}

/// Result of toggling an item in the active session.
#[derive(Clone, Debug, PartialEq)]
pub enum ToggleResult {
    /// Item added to the selection.
    Selected,
    /// Item removed from the selection (toggle is its own inverse).
    Deselected,
    /// This selection reached the target count; the session resolved.
    Completed(Resolution),
    /// The item does not belong to this challenge. Session untouched.
    InvalidItem,
    /// There is no active session to apply the toggle to.
    Ignored,
}

/// The live instance of a running challenge.
///
/// Holds a clone of its static definition, the countdown, and the unique
/// selection set. The selection can never exceed the target count: success
/// fires at the exact threshold crossing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChallengeSession {
    definition: ChallengeDefinition,
    flare_intensity: f64,
    timer: CountdownTimer,
    selected: SmallVec<[ItemId; 8]>,
}

impl ChallengeSession {
    /// Start a session with a full 30-second clock and no selections.
    #[must_use]
    pub fn new(definition: ChallengeDefinition, flare_intensity: f64) -> Self {
        Self {
            definition,
            flare_intensity,
            timer: CountdownTimer::new(CHALLENGE_SECONDS),
            selected: SmallVec::new(),
        }
    }

    /// The static definition this session runs against.
    #[must_use]
    pub fn definition(&self) -> &ChallengeDefinition {
        &self.definition
    }

    /// The defender role being played.
    #[must_use]
    pub fn defender(&self) -> DefenderType {
        self.definition.defender
    }

    /// Flare severity captured at start.
    #[must_use]
    pub fn flare_intensity(&self) -> f64 {
        self.flare_intensity
    }

    /// Seconds remaining on the clock.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.timer.remaining()
    }

    /// Currently selected item ids.
    #[must_use]
    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    /// Number of selected items.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Check whether an item is currently selected.
    #[must_use]
    pub fn is_selected(&self, item: ItemId) -> bool {
        self.selected.contains(&item)
    }

    /// Fraction of the target reached, clamped to [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        let ratio = self.selected.len() as f64 / self.definition.target_count as f64;
        ratio.min(1.0)
    }

    /// Toggle an item in or out of the selection.
    ///
    /// Selecting the item that crosses the target count resolves the
    /// session as a success and stops the countdown. Unknown item ids
    /// leave the session untouched.
    pub fn toggle(&mut self, item: ItemId) -> ToggleResult {
        if !self.definition.contains(item) {
            return ToggleResult::InvalidItem;
        }

        if let Some(pos) = self.selected.iter().position(|&id| id == item) {
            self.selected.remove(pos);
            return ToggleResult::Deselected;
        }

        self.selected.push(item);
        if self.selected.len() == self.definition.target_count {
            self.timer.stop();
            return ToggleResult::Completed(Resolution {
                defender: self.defender(),
                outcome: Outcome::Success,
                points: reward_points(self.flare_intensity),
            });
        }

        ToggleResult::Selected
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the timeout resolution when this tick brings the clock to
    /// zero; `None` while running or after the timer has been stopped.
    pub fn tick(&mut self) -> Option<Resolution> {
        match self.timer.tick() {
            TimerTick::Expired => Some(Resolution {
                defender: self.defender(),
                outcome: Outcome::Timeout,
                points: 0,
            }),
            TimerTick::Running(_) | TimerTick::Stopped => None,
        }
    }

    /// Stop the countdown without producing a resolution.
    pub fn cancel(&mut self) {
        self.timer.stop();
    }
}
