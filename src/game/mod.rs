//! Game director: wires the engine, tracker, story library, and
//! forecaster into the flow the view layer drives.
//!
//! The director enforces the round rules that sit above the engine: a
//! completed defender is not offered again until a new round, resolutions
//! are routed to the progression tracker, and chapter access always goes
//! through the live unlock gate.

use smallvec::SmallVec;
use thiserror::Error;

use crate::challenge::{
    ChallengeEngine, ChallengeSession, EngineError, ItemId, ToggleResult,
};
use crate::core::{Badge, DefenderType, GameState};
use crate::forecast::FlareForecaster;
use crate::progression::ProgressionTracker;
use crate::story::{is_unlocked, StoryChapter, StoryLibrary};

/// Errors from starting a challenge through the director.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// This defender's challenge was already completed this round.
    #[error("defender type {0} was already completed this round")]
    AlreadyCompleted(DefenderType),

    /// The engine rejected the start.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// View-facing result of a player interaction.
///
/// The view turns these into toasts and progress updates; the variant
/// carries everything the notification needs.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// Item added to the selection.
    Selected,
    /// Item removed from the selection.
    Deselected,
    /// Challenge won. Points are already applied to the score; `badges`
    /// lists only the badges this win earned.
    ChallengeWon {
        points: u32,
        badges: SmallVec<[Badge; 2]>,
    },
    /// The countdown expired. No score change.
    ChallengeFailed,
    /// The input did not apply: no active session, or an unknown item.
    Ignored,
}

/// The full game loop state for one player session.
pub struct DefenseGame {
    engine: ChallengeEngine,
    tracker: ProgressionTracker,
    story: StoryLibrary,
    forecaster: FlareForecaster,
    flare_intensity: f64,
}

impl DefenseGame {
    /// Create a game with the stock challenges and chapters. The seed
    /// drives only the forecast stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut forecaster = FlareForecaster::new(seed);
        let flare_intensity = forecaster.next_intensity();
        Self {
            engine: ChallengeEngine::with_builtin(),
            tracker: ProgressionTracker::new(),
            story: StoryLibrary::builtin(),
            forecaster,
            flare_intensity,
        }
    }

    /// Intensity of the currently forecast flare.
    #[must_use]
    pub fn flare_intensity(&self) -> f64 {
        self.flare_intensity
    }

    /// Override the forecast intensity for the next challenge. Takes
    /// effect on the next `begin_challenge`; a running session keeps the
    /// intensity it started with.
    pub fn set_flare_intensity(&mut self, intensity: f64) {
        self.flare_intensity = intensity;
    }

    /// Read-only round state for display.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.tracker.state()
    }

    /// The active challenge session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ChallengeSession> {
        self.engine.session()
    }

    /// Defender roles still open this round, in display order.
    #[must_use]
    pub fn available_defenders(&self) -> Vec<DefenderType> {
        DefenderType::all()
            .into_iter()
            .filter(|&d| !self.state().is_completed(d))
            .collect()
    }

    /// Start a challenge for a defender role under the current forecast.
    pub fn begin_challenge(&mut self, defender: DefenderType) -> Result<(), GameError> {
        if self.state().is_completed(defender) {
            return Err(GameError::AlreadyCompleted(defender));
        }
        self.engine.start(defender, self.flare_intensity)?;
        Ok(())
    }

    /// Forward a player click on an item.
    pub fn toggle_item(&mut self, item: ItemId) -> GameEvent {
        match self.engine.toggle_item(item) {
            ToggleResult::Selected => GameEvent::Selected,
            ToggleResult::Deselected => GameEvent::Deselected,
            ToggleResult::InvalidItem | ToggleResult::Ignored => GameEvent::Ignored,
            ToggleResult::Completed(resolution) => {
                let badges = self.tracker.record_outcome(&resolution);
                GameEvent::ChallengeWon {
                    points: resolution.points,
                    badges,
                }
            }
        }
    }

    /// Advance the challenge clock by one second.
    pub fn tick(&mut self) -> GameEvent {
        match self.engine.tick() {
            Some(resolution) => {
                // Timeout resolutions carry no points; recording them is
                // a no-op on state but keeps a single resolution path.
                self.tracker.record_outcome(&resolution);
                GameEvent::ChallengeFailed
            }
            None => GameEvent::Ignored,
        }
    }

    /// Abandon the running challenge. Nothing is awarded or recorded.
    pub fn cancel_challenge(&mut self) -> bool {
        self.engine.cancel()
    }

    /// Start a new round: cancel any running challenge, reset score,
    /// badges and completions, and roll a fresh flare forecast.
    pub fn new_round(&mut self) {
        self.engine.cancel();
        self.tracker.reset();
        self.flare_intensity = self.forecaster.next_intensity();
    }

    // === Story ===

    /// All chapters, locked or not.
    #[must_use]
    pub fn chapters(&self) -> &[StoryChapter] {
        self.story.chapters()
    }

    /// Check chapter access against the live score.
    #[must_use]
    pub fn is_chapter_unlocked(&self, id: u32) -> bool {
        self.story
            .get(id)
            .is_some_and(|chapter| is_unlocked(chapter, self.state().score()))
    }

    /// Chapters readable at the current score.
    pub fn unlocked_chapters(&self) -> impl Iterator<Item = &StoryChapter> {
        self.story.unlocked(self.state().score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win_current(game: &mut DefenseGame) -> GameEvent {
        let target = game.session().unwrap().definition().target_count;
        let mut last = GameEvent::Ignored;
        for i in 0..target {
            last = game.toggle_item(ItemId::new(i as u32));
        }
        last
    }

    #[test]
    fn test_completed_defender_not_reoffered() {
        let mut game = DefenseGame::new(42);
        assert_eq!(game.available_defenders().len(), 4);

        game.begin_challenge(DefenderType::Farmer).unwrap();
        let event = win_current(&mut game);
        assert!(matches!(event, GameEvent::ChallengeWon { .. }));

        assert!(!game.available_defenders().contains(&DefenderType::Farmer));
        assert_eq!(
            game.begin_challenge(DefenderType::Farmer),
            Err(GameError::AlreadyCompleted(DefenderType::Farmer))
        );
    }

    #[test]
    fn test_begin_while_running_rejected() {
        let mut game = DefenseGame::new(42);
        game.begin_challenge(DefenderType::Pilot).unwrap();

        assert_eq!(
            game.begin_challenge(DefenderType::Farmer),
            Err(GameError::Engine(EngineError::ChallengeInProgress))
        );
    }

    #[test]
    fn test_new_round_resets_everything() {
        let mut game = DefenseGame::new(42);
        game.begin_challenge(DefenderType::Satellite).unwrap();
        win_current(&mut game);
        let old_intensity = game.flare_intensity();

        game.new_round();

        assert_eq!(game.state().score(), 0);
        assert_eq!(game.available_defenders().len(), 4);
        assert!(game.session().is_none());
        // Deterministic stream: the next draw differs from the first.
        assert_ne!(game.flare_intensity(), old_intensity);
    }

    #[test]
    fn test_tick_when_idle_ignored() {
        let mut game = DefenseGame::new(42);
        assert_eq!(game.tick(), GameEvent::Ignored);
    }
}
