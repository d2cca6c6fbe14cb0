//! Challenge engine - the front door for running challenges.
//!
//! The engine enforces the at-most-one-active-session invariant and the
//! first-resolution-wins rule. Operations on an idle engine are silent
//! no-ops, never errors, so the host can keep forwarding timer ticks and
//! clicks without checking engine state first.
//!
//! State machine: idle -> running -> {success, timeout, cancelled}, and
//! every terminal state returns to idle. The resolved session is dropped
//! on the spot, so a late tick or toggle finds no session to act on.

use thiserror::Error;

use super::registry::ChallengeRegistry;
use super::session::{ChallengeSession, Resolution, ToggleResult};
use crate::core::DefenderType;

/// Errors from starting a challenge.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A session is already running; cancel it before starting another.
    #[error("a challenge is already in progress")]
    ChallengeInProgress,

    /// The registry has no definition for this defender role.
    #[error("no challenge registered for defender type {0}")]
    UnknownDefender(DefenderType),
}

/// Runs one timed selection challenge at a time.
#[derive(Clone, Debug)]
pub struct ChallengeEngine {
    registry: ChallengeRegistry,
    session: Option<ChallengeSession>,
}

impl ChallengeEngine {
    /// Create an engine over a custom registry.
    #[must_use]
    pub fn new(registry: ChallengeRegistry) -> Self {
        Self {
            registry,
            session: None,
        }
    }

    /// Create an engine with the four stock challenges.
    #[must_use]
    pub fn with_builtin() -> Self {
        Self::new(ChallengeRegistry::builtin())
    }

    /// The challenge definitions this engine runs.
    #[must_use]
    pub fn registry(&self) -> &ChallengeRegistry {
        &self.registry
    }

    /// The active session, if any. View code reads remaining time and
    /// progress through this.
    #[must_use]
    pub fn session(&self) -> Option<&ChallengeSession> {
        self.session.as_ref()
    }

    /// Whether a challenge is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Start a challenge for the given defender role.
    ///
    /// `flare_intensity` is the severity scalar used only to size the
    /// reward on success; it is captured at start and not re-read.
    pub fn start(
        &mut self,
        defender: DefenderType,
        flare_intensity: f64,
    ) -> Result<(), EngineError> {
        if self.session.is_some() {
            return Err(EngineError::ChallengeInProgress);
        }
        let definition = self
            .registry
            .get(defender)
            .ok_or(EngineError::UnknownDefender(defender))?
            .clone();

        self.session = Some(ChallengeSession::new(definition, flare_intensity));
        Ok(())
    }

    /// Toggle an item in the active session.
    ///
    /// Returns `Ignored` when idle (including right after a resolution).
    /// A completing toggle drops the session and returns the resolution;
    /// the caller hands it to the progression tracker.
    pub fn toggle_item(&mut self, item: super::ItemId) -> ToggleResult {
        let Some(session) = self.session.as_mut() else {
            return ToggleResult::Ignored;
        };

        let result = session.toggle(item);
        if matches!(result, ToggleResult::Completed(_)) {
            self.session = None;
        }
        result
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the timeout resolution when the clock hits zero, dropping
    /// the session. Idle ticks return `None`.
    pub fn tick(&mut self) -> Option<Resolution> {
        let session = self.session.as_mut()?;
        let resolution = session.tick()?;
        self.session = None;
        Some(resolution)
    }

    /// Cancel the active session without awarding anything.
    ///
    /// Returns true if a session was cancelled. Safe to call when idle.
    pub fn cancel(&mut self) -> bool {
        match self.session.take() {
            Some(mut session) => {
                session.cancel();
                true
            }
            None => false,
        }
    }
}
