//! The timed selection challenge: reference data, countdown, session
//! state machine, and the engine front door.
//!
//! Lifecycle: `ChallengeEngine::start` creates the single active
//! `ChallengeSession`; the host drives `tick()` once per second and relays
//! player input through `toggle_item()`. The session resolves exactly once
//! (success at the target-count crossing, timeout at zero seconds, or an
//! explicit cancel) and the engine returns to idle.

pub mod definition;
pub mod engine;
pub mod registry;
pub mod session;
pub mod timer;

pub use definition::{ChallengeDefinition, ChallengeItem, ItemId};
pub use engine::{ChallengeEngine, EngineError};
pub use registry::ChallengeRegistry;
pub use session::{reward_points, ChallengeSession, Outcome, Resolution, ToggleResult};
pub use timer::{CountdownTimer, TimerTick, CHALLENGE_SECONDS};
