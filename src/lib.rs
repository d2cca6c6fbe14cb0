//! # solar-defense
//!
//! Challenge and progression engine for a space-weather defense game.
//!
//! Players pick one of four defender roles (satellite operator, pilot,
//! farmer, power-grid manager) and race a 30-second countdown to select
//! the right set of items. Successful challenges feed a session-scoped
//! score, badge awards, and score-gated story chapters.
//!
//! ## Design Principles
//!
//! 1. **Deterministic core**: the engine never samples randomness. Flare
//!    severity is an explicit input; the `forecast` module owns the RNG
//!    and hands intensities to callers.
//!
//! 2. **Single active session**: at most one `ChallengeSession` exists at
//!    a time. Resolution (success, timeout, cancel) is terminal and
//!    first-wins; late ticks and toggles are silent no-ops.
//!
//! 3. **Host-driven time**: the engine exposes `tick()` and the host event
//!    loop calls it once per second. The countdown is a cancellable timer
//!    owned by the session, so a stray host tick after resolution cannot
//!    re-fire the timeout path.
//!
//! ## Modules
//!
//! - `core`: defender types, badges, game state, deterministic RNG
//! - `challenge`: static challenge definitions, registry, countdown timer,
//!   session state machine, and the `ChallengeEngine` front door
//! - `progression`: score/badge accounting over challenge resolutions
//! - `story`: chapter reference data and the score-gated unlock predicate
//! - `weather`: space-weather feed types, demo provider, TTL cache
//! - `forecast`: seeded flare-intensity sampling and classification
//! - `game`: the `DefenseGame` director wiring everything together

pub mod core;
pub mod challenge;
pub mod progression;
pub mod story;
pub mod weather;
pub mod forecast;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Badge, DefenderType, GameRng, GameState};

pub use crate::challenge::{
    ChallengeDefinition, ChallengeEngine, ChallengeItem, ChallengeRegistry,
    ChallengeSession, CountdownTimer, EngineError, ItemId, Outcome, Resolution,
    TimerTick, ToggleResult, CHALLENGE_SECONDS,
};

pub use crate::progression::{ProgressionTracker, EXPERT_SCORE_THRESHOLD};

pub use crate::story::{is_unlocked, StoryChapter, StoryLibrary};

pub use crate::weather::{
    CachingProvider, DemoProvider, FeedCache, GeomagneticStormReport,
    ParticleRadiationReport, SolarFlareReport, SolarWindReport, SpaceWeatherFeed,
    WeatherAlert, WeatherProvider, DEFAULT_TTL_SECS,
};

pub use crate::forecast::{FlareClass, FlareForecast, FlareForecaster};

pub use crate::game::{DefenseGame, GameError, GameEvent};
