//! Core types: defender roles, badges, game state, RNG.
//!
//! Everything in this module is game-agnostic plumbing shared by the
//! challenge engine, the progression tracker, and the forecast simulator.

pub mod badge;
pub mod defender;
pub mod rng;
pub mod state;

pub use badge::Badge;
pub use defender::DefenderType;
pub use rng::GameRng;
pub use state::GameState;
