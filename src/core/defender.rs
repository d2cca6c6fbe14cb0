//! Defender roles - the four challenge variants.

use serde::{Deserialize, Serialize};

/// One of the four defender roles a player can take on.
///
/// The role identifies which challenge variant runs and is immutable for
/// the lifetime of a session. Each role's challenge can be completed at
/// most once per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefenderType {
    /// Activate shields to prevent communication blackouts.
    Satellite,
    /// Send alerts to pilots so flights can reroute.
    Pilot,
    /// Help farmers protect GPS-dependent equipment.
    Farmer,
    /// Balance grid load to avoid cascading outages.
    PowerGrid,
}

impl DefenderType {
    /// Number of defender roles.
    pub const COUNT: usize = 4;

    /// All defender roles, in display order.
    #[must_use]
    pub const fn all() -> [DefenderType; Self::COUNT] {
        [
            DefenderType::Satellite,
            DefenderType::Pilot,
            DefenderType::Farmer,
            DefenderType::PowerGrid,
        ]
    }

    /// Human-readable role name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DefenderType::Satellite => "Satellite Shield",
            DefenderType::Pilot => "Pilot Alert",
            DefenderType::Farmer => "Farm Protection",
            DefenderType::PowerGrid => "Grid Manager",
        }
    }
}

impl std::fmt::Display for DefenderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            DefenderType::Satellite => "satellite",
            DefenderType::Pilot => "pilot",
            DefenderType::Farmer => "farmer",
            DefenderType::PowerGrid => "power-grid",
        };
        write!(f, "{tag}")
    }
}
