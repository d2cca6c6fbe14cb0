//! Achievement badges.
//!
//! A badge is granted at most once per round when its cumulative condition
//! is met. The conditions themselves live in the progression tracker; this
//! module only names the badges.

use serde::{Deserialize, Serialize};

/// A named achievement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// Cumulative score reached 500.
    SolarFlareExpert,
    /// All four defender challenges completed in the current round.
    EarthProtector,
}

impl Badge {
    /// Display name, as shown on the stats panel.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Badge::SolarFlareExpert => "Solar Flare Expert",
            Badge::EarthProtector => "Earth Protector",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_names() {
        assert_eq!(Badge::SolarFlareExpert.name(), "Solar Flare Expert");
        assert_eq!(Badge::EarthProtector.to_string(), "Earth Protector");
    }
}
