//! Flare forecast simulation.
//!
//! The one place in the crate that samples randomness. Each round draws a
//! fresh flare intensity in [5, 10); the engine receives it as a plain
//! input so challenge runs stay deterministic and replayable.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Flare classification by intensity, matching the reward tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlareClass {
    /// Below 5: minor.
    C,
    /// 5 up to 8: moderate.
    M,
    /// 8 and above: severe.
    X,
}

impl FlareClass {
    /// Classify an intensity on the 0-10 scale.
    #[must_use]
    pub fn classify(intensity: f64) -> Self {
        if intensity >= 8.0 {
            FlareClass::X
        } else if intensity >= 5.0 {
            FlareClass::M
        } else {
            FlareClass::C
        }
    }

    /// Display label ("M-class").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FlareClass::C => "C-class",
            FlareClass::M => "M-class",
            FlareClass::X => "X-class",
        }
    }
}

impl std::fmt::Display for FlareClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One forecast sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlareForecast {
    /// Severity scalar fed to the challenge engine.
    pub intensity: f64,
    /// Classification of that intensity.
    pub class: FlareClass,
}

/// Seeded flare forecaster.
///
/// Samples intensities uniformly in [5, 10), the active-flare band the
/// game plays in, plus a Kp index for the storm display.
#[derive(Clone, Debug)]
pub struct FlareForecaster {
    rng: GameRng,
}

impl FlareForecaster {
    /// Create a forecaster from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("flare"),
        }
    }

    /// Sample the next flare intensity in [5, 10).
    pub fn next_intensity(&mut self) -> f64 {
        self.rng.gen_range_f64(5.0..10.0)
    }

    /// Sample a full forecast: intensity plus classification.
    pub fn next(&mut self) -> FlareForecast {
        let intensity = self.next_intensity();
        FlareForecast {
            intensity,
            class: FlareClass::classify(intensity),
        }
    }

    /// Sample a Kp index in 0..=9 for the geomagnetic-storm display.
    pub fn next_kp_index(&mut self) -> u8 {
        self.rng.gen_range(0..10) as u8
    }
}
