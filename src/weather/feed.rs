//! Fixed-shape space-weather payload.
//!
//! Field names serialize in camelCase to match the wire payload the
//! dashboard consumes. Timestamps are unix seconds.

use serde::{Deserialize, Serialize};

/// Solar-flare descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarFlareReport {
    /// Current flare class label ("M-class").
    pub current: String,
    /// Intensity on a 0-10 scale.
    pub intensity: f64,
    /// When the last flare was observed.
    pub last_flare: u64,
    /// Forecast text.
    pub forecast: String,
}

/// Geomagnetic-storm descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeomagneticStormReport {
    /// Kp index, 0-9.
    pub kp_index: u8,
    /// Status label ("Minor Storm").
    pub status: String,
    /// Aurora visibility text.
    pub aurora: String,
    /// Expected ground impact text.
    pub impact: String,
}

/// Solar-wind descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarWindReport {
    /// Speed in km/s.
    pub speed: f64,
    /// Particle density in protons/cm^3.
    pub density: f64,
    /// Temperature in Kelvin.
    pub temperature: f64,
    /// Magnetic-field scalar in nT.
    pub magnetic_field: f64,
}

/// Particle-radiation descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleRadiationReport {
    /// Proton flux in pfu.
    pub proton_flux: f64,
    /// Electron flux in pfu.
    pub electron_flux: f64,
    /// Radiation storm level label ("S1 - Minor").
    pub radiation_level: String,
}

/// One active alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    /// Alert category ("Solar Flare").
    #[serde(rename = "type")]
    pub alert_type: String,
    /// Severity label.
    pub severity: String,
    /// Human-readable message.
    pub message: String,
    /// When the alert was issued.
    pub timestamp: u64,
}

/// The full feed payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceWeatherFeed {
    pub solar_flares: SolarFlareReport,
    pub geomagnetic_storm: GeomagneticStormReport,
    pub solar_wind: SolarWindReport,
    pub particle_radiation: ParticleRadiationReport,
    pub alerts: Vec<WeatherAlert>,
    pub last_update: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_shape() {
        let report = GeomagneticStormReport {
            kp_index: 5,
            status: "Minor Storm".to_string(),
            aurora: "Visible at 55 degrees latitude".to_string(),
            impact: "GPS and radio disruptions possible".to_string(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"kpIndex\":5"));

        let alert = WeatherAlert {
            alert_type: "Solar Flare".to_string(),
            severity: "Moderate".to_string(),
            message: "M6.5 flare detected".to_string(),
            timestamp: 1_700_000_000,
        };
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"type\":\"Solar Flare\""));
    }
}
