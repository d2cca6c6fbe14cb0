//! Feed providers.
//!
//! `WeatherProvider` is the opaque data-provider boundary. The shipped
//! implementation is `DemoProvider`, which returns the same simulated
//! snapshot a production service would fetch from NASA/NOAA APIs.

use super::feed::{
    GeomagneticStormReport, ParticleRadiationReport, SolarFlareReport, SolarWindReport,
    SpaceWeatherFeed, WeatherAlert,
};

/// Source of space-weather feeds.
pub trait WeatherProvider {
    /// Produce a feed snapshot. `now` is unix seconds, used to stamp
    /// relative timestamps in the payload.
    fn fetch(&mut self, now: u64) -> SpaceWeatherFeed;
}

/// Provider returning a fixed demo payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoProvider;

impl WeatherProvider for DemoProvider {
    fn fetch(&mut self, now: u64) -> SpaceWeatherFeed {
        SpaceWeatherFeed {
            solar_flares: SolarFlareReport {
                current: "M-class".to_string(),
                intensity: 6.5,
                last_flare: now.saturating_sub(3600),
                forecast: "Moderate activity expected".to_string(),
            },
            geomagnetic_storm: GeomagneticStormReport {
                kp_index: 5,
                status: "Minor Storm".to_string(),
                aurora: "Visible at 55 degrees latitude".to_string(),
                impact: "GPS and radio disruptions possible".to_string(),
            },
            solar_wind: SolarWindReport {
                speed: 450.0,
                density: 8.2,
                temperature: 150_000.0,
                magnetic_field: 12.0,
            },
            particle_radiation: ParticleRadiationReport {
                proton_flux: 2.1,
                electron_flux: 1500.0,
                radiation_level: "S1 - Minor".to_string(),
            },
            alerts: vec![WeatherAlert {
                alert_type: "Solar Flare".to_string(),
                severity: "Moderate".to_string(),
                message: "M6.5 flare detected, minor radio blackouts possible".to_string(),
                timestamp: now,
            }],
            last_update: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_payload_shape() {
        let mut provider = DemoProvider;
        let feed = provider.fetch(10_000);

        assert_eq!(feed.solar_flares.current, "M-class");
        assert_eq!(feed.solar_flares.intensity, 6.5);
        assert_eq!(feed.solar_flares.last_flare, 6_400);
        assert_eq!(feed.geomagnetic_storm.kp_index, 5);
        assert_eq!(feed.alerts.len(), 1);
        assert_eq!(feed.last_update, 10_000);
    }
}
