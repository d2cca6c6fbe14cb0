//! Space-weather feed: display-side data with a cache-or-fetch wrapper.
//!
//! The challenge engine never reads this feed; it exists for dashboard
//! components. The provider contract is narrow: a fixed-shape payload and
//! a TTL cache keyed by data type. Time is passed in as unix seconds so
//! tests stay deterministic.

pub mod cache;
pub mod feed;
pub mod provider;

pub use cache::{CachingProvider, FeedCache, DEFAULT_TTL_SECS};
pub use feed::{
    GeomagneticStormReport, ParticleRadiationReport, SolarFlareReport, SolarWindReport,
    SpaceWeatherFeed, WeatherAlert,
};
pub use provider::{DemoProvider, WeatherProvider};
