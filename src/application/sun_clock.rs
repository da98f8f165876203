// Port for sunrise/sunset lookups
use crate::domain::error::ChartError;
use chrono::{DateTime, NaiveDate, Utc};

/// Sun events for one calendar day at one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunTimes {
    Regular {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// Polar day - the sun never sets
    AllDay,
    /// Polar night - the sun never rises
    AllNight,
}

pub trait SunClock: Send + Sync {
    /// Sunrise and sunset for the given date at the given coordinates
    fn sun_times(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<SunTimes, ChartError>;
}
