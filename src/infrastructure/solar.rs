// Sunrise/sunset adapter backed by the NREL Solar Position Algorithm
use crate::application::sun_clock::{SunClock, SunTimes};
use crate::domain::error::ChartError;
use chrono::{NaiveDate, NaiveTime};
use solar_positioning::{spa, Horizon, SunriseResult};

/// Difference between terrestrial and universal time, close enough for minute precision
const DELTA_T_SECONDS: f64 = 69.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpaSunClock;

impl SunClock for SpaSunClock {
    fn sun_times(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<SunTimes, ChartError> {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        let result = spa::sunrise_sunset_for_horizon(
            midnight,
            latitude,
            longitude,
            DELTA_T_SECONDS,
            Horizon::SunriseSunset,
        )
        .map_err(|e| ChartError::SunPosition(e.to_string()))?;

        Ok(match result {
            SunriseResult::RegularDay { sunrise, sunset, .. } => SunTimes::Regular { sunrise, sunset },
            SunriseResult::AllDay { .. } => SunTimes::AllDay,
            SunriseResult::AllNight { .. } => SunTimes::AllNight,
        })
    }
}
