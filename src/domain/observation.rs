// Monitor observations - input record for diurnal charts
use crate::domain::air_quality::Naaqs;
use crate::domain::error::ChartError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

/// Hourly PM2.5 data for a single monitor.
///
/// `datetime`, `pm25` and `nowcast` are parallel, ascending, one sample per hour.
/// `hour_avg` is the 7-day mean for each local hour of the day.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiurnalInput {
    pub datetime: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub pm25: Vec<f64>,
    pub nowcast: Vec<f64>,
    #[serde(rename = "hour_avg", default)]
    pub hour_avg: Vec<f64>,
    pub location_name: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub naaqs: Option<Naaqs>,
}

#[derive(Debug, Clone)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
    pub timezone: Tz,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, display_name: String, timezone_id: &str) -> Result<Self, ChartError> {
        let timezone = timezone_id
            .parse::<Tz>()
            .map_err(|_| ChartError::UnknownTimezone(timezone_id.to_string()))?;

        Ok(Self {
            latitude,
            longitude,
            display_name,
            timezone,
        })
    }
}

impl DiurnalInput {
    pub fn location(&self) -> Result<Location, ChartError> {
        Location::new(
            self.latitude,
            self.longitude,
            self.location_name.clone(),
            &self.timezone,
        )
    }

    /// Supplied title, or the location name when none was given.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.location_name)
    }
}
