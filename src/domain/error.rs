// Chart building errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("time series is empty")]
    EmptySeries,

    #[error("y axis range {y_min}..{y_max} is empty or not finite")]
    DegenerateAxis { y_min: f64, y_max: f64 },

    #[error("sunrise/sunset calculation failed: {0}")]
    SunPosition(String),
}
