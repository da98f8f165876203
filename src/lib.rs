//! PM2.5 diurnal chart configuration.
//!
//! Builds declarative "yesterday vs today" chart configurations for hourly
//! PM2.5 series: day windows, AQI category colors, night shading and
//! threshold lines. The HTTP layer in [`presentation`] is a thin wrapper
//! around [`application::diurnal_service::DiurnalChartService`].
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
