// Domain layer - Air quality rules and chart configuration types
pub mod air_quality;
pub mod category_bar;
pub mod chart;
pub mod error;
pub mod observation;
