// Presentation layer - HTTP routes and handlers
pub mod app_state;
pub mod error;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    aqi_category, aqi_lines, aqi_ymax, category_bar, diurnal_chart, health_check,
    small_diurnal_chart,
};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/charts/diurnal", post(diurnal_chart))
        .route("/charts/diurnal/small", post(small_diurnal_chart))
        .route("/aqi/category", get(aqi_category))
        .route("/aqi/lines", get(aqi_lines))
        .route("/aqi/ymax", get(aqi_ymax))
        .route("/aqi/bar", post(category_bar))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
