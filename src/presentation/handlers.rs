// HTTP request handlers
use crate::application::diurnal_service::ChartVariant;
use crate::domain::air_quality::{classify, threshold_lines, y_axis_ceiling, Naaqs, PlotLine, Rgb};
use crate::domain::category_bar::draw_category_bar;
use crate::domain::chart::ChartConfiguration;
use crate::domain::observation::DiurnalInput;
use crate::infrastructure::bar_surface::{AxisGeometry, RecordingSurface, RectCommand};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub pm25: f64,
    pub naaqs: Option<Naaqs>,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub category: u8,
    pub label: &'static str,
    pub color: Rgb,
}

#[derive(Deserialize)]
pub struct LinesQuery {
    pub width: Option<f64>,
    pub naaqs: Option<Naaqs>,
}

#[derive(Deserialize)]
pub struct YMaxQuery {
    pub pm25: f64,
}

#[derive(Serialize)]
pub struct YMaxResponse {
    pub ymax: f64,
}

#[derive(Deserialize)]
pub struct CategoryBarRequest {
    #[serde(flatten)]
    pub geometry: AxisGeometry,
    pub width: Option<f64>,
    pub naaqs: Option<Naaqs>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full diurnal chart configuration
pub async fn diurnal_chart(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DiurnalInput>,
) -> Result<Json<ChartConfiguration>, ApiError> {
    render_chart(&state, &input, ChartVariant::Full)
}

/// Compact diurnal chart configuration for small multiples
pub async fn small_diurnal_chart(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DiurnalInput>,
) -> Result<Json<ChartConfiguration>, ApiError> {
    render_chart(&state, &input, ChartVariant::Compact)
}

fn render_chart(
    state: &AppState,
    input: &DiurnalInput,
    variant: ChartVariant,
) -> Result<Json<ChartConfiguration>, ApiError> {
    tracing::debug!(
        "Building {:?} chart for {} ({} samples)",
        variant,
        input.location_name,
        input.datetime.len()
    );
    let config = state.chart_service.build_config(input, variant)?;
    Ok(Json(config))
}

pub async fn aqi_category(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Json<CategoryResponse> {
    let naaqs = query.naaqs.unwrap_or(state.chart_settings.naaqs);
    let category = classify(query.pm25, naaqs);

    Json(CategoryResponse {
        category: category.ordinal(),
        label: category.label(),
        color: category.color(),
    })
}

pub async fn aqi_lines(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LinesQuery>,
) -> Json<Vec<PlotLine>> {
    let naaqs = query.naaqs.unwrap_or(state.chart_settings.naaqs);
    Json(threshold_lines(query.width.unwrap_or(2.0), naaqs))
}

pub async fn aqi_ymax(Query(query): Query<YMaxQuery>) -> Json<YMaxResponse> {
    Json(YMaxResponse {
        ymax: y_axis_ceiling(query.pm25),
    })
}

/// Category bar rectangles for a chart the client has already rendered
pub async fn category_bar(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CategoryBarRequest>,
) -> Result<Json<Vec<RectCommand>>, ApiError> {
    let naaqs = request.naaqs.unwrap_or(state.chart_settings.naaqs);
    let width = request.width.unwrap_or(state.chart_settings.bar_width);

    let mut surface = RecordingSurface::new(request.geometry)?;
    draw_category_bar(&mut surface, width, naaqs);
    Ok(Json(surface.into_commands()))
}

#[cfg(test)]
mod tests {
    use crate::application::diurnal_service::tests::{sample_input, FixedSunClock};
    use crate::application::diurnal_service::DiurnalChartService;
    use crate::domain::air_quality::Naaqs;
    use crate::infrastructure::config::ChartSettings;
    use crate::presentation::app_state::AppState;
    use crate::presentation::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            chart_service: DiurnalChartService::new(
                Arc::new(FixedSunClock {
                    tz: chrono_tz::America::Los_Angeles,
                }),
                Naaqs::Pm25,
            ),
            chart_settings: ChartSettings {
                naaqs: Naaqs::Pm25,
                bar_width: 6.0,
            },
        })
    }

    fn input_json() -> Value {
        let input = sample_input();
        json!({
            "datetime": input.datetime,
            "pm25": input.pm25,
            "nowcast": input.nowcast,
            "hour_avg": input.hour_avg,
            "locationName": input.location_name,
            "timezone": input.timezone,
            "latitude": input.latitude,
            "longitude": input.longitude,
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = router(state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = router(state()).oneshot(get("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_diurnal_chart() {
        let (status, json) = send(post_json("/charts/diurnal", &input_json())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"]["text"], "Seattle - 10th & Weller");
        assert_eq!(json["legend"]["enabled"], true);
        assert_eq!(json["series"][2]["data"].as_array().unwrap().len(), 15);
        assert_eq!(json["xAxis"]["plotBands"][1]["from"], 19.75);
    }

    #[tokio::test]
    async fn test_small_diurnal_chart_with_title() {
        let mut body = input_json();
        body["title"] = json!("Pioneer Square");
        body["naaqs"] = json!("PM2.5_2024");

        let (status, json) = send(post_json("/charts/diurnal/small", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"]["text"], "Pioneer Square");
        assert_eq!(json["legend"]["enabled"], false);
        assert_eq!(json["yAxis"]["plotLines"][0]["value"], 9.0);
        assert_eq!(json["yAxis"]["plotLines"][0]["width"], 1.0);
    }

    #[tokio::test]
    async fn test_unknown_timezone_is_rejected() {
        let mut body = input_json();
        body["timezone"] = json!("Atlantis/Central");

        let (status, json) = send(post_json("/charts/diurnal", &body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "unknown timezone 'Atlantis/Central'");
    }

    #[tokio::test]
    async fn test_aqi_category() {
        let (status, json) = send(get("/aqi/category?pm25=40")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category"], 3);
        assert_eq!(json["label"], "Unhealthy for Sensitive Groups");
        assert_eq!(json["color"], "rgb(255,126,0)");

        let (_, json) = send(get("/aqi/category?pm25=10&naaqs=PM2.5_2024")).await;
        assert_eq!(json["category"], 2);
    }

    #[tokio::test]
    async fn test_aqi_lines_and_ymax() {
        let (_, lines) = send(get("/aqi/lines?width=3")).await;
        let lines = lines.as_array().unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4]["value"], 250.0);
        assert_eq!(lines[4]["width"], 3.0);

        let (_, json) = send(get("/aqi/ymax?pm25=2000")).await;
        assert_eq!(json["ymax"], 2100.0);
    }

    #[tokio::test]
    async fn test_category_bar() {
        let body = json!({
            "plotLeft": 50.0,
            "yMin": 0.0,
            "yMax": 50.0,
            "yMinPixel": 300.0,
            "yMaxPixel": 0.0,
        });

        let (status, json) = send(post_json("/aqi/bar", &body)).await;
        assert_eq!(status, StatusCode::OK);
        let rects = json.as_array().unwrap();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0]["width"], 6.0);
        assert_eq!(rects[2]["fill"], "rgb(255,126,0)");
    }

    #[tokio::test]
    async fn test_category_bar_rejects_flat_axis() {
        let body = json!({
            "plotLeft": 50.0,
            "yMin": 0.0,
            "yMax": 0.0,
            "yMinPixel": 300.0,
            "yMaxPixel": 0.0,
        });

        let (status, json) = send(post_json("/aqi/bar", &body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "y axis range 0..0 is empty or not finite");
    }
}
