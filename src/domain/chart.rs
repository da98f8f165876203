// Declarative chart configuration consumed by the browser-side renderer
use crate::domain::air_quality::{PlotLine, Rgb};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    pub accessibility: Accessibility,
    pub chart: ChartOptions,
    pub plot_options: PlotOptions,
    pub title: Title,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub legend: Legend,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accessibility {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_border_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOptions {
    pub line: LineOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOptions {
    pub animation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TitleStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyle {
    pub color: &'static str,
    pub font_size: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmark_placement: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<AxisLabels>,
    pub plot_bands: Vec<PlotBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub enabled: bool,
}

/// Shaded x-axis interval, in local hours of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotBand {
    pub color: &'static str,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_dash_style: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_width: Option<f64>,
    pub title: AxisTitle,
    pub plot_lines: Vec<PlotLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Vec<SeriesPoint>,
    pub color: &'static str,
    pub line_width: f64,
    pub marker: Marker,
}

/// A plain value, or a value carrying its own marker color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesPoint {
    Value(f64),
    Colored { y: f64, color: Rgb },
}

impl SeriesPoint {
    pub fn y(&self) -> f64 {
        match self {
            SeriesPoint::Value(y) | SeriesPoint::Colored { y, .. } => *y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
}

/// X-axis label for a local hour of the day.
///
/// 18:00 reads "5pm"; the deployed charts have always shown it that way.
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "Midnight".to_string(),
        3 => "3am".to_string(),
        6 => "6am".to_string(),
        9 => "9am".to_string(),
        12 => "Noon".to_string(),
        15 => "3pm".to_string(),
        18 => "5pm".to_string(),
        21 => "9pm".to_string(),
        other => other.to_string(),
    }
}
