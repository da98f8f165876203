// Diurnal chart service - Use case for building "yesterday vs today" PM2.5 charts
use crate::application::sun_clock::{SunClock, SunTimes};
use crate::application::windowing::{clamped_slice, local_fractional_hour, DayWindows};
use crate::domain::air_quality::{color_for, threshold_lines, y_axis_ceiling, Naaqs};
use crate::domain::chart::{
    hour_label, Accessibility, AxisLabels, AxisTitle, ChartConfiguration, ChartOptions, Legend,
    LineOptions, Marker, PlotBand, PlotOptions, Series, SeriesPoint, Title, TitleStyle, XAxis,
    YAxis,
};
use crate::domain::error::ChartError;
use crate::domain::observation::{DiurnalInput, Location};
use std::sync::Arc;

const NIGHT_SHADE: &str = "rgb(0,0,0,0.1)";
const PM25_AXIS_TITLE: &str = "PM2.5 (\u{b5}g/m\u{b3})";
const GRID_COLOR: &str = "#ddd";

const MEAN_SERIES: &str = "7 Day Mean";
const YESTERDAY_SERIES: &str = "Yesterday";
const TODAY_SERIES: &str = "Today";
const MEAN_COLOR: &str = "#aaa";
const YESTERDAY_COLOR: &str = "#888";
const TODAY_COLOR: &str = "#333";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartVariant {
    #[default]
    Full,
    /// No legend or axis labels, for "small multiples" displays
    Compact,
}

/// Everything both variants share: the data, its colors and the axis extents.
struct PreparedData {
    title: String,
    naaqs: Naaqs,
    hour_avg: Vec<SeriesPoint>,
    yesterday: Vec<SeriesPoint>,
    today: Vec<SeriesPoint>,
    y_max: f64,
    sunrise_hour: f64,
    sunset_hour: f64,
}

impl PreparedData {
    fn night_bands(&self) -> Vec<PlotBand> {
        vec![
            PlotBand {
                color: NIGHT_SHADE,
                from: 0.0,
                to: self.sunrise_hour,
            },
            PlotBand {
                color: NIGHT_SHADE,
                from: self.sunset_hour,
                to: 24.0,
            },
        ]
    }
}

#[derive(Clone)]
pub struct DiurnalChartService {
    sun_clock: Arc<dyn SunClock>,
    default_naaqs: Naaqs,
}

impl DiurnalChartService {
    pub fn new(sun_clock: Arc<dyn SunClock>, default_naaqs: Naaqs) -> Self {
        Self {
            sun_clock,
            default_naaqs,
        }
    }

    pub fn build_full_config(&self, input: &DiurnalInput) -> Result<ChartConfiguration, ChartError> {
        self.build_config(input, ChartVariant::Full)
    }

    pub fn build_compact_config(&self, input: &DiurnalInput) -> Result<ChartConfiguration, ChartError> {
        self.build_config(input, ChartVariant::Compact)
    }

    pub fn build_config(
        &self,
        input: &DiurnalInput,
        variant: ChartVariant,
    ) -> Result<ChartConfiguration, ChartError> {
        let prepared = self.prepare(input)?;
        Ok(match variant {
            ChartVariant::Full => full_config(prepared),
            ChartVariant::Compact => compact_config(prepared),
        })
    }

    fn prepare(&self, input: &DiurnalInput) -> Result<PreparedData, ChartError> {
        let location = input.location()?;
        let naaqs = input.naaqs.unwrap_or(self.default_naaqs);

        let windows = DayWindows::from_hourly(&input.datetime, location.timezone)
            .ok_or(ChartError::EmptySeries)?;
        tracing::debug!(
            "{}: yesterday {:?}, today {:?} of {} samples",
            location.display_name,
            windows.yesterday,
            windows.today,
            input.datetime.len()
        );

        let yesterday = clamped_slice(&input.nowcast, &windows.yesterday);
        let today = clamped_slice(&input.nowcast, &windows.today);

        let max_pm25 = input
            .hour_avg
            .iter()
            .chain(yesterday)
            .chain(today)
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let (sunrise_hour, sunset_hour) = self.night_bounds(input, &location)?;

        Ok(PreparedData {
            title: input.display_title().to_string(),
            naaqs,
            hour_avg: input.hour_avg.iter().copied().map(SeriesPoint::Value).collect(),
            yesterday: colored_points(yesterday, naaqs),
            today: colored_points(today, naaqs),
            y_max: y_axis_ceiling(max_pm25),
            sunrise_hour,
            sunset_hour,
        })
    }

    /// Local sunrise and sunset hours on the day of the series midpoint.
    fn night_bounds(&self, input: &DiurnalInput, location: &Location) -> Result<(f64, f64), ChartError> {
        let len = input.datetime.len();
        let middle_idx = ((len as f64 / 2.0).round() as usize).min(len.saturating_sub(1));
        let middle = input.datetime.get(middle_idx).ok_or(ChartError::EmptySeries)?;
        let local_date = middle.with_timezone(&location.timezone).date_naive();

        let times = self
            .sun_clock
            .sun_times(local_date, location.latitude, location.longitude)?;

        let bounds = match times {
            SunTimes::Regular { sunrise, sunset } => (
                local_fractional_hour(sunrise, location.timezone),
                local_fractional_hour(sunset, location.timezone),
            ),
            SunTimes::AllDay => (0.0, 24.0),
            SunTimes::AllNight => (12.0, 12.0),
        };

        tracing::debug!(
            "{} on {}: sunrise {:.2}h, sunset {:.2}h",
            location.display_name,
            local_date,
            bounds.0,
            bounds.1
        );
        Ok(bounds)
    }
}

fn colored_points(values: &[f64], naaqs: Naaqs) -> Vec<SeriesPoint> {
    values
        .iter()
        .map(|&y| SeriesPoint::Colored {
            y,
            color: color_for(y, naaqs),
        })
        .collect()
}

fn full_config(prepared: PreparedData) -> ChartConfiguration {
    let plot_bands = prepared.night_bands();

    ChartConfiguration {
        accessibility: Accessibility { enabled: false },
        chart: ChartOptions {
            plot_border_color: Some(GRID_COLOR),
            plot_border_width: Some(1.0),
            ..Default::default()
        },
        plot_options: PlotOptions {
            line: LineOptions { animation: false },
        },
        title: Title {
            text: prepared.title,
            style: None,
        },
        x_axis: XAxis {
            tick_interval: Some(3.0),
            tickmark_placement: Some("on"),
            categories: Some((0..24).map(hour_label).collect()),
            plot_bands,
            ..Default::default()
        },
        y_axis: YAxis {
            min: 0.0,
            max: prepared.y_max,
            grid_line_color: Some(GRID_COLOR),
            grid_line_dash_style: Some("Dash"),
            grid_line_width: Some(1.0),
            title: AxisTitle {
                text: PM25_AXIS_TITLE,
            },
            plot_lines: threshold_lines(2.0, prepared.naaqs),
        },
        legend: Legend {
            enabled: true,
            vertical_align: Some("top"),
        },
        series: vec![
            Series {
                name: MEAN_SERIES,
                kind: "line",
                data: prepared.hour_avg,
                color: MEAN_COLOR,
                line_width: 10.0,
                marker: Marker {
                    radius: Some(1.0),
                    symbol: Some("square"),
                    fill_color: Some("transparent"),
                    ..Default::default()
                },
            },
            Series {
                name: YESTERDAY_SERIES,
                kind: "line",
                data: prepared.yesterday,
                color: YESTERDAY_COLOR,
                line_width: 1.0,
                marker: circle_marker(3.0, YESTERDAY_COLOR, 1.0),
            },
            Series {
                name: TODAY_SERIES,
                kind: "line",
                data: prepared.today,
                color: TODAY_COLOR,
                line_width: 2.0,
                marker: circle_marker(5.0, TODAY_COLOR, 1.0),
            },
        ],
    }
}

fn compact_config(prepared: PreparedData) -> ChartConfiguration {
    let plot_bands = prepared.night_bands();

    ChartConfiguration {
        accessibility: Accessibility { enabled: false },
        chart: ChartOptions {
            animation: Some(false),
            ..Default::default()
        },
        plot_options: PlotOptions {
            line: LineOptions { animation: false },
        },
        title: Title {
            text: prepared.title,
            style: Some(TitleStyle {
                color: "#333333",
                font_size: "12px",
            }),
        },
        x_axis: XAxis {
            visible: Some(true),
            tick_length: Some(0.0),
            labels: Some(AxisLabels { enabled: false }),
            plot_bands,
            ..Default::default()
        },
        y_axis: YAxis {
            min: 0.0,
            max: prepared.y_max,
            grid_line_color: None,
            grid_line_dash_style: None,
            grid_line_width: None,
            title: AxisTitle { text: "" },
            plot_lines: threshold_lines(1.0, prepared.naaqs),
        },
        legend: Legend {
            enabled: false,
            vertical_align: None,
        },
        series: vec![
            Series {
                name: MEAN_SERIES,
                kind: "line",
                data: prepared.hour_avg,
                color: MEAN_COLOR,
                line_width: 5.0,
                marker: Marker {
                    enabled: Some(false),
                    ..Default::default()
                },
            },
            Series {
                name: YESTERDAY_SERIES,
                kind: "line",
                data: prepared.yesterday,
                color: YESTERDAY_COLOR,
                line_width: 0.5,
                marker: circle_marker(1.5, YESTERDAY_COLOR, 0.3),
            },
            Series {
                name: TODAY_SERIES,
                kind: "line",
                data: prepared.today,
                color: TODAY_COLOR,
                line_width: 1.0,
                marker: circle_marker(2.0, TODAY_COLOR, 0.5),
            },
        ],
    }
}

fn circle_marker(radius: f64, line_color: &'static str, line_width: f64) -> Marker {
    Marker {
        radius: Some(radius),
        symbol: Some("circle"),
        line_color: Some(line_color),
        line_width: Some(line_width),
        ..Default::default()
    }
}
