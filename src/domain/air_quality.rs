// Air quality domain model - PM2.5 health categories, colors and scales
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector string for the legacy PM2.5 standard
pub const NAAQS_PM25: &str = "PM2.5";
/// Selector string for the 2024 revision of the PM2.5 standard
pub const NAAQS_PM25_2024: &str = "PM2.5_2024";

/// Version of the National Ambient Air Quality Standards used to classify PM2.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Naaqs {
    #[default]
    Pm25,
    Pm25_2024,
}

impl Naaqs {
    /// Resolve a selector string. Anything that is not the legacy selector
    /// falls back to the 2024 standard.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            NAAQS_PM25 => Naaqs::Pm25,
            NAAQS_PM25_2024 => Naaqs::Pm25_2024,
            other => {
                tracing::warn!("Unknown NAAQS selector '{}', using {}", other, NAAQS_PM25_2024);
                Naaqs::Pm25_2024
            }
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Naaqs::Pm25 => NAAQS_PM25,
            Naaqs::Pm25_2024 => NAAQS_PM25_2024,
        }
    }

    /// Lower boundary of each of the six health categories, in µg/m³.
    pub fn thresholds(self) -> [f64; 6] {
        match self {
            Naaqs::Pm25 => [0.0, 12.0, 35.0, 55.0, 150.0, 250.0],
            Naaqs::Pm25_2024 => [0.0, 9.0, 35.0, 55.0, 125.0, 225.0],
        }
    }
}

impl From<String> for Naaqs {
    fn from(selector: String) -> Self {
        Naaqs::from_selector(&selector)
    }
}

impl From<Naaqs> for &'static str {
    fn from(naaqs: Naaqs) -> Self {
        naaqs.selector()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Category colors from green (Good) to maroon (Hazardous).
pub const CATEGORY_COLORS: [Rgb; 6] = [
    Rgb(0, 255, 0),
    Rgb(255, 255, 0),
    Rgb(255, 126, 0),
    Rgb(255, 0, 0),
    Rgb(143, 63, 151),
    Rgb(126, 0, 35),
];

/// Air Quality Category, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl HealthCategory {
    pub const ALL: [HealthCategory; 6] = [
        HealthCategory::Good,
        HealthCategory::Moderate,
        HealthCategory::UnhealthyForSensitive,
        HealthCategory::Unhealthy,
        HealthCategory::VeryUnhealthy,
        HealthCategory::Hazardous,
    ];

    /// 1-based ordinal (1 = Good, 6 = Hazardous)
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthCategory::Good => "Good",
            HealthCategory::Moderate => "Moderate",
            HealthCategory::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            HealthCategory::Unhealthy => "Unhealthy",
            HealthCategory::VeryUnhealthy => "Very Unhealthy",
            HealthCategory::Hazardous => "Hazardous",
        }
    }

    pub fn color(self) -> Rgb {
        CATEGORY_COLORS[self as usize]
    }
}

/// Classify a PM2.5 concentration.
///
/// A value falls in category `k` when `thresholds[k-1] < pm25 <= thresholds[k]`.
/// Negative values satisfy the first comparison and are Good. Anything that
/// fails every comparison (NaN included) is Hazardous.
pub fn classify(pm25: f64, naaqs: Naaqs) -> HealthCategory {
    let t = naaqs.thresholds();
    if pm25 <= t[1] {
        HealthCategory::Good
    } else if pm25 <= t[2] {
        HealthCategory::Moderate
    } else if pm25 <= t[3] {
        HealthCategory::UnhealthyForSensitive
    } else if pm25 <= t[4] {
        HealthCategory::Unhealthy
    } else if pm25 <= t[5] {
        HealthCategory::VeryUnhealthy
    } else {
        HealthCategory::Hazardous
    }
}

pub fn color_for(pm25: f64, naaqs: Naaqs) -> Rgb {
    classify(pm25, naaqs).color()
}

/// Y-axis maximum for a maximum PM2.5 value.
///
/// Snaps to a fixed ladder so the scale doesn't move with every new reading.
pub fn y_axis_ceiling(max_pm25: f64) -> f64 {
    const LADDER: [(f64, f64); 7] = [
        (50.0, 50.0),
        (100.0, 100.0),
        (200.0, 200.0),
        (400.0, 500.0),
        (600.0, 600.0),
        (1000.0, 1000.0),
        (1500.0, 1500.0),
    ];

    LADDER
        .iter()
        .find(|(breakpoint, _)| max_pm25 <= *breakpoint)
        .map(|(_, ceiling)| *ceiling)
        .unwrap_or(1.05 * max_pm25)
}

/// Horizontal line marking a category boundary on the PM2.5 axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLine {
    pub color: Rgb,
    pub width: f64,
    pub value: f64,
}

/// One line per lower boundary of categories 2 through 6.
pub fn threshold_lines(width: f64, naaqs: Naaqs) -> Vec<PlotLine> {
    let thresholds = naaqs.thresholds();
    HealthCategory::ALL[1..]
        .iter()
        .zip(&thresholds[1..])
        .map(|(category, value)| PlotLine {
            color: category.color(),
            width,
            value: *value,
        })
        .collect()
}
