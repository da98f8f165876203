// Render surface that records rectangles for a client-side renderer to replay
use crate::domain::air_quality::Rgb;
use crate::domain::category_bar::{Rect, RenderSurface};
use crate::domain::error::ChartError;
use serde::{Deserialize, Serialize};

/// Pixel geometry of a rendered chart's y-axis, as reported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisGeometry {
    pub plot_left: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Pixel row of `y_min` (the bottom of the plot area)
    pub y_min_pixel: f64,
    /// Pixel row of `y_max` (the top of the plot area)
    pub y_max_pixel: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectCommand {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub r: f64,
    pub fill: Rgb,
    pub stroke: &'static str,
}

/// Linear y-axis surface collecting draw commands.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    geometry: AxisGeometry,
    commands: Vec<RectCommand>,
}

impl RecordingSurface {
    /// Fails unless `y_min < y_max` and every coordinate is finite.
    pub fn new(geometry: AxisGeometry) -> Result<Self, ChartError> {
        let g = &geometry;
        let finite = [g.plot_left, g.y_min, g.y_max, g.y_min_pixel, g.y_max_pixel]
            .iter()
            .all(|v| v.is_finite());
        if !finite || g.y_max <= g.y_min {
            return Err(ChartError::DegenerateAxis {
                y_min: g.y_min,
                y_max: g.y_max,
            });
        }

        Ok(Self {
            geometry,
            commands: Vec::new(),
        })
    }

    pub fn into_commands(self) -> Vec<RectCommand> {
        self.commands
    }
}

impl RenderSurface for RecordingSurface {
    fn plot_left(&self) -> f64 {
        self.geometry.plot_left
    }

    fn y_min(&self) -> f64 {
        self.geometry.y_min
    }

    fn y_max(&self) -> f64 {
        self.geometry.y_max
    }

    fn y_to_pixels(&self, value: f64) -> f64 {
        let g = &self.geometry;
        g.y_min_pixel + (value - g.y_min) * (g.y_max_pixel - g.y_min_pixel) / (g.y_max - g.y_min)
    }

    fn draw_rect(&mut self, rect: Rect, fill: Rgb) {
        self.commands.push(RectCommand {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            r: rect.radius,
            fill,
            stroke: "transparent",
        });
    }
}
