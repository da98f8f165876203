// Stacked AQI category bar drawn along the y-axis of an already rendered chart
use crate::domain::air_quality::{HealthCategory, Naaqs, Rgb};

/// Value used as the upper end of the Hazardous segment.
const HAZARDOUS_TOP: f64 = 5000.0;
const CORNER_RADIUS: f64 = 1.0;

/// Rectangle in pixel space. (0, 0) is the top left corner and y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

/// A live chart surface that can convert axis values to pixels and draw.
pub trait RenderSurface {
    /// Leftmost pixel of the plot area
    fn plot_left(&self) -> f64;
    fn y_min(&self) -> f64;
    fn y_max(&self) -> f64;
    fn y_to_pixels(&self, value: f64) -> f64;
    /// Draw a filled rectangle with a transparent stroke
    fn draw_rect(&mut self, rect: Rect, fill: Rgb);
}

/// Draw one segment per health category, clipped to the visible y range.
/// Segments starting above the top of the axis are skipped.
pub fn draw_category_bar<S: RenderSurface + ?Sized>(surface: &mut S, width: f64, naaqs: Naaqs) {
    let thresholds = naaqs.thresholds();
    let top_px = surface.y_to_pixels(surface.y_max());
    let x = surface.plot_left();

    for (index, category) in HealthCategory::ALL.iter().enumerate() {
        let lower = thresholds[index];
        let upper = thresholds.get(index + 1).copied().unwrap_or(HAZARDOUS_TOP);

        let y_hi = surface.y_to_pixels(lower);
        // The Good segment is always drawn, even on a degenerate axis
        if index > 0 && y_hi <= top_px {
            continue;
        }

        let y_lo = surface.y_to_pixels(upper).max(top_px);
        let rect = Rect {
            x,
            y: y_lo,
            width,
            height: (y_hi - y_lo).abs(),
            radius: CORNER_RADIUS,
        };
        surface.draw_rect(rect, category.color());
    }

    tracing::trace!(
        "Drew category bar for {} over y range {}..{}",
        naaqs.selector(),
        surface.y_min(),
        surface.y_max()
    );
}
