//! Volume series → chart geometry.
//!
//! The dashboard chart is a fixed 800×200 logical canvas showing only the six
//! most recent samples. Older samples are dropped, not resampled.

use crate::domain::history::RawSample;
use crate::shared::units::{from_base_units, to_f64_lossy};
use serde::{Deserialize, Serialize};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 200.0;

/// Samples shown on the chart.
pub const WINDOW: usize = 6;

const X_ORIGIN: f64 = 50.0;
const X_STEP: f64 = 140.0;
const Y_BASELINE: f64 = 180.0;
const Y_RANGE: f64 = 120.0;
/// Right edge of the area fill, where the sixth point sits.
const AREA_RIGHT: f64 = X_ORIGIN + X_STEP * (WINDOW as f64 - 1.0);

/// A point in canvas coordinates. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Points of the volume chart plus the path strings drawn from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub points: Vec<PlotPoint>,
}

fn x_at(index: usize) -> f64 {
    X_ORIGIN + index as f64 * X_STEP
}

impl ChartGeometry {
    /// Map the trailing window of `samples` (oldest first) onto the canvas.
    ///
    /// The largest volume in the window lands on `y = 60`; an all-zero window
    /// is scaled against 1 so every point sits on the baseline.
    pub fn from_samples(samples: &[RawSample]) -> Self {
        let window = &samples[samples.len().saturating_sub(WINDOW)..];
        let volumes: Vec<f64> = window
            .iter()
            .map(|s| to_f64_lossy(&from_base_units(&s.total_volume_base_units)))
            .collect();

        let max = volumes.iter().cloned().fold(0.0_f64, f64::max);
        let max = if max > 0.0 { max } else { 1.0 };

        let points = volumes
            .iter()
            .enumerate()
            .map(|(i, v)| PlotPoint {
                x: x_at(i),
                y: Y_BASELINE - (v / max) * Y_RANGE,
            })
            .collect();

        Self { points }
    }

    /// Geometry from precomputed heights, evenly spaced like live data.
    pub fn from_heights(heights: &[f64]) -> Self {
        Self {
            points: heights
                .iter()
                .enumerate()
                .map(|(i, y)| PlotPoint { x: x_at(i), y: *y })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// SVG path through every point: `"M 50 150 L 190 120 …"`.
    pub fn line_path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { "M" } else { "L" };
                format!("{} {} {}", cmd, p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The line path closed along the bottom edge of the canvas.
    pub fn area_path(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }
        format!(
            "{} L {} {} L {} {} Z",
            self.line_path(),
            AREA_RIGHT,
            CANVAS_HEIGHT,
            X_ORIGIN,
            CANVAS_HEIGHT
        )
    }
}
