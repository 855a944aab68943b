use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Outer spacing around the plot bounds. The top and right margins double as
/// the depth of the marginal density strips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 90.0,
            right: 90.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

/// Size and anchoring of the legend strip inside the plot bounds.
///
/// The strip is anchored from the bottom-right corner of the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub width: f64,
    pub height: f64,
    pub right_inset: f64,
    pub bottom_inset: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            width: 250.0,
            height: 26.0,
            right_inset: 9.0,
            bottom_inset: 37.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub legend: LegendLayout,
}

impl ChartLayout {
    /// Square chart with default margins and legend, sized like a host
    /// would size it from `min(window_width, window_height)`.
    #[must_use]
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
            margins: Margins::default(),
            legend: LegendLayout::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendLayout) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn bounded_width(self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn bounded_height(self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Top-left corner of the legend strip, in plot-bounds coordinates.
    #[must_use]
    pub fn legend_origin(self) -> (f64, f64) {
        (
            self.bounded_width() - self.legend.width - self.legend.right_inset,
            self.bounded_height() - self.legend.bottom_inset,
        )
    }

    pub fn validate(self) -> ScatterResult<()> {
        let width = self.bounded_width();
        let height = self.bounded_height();
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ScatterError::InvalidLayout { width, height });
        }
        for (name, value) in [
            ("margins.top", self.margins.top),
            ("margins.right", self.margins.right),
            ("margins.bottom", self.margins.bottom),
            ("margins.left", self.margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.legend.width.is_finite() || self.legend.width <= 0.0 {
            return Err(ScatterError::InvalidConfig(
                "legend width must be finite and > 0".to_owned(),
            ));
        }
        if !self.legend.height.is_finite() || self.legend.height <= 0.0 {
            return Err(ScatterError::InvalidConfig(
                "legend height must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Vertex in pixel space, used for projected points and path geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// One daily temperature record. Immutable once the dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(date: NaiveDate, min_temp: f64, max_temp: f64) -> Self {
        Self {
            date,
            min_temp,
            max_temp,
        }
    }
}
