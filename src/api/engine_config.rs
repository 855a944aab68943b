use serde::{Deserialize, Serialize};

use crate::core::density::{DEFAULT_BANDWIDTH, DEFAULT_GRID_SIZE};
use crate::core::scale_registry::DEFAULT_DENSITY_DOMAIN_MAX;
use crate::core::{ChartLayout, DEFAULT_BRUSH_WINDOW_DAYS};

/// Tooltip placement relative to the hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { dx: -90.0, dy: 25.0 }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings;
/// every field except `layout` has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterEngineConfig {
    pub layout: ChartLayout,
    #[serde(default = "default_bandwidth")]
    pub bandwidth: f64,
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    #[serde(default = "default_brush_window_days")]
    pub brush_window_days: i64,
    #[serde(default = "default_density_domain_max")]
    pub density_domain_max: f64,
    #[serde(default = "default_brushed_density_extent_px")]
    pub brushed_density_extent_px: f64,
    #[serde(default = "default_true")]
    pub smooth_curves: bool,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_hover_dot_radius")]
    pub hover_dot_radius: f64,
    #[serde(default = "default_hover_marker_thickness")]
    pub hover_marker_thickness: f64,
    #[serde(default = "default_hover_marker_opacity")]
    pub hover_marker_opacity: f64,
    #[serde(default = "default_global_curve_opacity")]
    pub global_curve_opacity: f64,
    #[serde(default = "default_brushed_curve_opacity")]
    pub brushed_curve_opacity: f64,
    #[serde(default = "default_dimmed_point_opacity")]
    pub dimmed_point_opacity: f64,
    #[serde(default = "default_brush_exit_transition_ms")]
    pub brush_exit_transition_ms: u32,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
    /// Legend highlight bar width as a fraction of the legend width.
    #[serde(default = "default_highlight_bar_ratio")]
    pub highlight_bar_ratio: f64,
}

impl ScatterEngineConfig {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            bandwidth: default_bandwidth(),
            grid_size: default_grid_size(),
            brush_window_days: default_brush_window_days(),
            density_domain_max: default_density_domain_max(),
            brushed_density_extent_px: default_brushed_density_extent_px(),
            smooth_curves: true,
            point_radius: default_point_radius(),
            hover_dot_radius: default_hover_dot_radius(),
            hover_marker_thickness: default_hover_marker_thickness(),
            hover_marker_opacity: default_hover_marker_opacity(),
            global_curve_opacity: default_global_curve_opacity(),
            brushed_curve_opacity: default_brushed_curve_opacity(),
            dimmed_point_opacity: default_dimmed_point_opacity(),
            brush_exit_transition_ms: default_brush_exit_transition_ms(),
            tooltip_offset: TooltipOffset::default(),
            highlight_bar_ratio: default_highlight_bar_ratio(),
        }
    }

    /// Square chart of `size` pixels with default margins and legend.
    #[must_use]
    pub fn square(size: f64) -> Self {
        Self::new(ChartLayout::square(size))
    }

    #[must_use]
    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_brush_window_days(mut self, days: i64) -> Self {
        self.brush_window_days = days;
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smooth_curves: bool) -> Self {
        self.smooth_curves = smooth_curves;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, dx: f64, dy: f64) -> Self {
        self.tooltip_offset = TooltipOffset { dx, dy };
        self
    }

    #[must_use]
    pub fn with_brush_exit_transition_ms(mut self, transition_ms: u32) -> Self {
        self.brush_exit_transition_ms = transition_ms;
        self
    }

    #[must_use]
    pub fn highlight_bar_width(&self) -> f64 {
        self.layout.legend.width * self.highlight_bar_ratio
    }
}

fn default_bandwidth() -> f64 {
    DEFAULT_BANDWIDTH
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_brush_window_days() -> i64 {
    DEFAULT_BRUSH_WINDOW_DAYS
}

fn default_density_domain_max() -> f64 {
    DEFAULT_DENSITY_DOMAIN_MAX
}

fn default_brushed_density_extent_px() -> f64 {
    10.0
}

fn default_true() -> bool {
    true
}

fn default_point_radius() -> f64 {
    3.0
}

fn default_hover_dot_radius() -> f64 {
    6.0
}

fn default_hover_marker_thickness() -> f64 {
    15.0
}

fn default_hover_marker_opacity() -> f64 {
    0.8
}

fn default_global_curve_opacity() -> f64 {
    0.35
}

fn default_brushed_curve_opacity() -> f64 {
    0.7
}

fn default_dimmed_point_opacity() -> f64 {
    0.05
}

fn default_brush_exit_transition_ms() -> u32 {
    500
}

fn default_highlight_bar_ratio() -> f64 {
    0.05
}
