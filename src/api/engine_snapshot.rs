use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartLayout;
use crate::interaction::HoverState;

/// Sample count and peak of one marginal curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub samples: usize,
    pub peak_density: f64,
}

/// Active brush window with dates rendered as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushSnapshot {
    pub start: String,
    pub end: String,
    pub label: String,
    pub selected: usize,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub layout: ChartLayout,
    pub point_count: usize,
    pub cell_count: usize,
    pub date_extent: (String, String),
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub legend_active_extent: (f64, f64),
    pub hover: HoverState,
    pub brush: Option<BrushSnapshot>,
    /// Keyed `global.top`, `global.right` and, while brushing,
    /// `brushed.top`, `brushed.right`.
    pub curves: IndexMap<String, CurveSummary>,
    pub metadata: IndexMap<String, String>,
    pub frames_emitted: u64,
}
