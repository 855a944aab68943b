use indexmap::IndexMap;

use crate::core::{
    Dataset, DensityCurve, DensityEstimator, LegendDateScale, MarginalSide, PathVertex,
    ScaleRegistry, Tessellation,
};
use crate::interaction::{BrushState, HoverState, InteractionState, Selection};
use crate::render::{MonthPalette, RenderSurface};

use super::{ScatterEngine, ScatterEngineConfig};

impl<R: RenderSurface> ScatterEngine<R> {
    #[must_use]
    pub fn config(&self) -> ScatterEngineConfig {
        self.core.model.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.core.model.dataset
    }

    #[must_use]
    pub fn scales(&self) -> ScaleRegistry {
        self.core.model.scales
    }

    #[must_use]
    pub fn legend_scale(&self) -> LegendDateScale {
        self.core.model.legend_scale
    }

    #[must_use]
    pub fn estimator(&self) -> DensityEstimator {
        self.core.model.estimator
    }

    #[must_use]
    pub fn tessellation(&self) -> &Tessellation {
        &self.core.model.tessellation
    }

    #[must_use]
    pub fn palette(&self) -> &MonthPalette {
        &self.core.model.palette
    }

    /// Density curve of the full dataset on the strip of `side`.
    #[must_use]
    pub fn global_curve(&self, side: MarginalSide) -> &DensityCurve {
        self.core.model.global_curve(side)
    }

    /// Density curve of the brushed subset, `None` when not brushing.
    #[must_use]
    pub fn brushed_curve(&self, side: MarginalSide) -> Option<&DensityCurve> {
        self.core
            .runtime
            .brush
            .as_ref()
            .map(|brush| brush.curve(side))
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.core
            .runtime
            .brush
            .as_ref()
            .map(|brush| &brush.selection)
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.core.runtime.interaction
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.core.runtime.interaction.hover()
    }

    #[must_use]
    pub fn brush_state(&self) -> BrushState {
        self.core.runtime.interaction.brush()
    }

    /// Pixel position of point `index` inside the plot area.
    #[must_use]
    pub fn projected_point(&self, index: usize) -> Option<PathVertex> {
        self.core.model.projected(index)
    }

    /// Nearest point to a plot-area position, `None` for non-finite input.
    #[must_use]
    pub fn nearest_point(&self, x: f64, y: f64) -> Option<usize> {
        self.core
            .model
            .tessellation
            .nearest_point(PathVertex::new(x, y))
    }

    #[must_use]
    pub fn frames_emitted(&self) -> u64 {
        self.core.runtime.frames_emitted
    }

    /// Host-defined key/value pairs carried into snapshots.
    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.core.runtime.metadata
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.core.runtime.metadata.insert(key.into(), value.into());
    }

    pub fn remove_metadata(&mut self, key: &str) -> Option<String> {
        self.core.runtime.metadata.shift_remove(key)
    }
}
