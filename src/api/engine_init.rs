use tracing::debug;

use crate::core::Dataset;
use crate::error::ScatterResult;
use crate::render::RenderSurface;

use super::validation::validate_engine_config;
use super::{
    ScatterEngine, ScatterEngineConfig, chart_model::ScatterModel,
    chart_runtime::ChartRuntimeState, engine_core::EngineCore,
};

impl<R: RenderSurface> ScatterEngine<R> {
    /// Creates a fully initialized engine and emits the initial scene.
    pub fn new(surface: R, dataset: Dataset, config: ScatterEngineConfig) -> ScatterResult<Self> {
        validate_engine_config(&config)?;
        let model = ScatterModel::build(dataset, config)?;

        let mut engine = Self {
            surface,
            core: EngineCore {
                model,
                runtime: ChartRuntimeState::idle(),
            },
        };
        engine.render()?;
        debug!(
            points = engine.core.model.dataset.len(),
            cells = engine.core.model.tessellation.len(),
            "scatter engine initialized"
        );
        Ok(engine)
    }

    /// Parses a JSON array of temperature records and builds the engine.
    pub fn from_json(surface: R, json: &str, config: ScatterEngineConfig) -> ScatterResult<Self> {
        let dataset = Dataset::from_json_str(json)?;
        Self::new(surface, dataset, config)
    }
}
