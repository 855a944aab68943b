use super::{chart_model::ScatterModel, chart_runtime::ChartRuntimeState};

/// Internal engine core state used by the public facade (`ScatterEngine`).
pub(super) struct EngineCore {
    pub(super) model: ScatterModel,
    pub(super) runtime: ChartRuntimeState,
}
