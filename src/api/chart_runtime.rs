use indexmap::IndexMap;

use crate::core::{DensityCurve, MarginalSide};
use crate::extensions::ScatterPlugin;
use crate::interaction::{InteractionState, Selection};

/// Selection and curves of the active brush window.
#[derive(Debug, Clone)]
pub(super) struct ActiveBrush {
    /// Clamped legend-local pointer position.
    pub(super) position: f64,
    pub(super) selection: Selection,
    pub(super) top: DensityCurve,
    pub(super) right: DensityCurve,
}

impl ActiveBrush {
    pub(super) fn curve(&self, side: MarginalSide) -> &DensityCurve {
        match side {
            MarginalSide::Top => &self.top,
            MarginalSide::Right => &self.right,
        }
    }
}

/// Mutable interaction-driven state, kept apart from the immutable model.
pub(super) struct ChartRuntimeState {
    pub(super) interaction: InteractionState,
    pub(super) brush: Option<ActiveBrush>,
    pub(super) plugins: Vec<Box<dyn ScatterPlugin>>,
    pub(super) metadata: IndexMap<String, String>,
    pub(super) frames_emitted: u64,
}

impl ChartRuntimeState {
    #[must_use]
    pub(super) fn idle() -> Self {
        Self {
            interaction: InteractionState::default(),
            brush: None,
            plugins: Vec::new(),
            metadata: IndexMap::new(),
            frames_emitted: 0,
        }
    }
}
