use serde::{Deserialize, Serialize};

use crate::core::ChartLayout;
use crate::interaction::HoverState;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub layout: ChartLayout,
    pub point_count: usize,
    pub hover: HoverState,
    /// Number of points inside the brush window, `None` when not brushing.
    pub selected_count: Option<usize>,
}

/// Interaction events observed by plugins, emitted after the frame for the
/// event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    HoverEntered { index: usize },
    HoverLeft { index: usize },
    BrushMoved { selected: usize, month: u32 },
    BrushCleared,
    Rendered,
}

/// Observer hook for host-side logic (analytics, linked views, ...).
///
/// Plugins see events and context but cannot mutate engine state.
pub trait ScatterPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: InteractionEvent, context: PluginContext);
}
