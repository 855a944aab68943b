use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ScatterResult;
use crate::render::RenderSurface;

use super::ScatterEngine;

/// Host pointer events, in the coordinate space of the element they hit.
///
/// `PlotMove` is in plot-area pixels and `LegendMove` in legend-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    CellEnter { index: usize },
    CellLeave { index: usize },
    PlotMove { x: f64, y: f64 },
    PlotLeave,
    LegendMove { x: f64 },
    LegendLeave,
}

impl<R: RenderSurface> ScatterEngine<R> {
    /// Routes one pointer event to its controller. Each handled event emits
    /// at most one frame.
    pub fn dispatch(&mut self, event: PointerEvent) -> ScatterResult<()> {
        trace!(?event, "dispatching pointer event");
        match event {
            PointerEvent::CellEnter { index } => self.pointer_enter_cell(index),
            PointerEvent::CellLeave { index } => self.pointer_leave_cell(index),
            PointerEvent::PlotMove { x, y } => self.plot_pointer_move(x, y),
            PointerEvent::PlotLeave => self.plot_pointer_leave(),
            PointerEvent::LegendMove { x } => self.legend_pointer_move(x),
            PointerEvent::LegendLeave => self.legend_pointer_leave(),
        }
    }
}
