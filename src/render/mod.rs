mod frame;
mod layer_stack;
mod null_surface;
mod palette;
mod primitives;
mod recording_surface;

pub use frame::{DrawCommand, NodeId, PlotAxis, RenderFrame, Shape};
pub use layer_stack::SceneLayer;
pub use null_surface::NullSurface;
pub use palette::{MONTH_COLORS, MonthPalette};
pub use primitives::{
    AreaPathPrimitive, CellBoundaryPrimitive, CirclePrimitive, Color, GradientRectPrimitive,
    GradientStop, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use recording_surface::RecordingSurface;

use crate::error::ScatterResult;

/// Contract implemented by any drawing backend.
///
/// Surfaces receive fully materialized frames of retained-mode commands so
/// drawing code stays isolated from scales, estimation and interaction logic.
pub trait RenderSurface {
    fn apply(&mut self, frame: &RenderFrame) -> ScatterResult<()>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn apply(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        (**self).apply(frame)
    }
}
