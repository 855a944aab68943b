use tracing::{debug, trace};

use crate::core::{MarginalSide, PathVertex};
use crate::error::{ScatterError, ScatterResult};
use crate::extensions::InteractionEvent;
use crate::render::{
    CirclePrimitive, Color, DrawCommand, NodeId, RectPrimitive, RenderFrame, RenderSurface,
    SceneLayer, Shape,
};

use super::ScatterEngine;
use super::label_format::{format_temperature, format_tooltip_date};
use super::scene_builder::{HOVER_DOT_FILL, MARGINAL_SIDES};

impl<R: RenderSurface> ScatterEngine<R> {
    /// Pointer entered the hit region of point `index`.
    ///
    /// Any other highlight is torn down in the same frame before the new one
    /// is established, so at most one point is ever highlighted.
    pub fn pointer_enter_cell(&mut self, index: usize) -> ScatterResult<()> {
        let vertex = self.checked_projection(index)?;
        self.enter_hover(index, vertex)
    }

    /// Pointer left the hit region of point `index`. Leaves for a cell that is
    /// not the highlighted one are ignored.
    pub fn pointer_leave_cell(&mut self, index: usize) -> ScatterResult<()> {
        if !self.core.runtime.interaction.on_cell_leave(index) {
            trace!(index, "ignoring stale cell leave");
            return Ok(());
        }
        self.finish_hover(index)
    }

    /// Pointer moved to `(x, y)` in plot-area pixels.
    ///
    /// The cell under the cursor becomes the highlighted one; moving outside
    /// the plot area clears the highlight.
    pub fn plot_pointer_move(&mut self, x: f64, y: f64) -> ScatterResult<()> {
        let cursor = PathVertex::new(x, y);
        if !cursor.is_finite() {
            return Err(ScatterError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }

        let current = self.core.runtime.interaction.hover().hovered_index();
        match self.core.model.tessellation.cell_at(cursor) {
            Some(index) if current == Some(index) => {
                self.core.runtime.interaction.on_cell_enter(index, x, y);
                Ok(())
            }
            Some(index) => self.enter_hover(index, cursor),
            None => self.plot_pointer_leave(),
        }
    }

    /// Pointer left the plot area entirely.
    pub fn plot_pointer_leave(&mut self) -> ScatterResult<()> {
        match self.core.runtime.interaction.clear_hover() {
            Some(index) => self.finish_hover(index),
            None => Ok(()),
        }
    }

    fn enter_hover(&mut self, index: usize, cursor: PathVertex) -> ScatterResult<()> {
        let mut frame = RenderFrame::new();
        if self.core.runtime.interaction.hover().hovered_index().is_some() {
            push_hover_teardown(&mut frame);
        }
        self.push_hover_highlight(&mut frame, index)?;
        self.apply_frame(&frame)?;

        // State follows the surface: a frame that failed to build or apply
        // leaves the previous highlight in charge.
        let transition = self
            .core
            .runtime
            .interaction
            .on_cell_enter(index, cursor.x, cursor.y);

        if let Some(previous) = transition.previous {
            self.emit_plugin_event(InteractionEvent::HoverLeft { index: previous });
        }
        self.emit_plugin_event(InteractionEvent::HoverEntered { index });
        debug!(index, previous = ?transition.previous, "hover entered");
        Ok(())
    }

    fn finish_hover(&mut self, index: usize) -> ScatterResult<()> {
        let mut frame = RenderFrame::new();
        push_hover_teardown(&mut frame);
        self.apply_frame(&frame)?;
        self.emit_plugin_event(InteractionEvent::HoverLeft { index });
        debug!(index, "hover cleared");
        Ok(())
    }

    pub(super) fn checked_projection(&self, index: usize) -> ScatterResult<PathVertex> {
        let model = &self.core.model;
        model.projected(index).ok_or(ScatterError::UnknownPoint {
            index,
            len: model.dataset.len(),
        })
    }

    /// Highlight dot, tooltip and one positional marker per marginal strip.
    pub(super) fn push_hover_highlight(
        &self,
        frame: &mut RenderFrame,
        index: usize,
    ) -> ScatterResult<()> {
        let model = &self.core.model;
        let config = model.config;
        let point = *model.dataset.get(index)?;
        let vertex = self.checked_projection(index)?;

        frame.draw(
            NodeId::HoverDot,
            Some(NodeId::HoverGroup),
            SceneLayer::HoverOverlay,
            Shape::Circle(CirclePrimitive::new(
                vertex.x,
                vertex.y,
                config.hover_dot_radius,
                HOVER_DOT_FILL,
            )),
        );
        frame.set_opacity(NodeId::HoverGroup, 1.0);

        frame.set_text(NodeId::TooltipDate, format_tooltip_date(point.date));
        frame.set_text(
            NodeId::TooltipMinTemperature,
            format_temperature(point.min_temp)?,
        );
        frame.set_text(
            NodeId::TooltipMaxTemperature,
            format_temperature(point.max_temp)?,
        );
        frame.push(DrawCommand::UpdateTransform {
            node: NodeId::Tooltip,
            dx: vertex.x + config.tooltip_offset.dx,
            dy: vertex.y + config.tooltip_offset.dy,
        });
        frame.set_opacity(NodeId::Tooltip, 1.0);

        for side in MARGINAL_SIDES {
            let value = match side {
                MarginalSide::Top => point.min_temp,
                MarginalSide::Right => point.max_temp,
            };
            let rect = model.axis(side).marker_rect(
                value,
                model.value_scale(side),
                config.hover_marker_thickness,
            );
            frame.draw(
                NodeId::HoverMarker(side),
                Some(NodeId::Strip(side)),
                SceneLayer::HoverOverlay,
                Shape::Rect(RectPrimitive::new(
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    Color::SKY_BLUE,
                    config.hover_marker_opacity,
                )),
            );
        }
        Ok(())
    }
}

fn push_hover_teardown(frame: &mut RenderFrame) {
    frame.set_opacity(NodeId::HoverGroup, 0.0);
    frame.set_opacity(NodeId::Tooltip, 0.0);
    for side in MARGINAL_SIDES {
        frame.remove(NodeId::HoverMarker(side));
    }
}
