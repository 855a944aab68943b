use chrono::Datelike;
use tracing::{debug, trace};

use crate::core::BrushRange;
use crate::error::ScatterResult;
use crate::extensions::InteractionEvent;
use crate::interaction::classify;
use crate::render::{
    AreaPathPrimitive, Color, DrawCommand, NodeId, RenderFrame, RenderSurface, SceneLayer, Shape,
};

use super::ScatterEngine;
use super::chart_runtime::ActiveBrush;
use super::label_format::LEGEND_TICK_MONTHS;
use super::scene_builder::MARGINAL_SIDES;

impl<R: RenderSurface> ScatterEngine<R> {
    /// Pointer moved over the legend at legend-local `x`.
    ///
    /// The position is clamped so the highlight bar stays inside the legend,
    /// then mapped to a date window. Points outside the window are dimmed and
    /// the marginal curves of the selected points are drawn in the color of
    /// the window's start month.
    pub fn legend_pointer_move(&mut self, x: f64) -> ScatterResult<()> {
        let model = &self.core.model;
        let position = model.legend_scale.clamp_position(x);
        let range = model.legend_scale.range_at(position);
        let selection = classify(&model.dataset, range);
        let (top, right) = model.brushed_curves(&selection);
        let brush = ActiveBrush {
            position,
            selection,
            top,
            right,
        };

        let mut frame = RenderFrame::new();
        for side in MARGINAL_SIDES {
            frame.remove(NodeId::BrushedCurve(side));
        }
        self.push_brush_overlay(&mut frame, range, &brush);

        let selected = brush.selection.selected_count();
        self.core.runtime.interaction.on_brush_move(range);
        self.core.runtime.brush = Some(brush);
        self.apply_frame(&frame)?;

        self.emit_plugin_event(InteractionEvent::BrushMoved {
            selected,
            month: range.start().month(),
        });
        trace!(position, selected, start = %range.start(), "brush moved");
        Ok(())
    }

    /// Pointer left the legend: every point fades back to full opacity and
    /// the brushed curves are removed.
    pub fn legend_pointer_leave(&mut self) -> ScatterResult<()> {
        if !self.core.runtime.interaction.on_brush_leave() {
            return Ok(());
        }
        self.core.runtime.brush = None;

        let transition_ms = Some(self.core.model.config.brush_exit_transition_ms);
        let mut frame = RenderFrame::new();
        for index in 0..self.core.model.dataset.len() {
            frame.push(DrawCommand::UpdateOpacity {
                node: NodeId::Point(index),
                opacity: 1.0,
                transition_ms,
            });
        }
        for tick in 0..LEGEND_TICK_MONTHS.len() {
            frame.set_opacity(NodeId::LegendValue(tick), 1.0);
            frame.set_opacity(NodeId::LegendTick(tick), 1.0);
        }
        frame.set_opacity(NodeId::LegendHighlightGroup, 0.0);
        for side in MARGINAL_SIDES {
            frame.remove(NodeId::BrushedCurve(side));
        }
        self.apply_frame(&frame)?;

        self.emit_plugin_event(InteractionEvent::BrushCleared);
        debug!("brush cleared");
        Ok(())
    }

    pub(super) fn push_brush_overlay(
        &self,
        frame: &mut RenderFrame,
        range: BrushRange,
        brush: &ActiveBrush,
    ) {
        let model = &self.core.model;
        let config = model.config;

        for tick in 0..LEGEND_TICK_MONTHS.len() {
            frame.set_opacity(NodeId::LegendValue(tick), 0.0);
            frame.set_opacity(NodeId::LegendTick(tick), 0.0);
        }
        frame.set_opacity(NodeId::LegendHighlightGroup, 1.0);

        for index in 0..model.dataset.len() {
            let opacity = if brush.selection.is_selected(index) {
                1.0
            } else {
                config.dimmed_point_opacity
            };
            frame.set_opacity(NodeId::Point(index), opacity);
        }

        let fill = model.palette.color_for_date(range.start().date());
        for side in MARGINAL_SIDES {
            frame.draw(
                NodeId::BrushedCurve(side),
                Some(NodeId::Strip(side)),
                SceneLayer::BrushOverlay,
                Shape::AreaPath(AreaPathPrimitive {
                    vertices: model.axis(side).area_path(
                        brush.curve(side),
                        model.value_scale(side),
                        model.brushed_density_scale(side),
                        config.smooth_curves,
                    ),
                    fill,
                    stroke: Some(Color::WHITE),
                    opacity: config.brushed_curve_opacity,
                }),
            );
        }

        frame.push(DrawCommand::UpdateTransform {
            node: NodeId::LegendHighlightBar,
            dx: brush.position - config.highlight_bar_width() / 2.0,
            dy: 0.0,
        });
        frame.push(DrawCommand::UpdateTransform {
            node: NodeId::LegendHighlightText,
            dx: brush.position,
            dy: 0.0,
        });
        frame.set_text(NodeId::LegendHighlightText, range.label());
    }
}
