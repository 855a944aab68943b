use crate::render::{
    LinePrimitive, NodeId, PlotAxis, RenderFrame, RenderSurface, SceneLayer, Shape, TextHAlign,
    TextPrimitive,
};

use super::ScatterEngine;
use super::label_format::format_axis_tick;
use super::scene_builder::{LABEL_FONT_SIZE_PX, TEXT_COLOR};

pub const AXIS_TICK_COUNT: usize = 4;
pub const X_AXIS_TITLE: &str = "Minimum Temperature (°F)";
pub const Y_AXIS_TITLE: &str = "Maximum Temperature (°F)";

const TICK_SIZE_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
/// Titles sit this far inside the outer edge of their margin.
const TITLE_INSET_PX: f64 = 10.0;

impl<R: RenderSurface> ScatterEngine<R> {
    /// Bottom and left axes of the plot area with nice ticks.
    pub(super) fn push_axes(&self, frame: &mut RenderFrame) {
        let model = &self.core.model;
        let layout = model.config.layout;
        let width = layout.bounded_width();
        let height = layout.bounded_height();

        push_axis_node(
            frame,
            NodeId::AxisLine(PlotAxis::X),
            Shape::Line(LinePrimitive::new(0.0, height, width, height, 1.0, TEXT_COLOR)),
        );
        let x_scale = model.scales.x();
        for (index, value) in x_scale.ticks(AXIS_TICK_COUNT).into_iter().enumerate() {
            let x = x_scale.forward(value);
            push_axis_node(
                frame,
                NodeId::AxisTick(PlotAxis::X, index),
                Shape::Line(LinePrimitive::new(
                    x,
                    height,
                    x,
                    height + TICK_SIZE_PX,
                    1.0,
                    TEXT_COLOR,
                )),
            );
            push_axis_node(
                frame,
                NodeId::AxisTickLabel(PlotAxis::X, index),
                Shape::Text(TextPrimitive::new(
                    format_axis_tick(value),
                    x,
                    height + TICK_SIZE_PX + TICK_LABEL_GAP_PX + LABEL_FONT_SIZE_PX,
                    LABEL_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Center,
                )),
            );
        }
        push_axis_node(
            frame,
            NodeId::AxisTitle(PlotAxis::X),
            Shape::Text(TextPrimitive::new(
                X_AXIS_TITLE,
                width / 2.0,
                height + layout.margins.bottom - TITLE_INSET_PX,
                LABEL_FONT_SIZE_PX,
                TEXT_COLOR,
                TextHAlign::Center,
            )),
        );

        push_axis_node(
            frame,
            NodeId::AxisLine(PlotAxis::Y),
            Shape::Line(LinePrimitive::new(0.0, 0.0, 0.0, height, 1.0, TEXT_COLOR)),
        );
        let y_scale = model.scales.y();
        for (index, value) in y_scale.ticks(AXIS_TICK_COUNT).into_iter().enumerate() {
            let y = y_scale.forward(value);
            push_axis_node(
                frame,
                NodeId::AxisTick(PlotAxis::Y, index),
                Shape::Line(LinePrimitive::new(-TICK_SIZE_PX, y, 0.0, y, 1.0, TEXT_COLOR)),
            );
            push_axis_node(
                frame,
                NodeId::AxisTickLabel(PlotAxis::Y, index),
                Shape::Text(TextPrimitive::new(
                    format_axis_tick(value),
                    -(TICK_SIZE_PX + TICK_LABEL_GAP_PX),
                    y,
                    LABEL_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Right,
                )),
            );
        }
        push_axis_node(
            frame,
            NodeId::AxisTitle(PlotAxis::Y),
            Shape::Text(TextPrimitive::new(
                Y_AXIS_TITLE,
                -layout.margins.left + TITLE_INSET_PX,
                height / 2.0,
                LABEL_FONT_SIZE_PX,
                TEXT_COLOR,
                TextHAlign::Left,
            )),
        );
    }
}

fn push_axis_node(frame: &mut RenderFrame, node: NodeId, shape: Shape) {
    frame.draw(node, Some(NodeId::Bounds), SceneLayer::Scaffold, shape);
}
