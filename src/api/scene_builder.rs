use crate::core::MarginalSide;
use crate::error::{ScatterError, ScatterResult};
use crate::render::{
    AreaPathPrimitive, CellBoundaryPrimitive, CirclePrimitive, Color, DrawCommand,
    GradientRectPrimitive, LinePrimitive, NodeId, RectPrimitive, RenderFrame, RenderSurface,
    SceneLayer, Shape, TextHAlign, TextPrimitive,
};

use super::ScatterEngine;
use super::label_format::{LEGEND_TICK_MONTHS, format_legend_tick};

pub(super) const TEXT_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
pub(super) const HOVER_DOT_FILL: Color = Color::rgb(0.361, 0.227, 0.573);
pub(super) const LABEL_FONT_SIZE_PX: f64 = 12.0;
const TOOLTIP_FONT_SIZE_PX: f64 = 13.0;
const TOOLTIP_LINE_HEIGHT_PX: f64 = 18.0;
/// Legend labels sit this far above the gradient.
const LEGEND_LABEL_OFFSET_Y: f64 = -6.0;
const LEGEND_TICK_LENGTH: f64 = 6.0;

pub(super) const MARGINAL_SIDES: [MarginalSide; 2] = [MarginalSide::Top, MarginalSide::Right];

impl<R: RenderSurface> ScatterEngine<R> {
    /// Full scene: static content sorted by layer, then the overlays of the
    /// current hover and brush state.
    pub(super) fn build_scene_frame(&self) -> ScatterResult<RenderFrame> {
        let mut frame = self.build_static_frame()?;
        frame.sort_by_layer();

        if let Some(index) = self.core.runtime.interaction.hover().hovered_index() {
            self.push_hover_highlight(&mut frame, index)?;
        }
        if let (Some(range), Some(brush)) = (
            self.core.runtime.interaction.brush().range(),
            &self.core.runtime.brush,
        ) {
            self.push_brush_overlay(&mut frame, range, brush);
        }
        Ok(frame)
    }

    fn build_static_frame(&self) -> ScatterResult<RenderFrame> {
        let model = &self.core.model;
        let config = model.config;
        let layout = config.layout;
        let mut frame = RenderFrame::new();

        frame.draw(NodeId::Bounds, None, SceneLayer::Scaffold, Shape::Group);
        frame.push(DrawCommand::UpdateTransform {
            node: NodeId::Bounds,
            dx: layout.margins.left,
            dy: layout.margins.top,
        });

        for side in MARGINAL_SIDES {
            let axis = model.axis(side);
            let (dx, dy) = axis.origin();
            frame.draw(NodeId::Strip(side), None, SceneLayer::Scaffold, Shape::Group);
            frame.push(DrawCommand::UpdateTransform {
                node: NodeId::Strip(side),
                dx,
                dy,
            });
            frame.draw(
                NodeId::GlobalCurve(side),
                Some(NodeId::Strip(side)),
                SceneLayer::Density,
                Shape::AreaPath(AreaPathPrimitive {
                    vertices: axis.area_path(
                        model.global_curve(side),
                        model.value_scale(side),
                        model.global_density_scale(side),
                        config.smooth_curves,
                    ),
                    fill: Color::GREY,
                    stroke: None,
                    opacity: config.global_curve_opacity,
                }),
            );
        }

        for (index, point) in model.dataset.points().iter().enumerate() {
            let vertex = model
                .projected(index)
                .ok_or(ScatterError::UnknownPoint {
                    index,
                    len: model.dataset.len(),
                })?;
            frame.draw(
                NodeId::Point(index),
                Some(NodeId::Bounds),
                SceneLayer::Points,
                Shape::Circle(CirclePrimitive::new(
                    vertex.x,
                    vertex.y,
                    config.point_radius,
                    model.palette.color_for_date(point.date),
                )),
            );
        }

        self.push_axes(&mut frame);
        self.push_legend(&mut frame);

        for index in 0..model.dataset.len() {
            if let Some(cell) = model.tessellation.cell_boundary(index) {
                frame.draw(
                    NodeId::HitRegion(index),
                    Some(NodeId::Bounds),
                    SceneLayer::HitRegions,
                    Shape::CellBoundary(CellBoundaryPrimitive {
                        index,
                        vertices: cell.to_vec(),
                    }),
                );
            }
        }

        frame.draw(
            NodeId::HoverGroup,
            Some(NodeId::Bounds),
            SceneLayer::HoverOverlay,
            Shape::Group,
        );
        frame.set_opacity(NodeId::HoverGroup, 0.0);
        frame.draw(
            NodeId::HoverDot,
            Some(NodeId::HoverGroup),
            SceneLayer::HoverOverlay,
            Shape::Circle(CirclePrimitive::new(
                0.0,
                0.0,
                config.hover_dot_radius,
                HOVER_DOT_FILL,
            )),
        );

        frame.draw(
            NodeId::Tooltip,
            Some(NodeId::Bounds),
            SceneLayer::HoverOverlay,
            Shape::Group,
        );
        frame.set_opacity(NodeId::Tooltip, 0.0);
        for (line, node) in [
            NodeId::TooltipDate,
            NodeId::TooltipMinTemperature,
            NodeId::TooltipMaxTemperature,
        ]
        .into_iter()
        .enumerate()
        {
            frame.draw(
                node,
                Some(NodeId::Tooltip),
                SceneLayer::HoverOverlay,
                Shape::Text(TextPrimitive::new(
                    "",
                    0.0,
                    line as f64 * TOOLTIP_LINE_HEIGHT_PX,
                    TOOLTIP_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Left,
                )),
            );
        }

        Ok(frame)
    }

    fn push_legend(&self, frame: &mut RenderFrame) {
        let model = &self.core.model;
        let legend = model.config.layout.legend;
        let (dx, dy) = model.config.layout.legend_origin();

        frame.draw(
            NodeId::Legend,
            Some(NodeId::Bounds),
            SceneLayer::Legend,
            Shape::Group,
        );
        frame.push(DrawCommand::UpdateTransform {
            node: NodeId::Legend,
            dx,
            dy,
        });
        frame.draw(
            NodeId::LegendGradient,
            Some(NodeId::Legend),
            SceneLayer::Legend,
            Shape::GradientRect(GradientRectPrimitive {
                x: 0.0,
                y: 0.0,
                width: legend.width,
                height: legend.height,
                stops: model.palette.gradient_stops(),
            }),
        );

        for (tick, month) in LEGEND_TICK_MONTHS.into_iter().enumerate() {
            let x = model.legend_month_scale.forward(f64::from(month));
            frame.draw(
                NodeId::LegendValue(tick),
                Some(NodeId::Legend),
                SceneLayer::Legend,
                Shape::Text(TextPrimitive::new(
                    format_legend_tick(month).unwrap_or_default(),
                    x,
                    LEGEND_LABEL_OFFSET_Y,
                    LABEL_FONT_SIZE_PX,
                    TEXT_COLOR,
                    TextHAlign::Center,
                )),
            );
            frame.draw(
                NodeId::LegendTick(tick),
                Some(NodeId::Legend),
                SceneLayer::Legend,
                Shape::Line(LinePrimitive::new(
                    x,
                    0.0,
                    x,
                    LEGEND_TICK_LENGTH,
                    1.0,
                    TEXT_COLOR,
                )),
            );
        }

        frame.draw(
            NodeId::LegendHighlightGroup,
            Some(NodeId::Legend),
            SceneLayer::BrushOverlay,
            Shape::Group,
        );
        frame.set_opacity(NodeId::LegendHighlightGroup, 0.0);
        frame.draw(
            NodeId::LegendHighlightBar,
            Some(NodeId::LegendHighlightGroup),
            SceneLayer::BrushOverlay,
            Shape::Rect(RectPrimitive::new(
                0.0,
                0.0,
                model.config.highlight_bar_width(),
                legend.height,
                Color::WHITE,
                1.0,
            )),
        );
        frame.draw(
            NodeId::LegendHighlightText,
            Some(NodeId::LegendHighlightGroup),
            SceneLayer::BrushOverlay,
            Shape::Text(TextPrimitive::new(
                "",
                0.0,
                LEGEND_LABEL_OFFSET_Y,
                LABEL_FONT_SIZE_PX,
                TEXT_COLOR,
                TextHAlign::Center,
            )),
        );
    }
}
