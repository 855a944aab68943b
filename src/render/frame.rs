use serde::{Deserialize, Serialize};

use crate::core::MarginalSide;
use crate::error::ScatterResult;
use crate::render::primitives::validate_opacity;
use crate::render::{
    AreaPathPrimitive, CellBoundaryPrimitive, CirclePrimitive, GradientRectPrimitive,
    LinePrimitive, RectPrimitive, SceneLayer, TextPrimitive,
};

/// Plot axis along the bottom (minimum temperature) or left (maximum temperature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotAxis {
    X,
    Y,
}

/// Stable identity of a scene node. Hosts key their retained nodes on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    /// Plot area translated by the left/top margins.
    Bounds,
    /// Marginal strip group, translated to the strip origin.
    Strip(MarginalSide),
    Point(usize),
    AxisLine(PlotAxis),
    AxisTick(PlotAxis, usize),
    AxisTickLabel(PlotAxis, usize),
    AxisTitle(PlotAxis),
    HitRegion(usize),
    GlobalCurve(MarginalSide),
    BrushedCurve(MarginalSide),
    HoverGroup,
    HoverDot,
    HoverMarker(MarginalSide),
    Tooltip,
    TooltipDate,
    TooltipMinTemperature,
    TooltipMaxTemperature,
    Legend,
    LegendGradient,
    LegendValue(usize),
    LegendTick(usize),
    LegendHighlightGroup,
    LegendHighlightBar,
    LegendHighlightText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Group,
    Circle(CirclePrimitive),
    Rect(RectPrimitive),
    GradientRect(GradientRectPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
    AreaPath(AreaPathPrimitive),
    CellBoundary(CellBoundaryPrimitive),
}

impl Shape {
    fn validate(&self) -> ScatterResult<()> {
        match self {
            Shape::Group => Ok(()),
            Shape::Circle(circle) => circle.validate(),
            Shape::Rect(rect) => rect.validate(),
            Shape::GradientRect(rect) => rect.validate(),
            Shape::Line(line) => line.validate(),
            Shape::Text(text) => text.validate(),
            Shape::AreaPath(path) => path.validate(),
            Shape::CellBoundary(cell) => cell.validate(),
        }
    }
}

/// One retained-mode instruction for a render surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Creates (or replaces) `node` under `parent`.
    Draw {
        node: NodeId,
        parent: Option<NodeId>,
        layer: SceneLayer,
        shape: Shape,
    },
    UpdateText {
        node: NodeId,
        content: String,
    },
    /// Sets node opacity, optionally animated over `transition_ms`.
    UpdateOpacity {
        node: NodeId,
        opacity: f64,
        transition_ms: Option<u32>,
    },
    /// Sets the node translation relative to its parent.
    UpdateTransform {
        node: NodeId,
        dx: f64,
        dy: f64,
    },
    Remove {
        node: NodeId,
    },
}

impl DrawCommand {
    #[must_use]
    pub fn node(&self) -> NodeId {
        match self {
            DrawCommand::Draw { node, .. }
            | DrawCommand::UpdateText { node, .. }
            | DrawCommand::UpdateOpacity { node, .. }
            | DrawCommand::UpdateTransform { node, .. }
            | DrawCommand::Remove { node } => *node,
        }
    }

    fn layer(&self) -> Option<SceneLayer> {
        match self {
            DrawCommand::Draw { layer, .. } => Some(*layer),
            _ => None,
        }
    }

    pub fn validate(&self) -> ScatterResult<()> {
        match self {
            DrawCommand::Draw { shape, .. } => shape.validate(),
            DrawCommand::UpdateOpacity { opacity, .. } => validate_opacity(*opacity),
            DrawCommand::UpdateTransform { dx, dy, .. } => {
                if dx.is_finite() && dy.is_finite() {
                    Ok(())
                } else {
                    Err(crate::error::ScatterError::InvalidData(
                        "transform offsets must be finite".to_owned(),
                    ))
                }
            }
            DrawCommand::UpdateText { .. } | DrawCommand::Remove { .. } => Ok(()),
        }
    }
}

/// Ordered batch of commands emitted for one event. Applying a frame must be
/// equivalent to applying its commands in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn with_command(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn draw(&mut self, node: NodeId, parent: Option<NodeId>, layer: SceneLayer, shape: Shape) {
        self.push(DrawCommand::Draw {
            node,
            parent,
            layer,
            shape,
        });
    }

    pub fn set_opacity(&mut self, node: NodeId, opacity: f64) {
        self.push(DrawCommand::UpdateOpacity {
            node,
            opacity,
            transition_ms: None,
        });
    }

    pub fn set_text(&mut self, node: NodeId, content: impl Into<String>) {
        self.push(DrawCommand::UpdateText {
            node,
            content: content.into(),
        });
    }

    pub fn remove(&mut self, node: NodeId) {
        self.push(DrawCommand::Remove { node });
    }

    /// Stable sort of draw commands by layer; updates keep their position
    /// relative to each other after all draws.
    pub fn sort_by_layer(&mut self) {
        self.commands
            .sort_by_key(|command| command.layer().map_or((1, SceneLayer::Scaffold), |l| (0, l)));
    }

    pub fn validate(&self) -> ScatterResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn draws(&self) -> impl Iterator<Item = (NodeId, &Shape)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Draw { node, shape, .. } => Some((*node, shape)),
            _ => None,
        })
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.draws()
            .filter(|(_, shape)| matches!(shape, Shape::Circle(_)))
            .count()
    }

    #[must_use]
    pub fn cell_boundary_count(&self) -> usize {
        self.draws()
            .filter(|(_, shape)| matches!(shape, Shape::CellBoundary(_)))
            .count()
    }

    #[must_use]
    pub fn area_path(&self, node: NodeId) -> Option<&AreaPathPrimitive> {
        self.draws().find_map(|(id, shape)| match shape {
            Shape::AreaPath(path) if id == node => Some(path),
            _ => None,
        })
    }

    /// Last text written to `node`, by a text draw or a text update.
    #[must_use]
    pub fn text_of(&self, node: NodeId) -> Option<&str> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::UpdateText { node: id, content } if *id == node => {
                Some(content.as_str())
            }
            DrawCommand::Draw {
                node: id,
                shape: Shape::Text(text),
                ..
            } if *id == node => Some(text.text.as_str()),
            _ => None,
        })
    }

    /// Last opacity set on `node` and its transition.
    #[must_use]
    pub fn opacity_of(&self, node: NodeId) -> Option<(f64, Option<u32>)> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::UpdateOpacity {
                node: id,
                opacity,
                transition_ms,
            } if *id == node => Some((*opacity, *transition_ms)),
            _ => None,
        })
    }

    #[must_use]
    pub fn transform_of(&self, node: NodeId) -> Option<(f64, f64)> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::UpdateTransform { node: id, dx, dy } if *id == node => Some((*dx, *dy)),
            _ => None,
        })
    }

    #[must_use]
    pub fn removes(&self, node: NodeId) -> bool {
        self.commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Remove { node: id } if *id == node))
    }

    #[must_use]
    pub fn draws_node(&self, node: NodeId) -> bool {
        self.draws().any(|(id, _)| id == node)
    }
}
