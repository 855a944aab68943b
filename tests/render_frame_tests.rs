use scatter_rs::ScatterError;
use scatter_rs::core::PathVertex;
use scatter_rs::render::{
    CellBoundaryPrimitive, CirclePrimitive, Color, DrawCommand, GradientRectPrimitive,
    GradientStop, MONTH_COLORS, MonthPalette, NodeId, NullSurface, RecordingSurface, RectPrimitive,
    RenderFrame, RenderSurface, SceneLayer, Shape,
};

fn gradient(offsets: &[f64]) -> GradientRectPrimitive {
    GradientRectPrimitive {
        x: 0.0,
        y: 0.0,
        width: 250.0,
        height: 26.0,
        stops: offsets
            .iter()
            .map(|&offset| GradientStop {
                offset,
                color: Color::GREY,
            })
            .collect(),
    }
}

#[test]
fn primitives_reject_invalid_geometry() {
    assert!(
        CirclePrimitive::new(1.0, 2.0, -1.0, Color::WHITE)
            .validate()
            .is_err()
    );
    assert!(
        CirclePrimitive::new(f64::NAN, 2.0, 3.0, Color::WHITE)
            .validate()
            .is_err()
    );
    assert!(
        RectPrimitive::new(0.0, 0.0, -5.0, 10.0, Color::WHITE, 1.0)
            .validate()
            .is_err()
    );
    assert!(
        RectPrimitive::new(0.0, 0.0, 5.0, 10.0, Color::WHITE, 1.5)
            .validate()
            .is_err()
    );
    assert!(Color::rgb(1.2, 0.0, 0.0).validate().is_err());

    let open_cell = CellBoundaryPrimitive {
        index: 3,
        vertices: vec![PathVertex::new(0.0, 0.0), PathVertex::new(1.0, 0.0)],
    };
    assert!(matches!(
        open_cell.validate(),
        Err(ScatterError::InvalidData(message)) if message.contains("cell 3")
    ));
}

#[test]
fn gradient_offsets_must_ascend_within_unit_range() {
    assert!(gradient(&[0.0, 0.5, 1.0]).validate().is_ok());
    assert!(gradient(&[0.0, 0.5, 0.5]).validate().is_ok());
    assert!(gradient(&[]).validate().is_err());
    assert!(gradient(&[0.6, 0.4]).validate().is_err());
    assert!(gradient(&[0.0, 1.2]).validate().is_err());

    let palette = MonthPalette::new(&MONTH_COLORS).expect("palette");
    let legend = GradientRectPrimitive {
        stops: palette.gradient_stops(),
        ..gradient(&[0.0])
    };
    assert!(legend.validate().is_ok());
    assert_eq!(legend.stops.len(), 12);
}

#[test]
fn frame_queries_report_the_last_update() {
    let mut frame = RenderFrame::new();
    frame.draw(NodeId::Tooltip, Some(NodeId::Bounds), SceneLayer::HoverOverlay, Shape::Group);
    frame.set_opacity(NodeId::Tooltip, 0.0);
    frame.set_text(NodeId::TooltipDate, "first");
    frame.set_text(NodeId::TooltipDate, "second");
    frame.push(DrawCommand::UpdateOpacity {
        node: NodeId::Tooltip,
        opacity: 1.0,
        transition_ms: Some(250),
    });
    frame.remove(NodeId::HoverDot);

    assert_eq!(frame.len(), 6);
    assert_eq!(frame.text_of(NodeId::TooltipDate), Some("second"));
    assert_eq!(frame.opacity_of(NodeId::Tooltip), Some((1.0, Some(250))));
    assert!(frame.removes(NodeId::HoverDot));
    assert!(frame.draws_node(NodeId::Tooltip));
    assert!(!frame.draws_node(NodeId::HoverDot));
    assert_eq!(frame.transform_of(NodeId::Tooltip), None);
}

#[test]
fn sort_by_layer_is_stable_and_moves_updates_last() {
    let mut frame = RenderFrame::new();
    frame.draw(
        NodeId::Point(0),
        Some(NodeId::Bounds),
        SceneLayer::Points,
        Shape::Circle(CirclePrimitive::new(1.0, 1.0, 3.0, Color::WHITE)),
    );
    frame.set_opacity(NodeId::Point(0), 0.5);
    frame.draw(NodeId::Bounds, None, SceneLayer::Scaffold, Shape::Group);
    frame.draw(
        NodeId::Point(1),
        Some(NodeId::Bounds),
        SceneLayer::Points,
        Shape::Circle(CirclePrimitive::new(2.0, 2.0, 3.0, Color::WHITE)),
    );
    frame.set_text(NodeId::TooltipDate, "x");
    frame.sort_by_layer();

    let nodes: Vec<NodeId> = frame.commands.iter().map(DrawCommand::node).collect();
    assert_eq!(
        nodes,
        vec![
            NodeId::Bounds,
            NodeId::Point(0),
            NodeId::Point(1),
            NodeId::Point(0),
            NodeId::TooltipDate,
        ]
    );
}

#[test]
fn surfaces_validate_before_accepting_frames() {
    let invalid = RenderFrame::new().with_command(DrawCommand::UpdateOpacity {
        node: NodeId::HoverGroup,
        opacity: 2.0,
        transition_ms: None,
    });
    let valid = RenderFrame::new().with_command(DrawCommand::UpdateTransform {
        node: NodeId::Legend,
        dx: 10.0,
        dy: 20.0,
    });

    let mut null = NullSurface::default();
    assert!(null.apply(&invalid).is_err());
    null.apply(&valid).expect("valid frame");
    assert_eq!(null.frames_applied, 1);
    assert_eq!(null.last_command_count, 1);

    let mut recording = RecordingSurface::default();
    assert!(recording.apply(&invalid).is_err());
    recording.apply(&valid).expect("valid frame");
    assert_eq!(recording.frames(), std::slice::from_ref(&valid));
    recording.clear();
    assert!(recording.last_frame().is_none());
}

#[test]
fn frames_serialize_for_hosts() {
    let frame = RenderFrame::new().with_command(DrawCommand::Draw {
        node: NodeId::Point(4),
        parent: Some(NodeId::Bounds),
        layer: SceneLayer::Points,
        shape: Shape::Circle(CirclePrimitive::new(10.0, 20.0, 3.0, Color::WHITE)),
    });
    let json = serde_json::to_string(&frame).expect("serialize frame");
    let restored: RenderFrame = serde_json::from_str(&json).expect("deserialize frame");
    assert_eq!(restored, frame);
}
