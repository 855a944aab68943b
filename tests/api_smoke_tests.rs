use scatter_rs::ScatterError;
use scatter_rs::api::{AXIS_TICK_COUNT, ScatterEngine, ScatterEngineConfig, X_AXIS_TITLE};
use scatter_rs::core::MarginalSide;
use scatter_rs::interaction::{BrushState, HoverState};
use scatter_rs::render::{
    Color, DrawCommand, NodeId, NullSurface, PlotAxis, RecordingSurface, SceneLayer, Shape,
};

const TWO_DAYS: &str = r#"[
    {"date": "2010-01-01", "temperatureMin": 20, "temperatureMax": 35},
    {"date": "2010-07-01", "temperatureMin": 60, "temperatureMax": 90}
]"#;

#[test]
fn engine_smoke_flow() {
    let mut engine = ScatterEngine::from_json(
        NullSurface::default(),
        TWO_DAYS,
        ScatterEngineConfig::square(600.0),
    )
    .expect("engine init");

    assert_eq!(engine.surface().frames_applied, 1);
    assert_eq!(engine.dataset().len(), 2);
    assert_eq!(engine.scales().x().domain(), (0.0, 100.0));
    assert_eq!(engine.scales().y().domain(), (0.0, 100.0));

    let projected = engine.projected_point(1).expect("projection");
    assert!((projected.x - 276.0).abs() <= 1e-9);
    assert!((projected.y - 46.0).abs() <= 1e-9);
    assert_eq!(engine.nearest_point(projected.x, projected.y), Some(1));

    engine.pointer_enter_cell(0).expect("enter");
    assert_eq!(engine.hover_state().hovered_index(), Some(0));
    engine.legend_pointer_move(40.0).expect("brush");
    assert!(matches!(engine.brush_state(), BrushState::Brushing(_)));
    engine.legend_pointer_leave().expect("leave legend");
    engine.pointer_leave_cell(0).expect("leave cell");

    assert_eq!(engine.hover_state(), HoverState::Idle);
    assert_eq!(engine.brush_state(), BrushState::Unbrushed);
    assert_eq!(engine.frames_emitted(), 5);
    assert_eq!(engine.surface().frames_applied, 5);
}

#[test]
fn initial_scene_draws_every_point_and_cell() {
    let engine = ScatterEngine::from_json(
        RecordingSurface::default(),
        TWO_DAYS,
        ScatterEngineConfig::square(600.0),
    )
    .expect("engine init");
    let frame = engine.surface().last_frame().expect("initial frame");

    // One circle per point plus the hidden hover dot.
    assert_eq!(frame.circle_count(), 3);
    assert_eq!(frame.cell_boundary_count(), 2);
    assert_eq!(frame.opacity_of(NodeId::HoverGroup), Some((0.0, None)));
    assert_eq!(frame.opacity_of(NodeId::Tooltip), Some((0.0, None)));
    assert_eq!(frame.opacity_of(NodeId::LegendHighlightGroup), Some((0.0, None)));
    assert_eq!(frame.transform_of(NodeId::Bounds), Some((50.0, 90.0)));

    assert_eq!(frame.text_of(NodeId::LegendValue(0)), Some("Apr"));
    assert_eq!(frame.text_of(NodeId::LegendValue(1)), Some("Jul"));
    assert_eq!(frame.text_of(NodeId::LegendValue(2)), Some("Oct"));
    assert_eq!(frame.text_of(NodeId::AxisTitle(PlotAxis::X)), Some(X_AXIS_TITLE));
    assert_eq!(frame.text_of(NodeId::AxisTickLabel(PlotAxis::X, 0)), Some("0"));
    assert!(frame.draws_node(NodeId::AxisTick(PlotAxis::Y, AXIS_TICK_COUNT - 1)));
    assert!(frame.draws_node(NodeId::LegendGradient));

    for side in [MarginalSide::Top, MarginalSide::Right] {
        let curve = frame
            .area_path(NodeId::GlobalCurve(side))
            .expect("global curve");
        assert_eq!(curve.fill, Color::GREY);
        assert_eq!(curve.opacity, 0.35);
        assert!(!frame.draws_node(NodeId::BrushedCurve(side)));
        assert!(!frame.draws_node(NodeId::HoverMarker(side)));
    }
}

#[test]
fn initial_scene_is_ordered_by_layer() {
    let engine = ScatterEngine::from_json(
        RecordingSurface::default(),
        TWO_DAYS,
        ScatterEngineConfig::square(600.0),
    )
    .expect("engine init");
    let frame = engine.surface().last_frame().expect("initial frame");

    let layers: Vec<SceneLayer> = frame
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Draw { layer, .. } => Some(*layer),
            _ => None,
        })
        .collect();
    assert!(layers.windows(2).all(|pair| pair[0] <= pair[1]));

    let first_update = frame
        .commands
        .iter()
        .position(|command| !matches!(command, DrawCommand::Draw { .. }))
        .expect("updates present");
    assert!(
        frame.commands[first_update..]
            .iter()
            .all(|command| !matches!(command, DrawCommand::Draw { .. }))
    );
}

#[test]
fn points_are_colored_by_month() {
    let engine = ScatterEngine::from_json(
        RecordingSurface::default(),
        TWO_DAYS,
        ScatterEngineConfig::square(600.0),
    )
    .expect("engine init");
    let frame = engine.surface().last_frame().expect("initial frame");

    let fill_of = |index: usize| {
        frame.draws().find_map(|(node, shape)| match shape {
            Shape::Circle(circle) if node == NodeId::Point(index) => Some(circle.fill),
            _ => None,
        })
    };
    let january = engine.palette().color_for_date(engine.dataset().points()[0].date);
    let july = engine.palette().color_for_date(engine.dataset().points()[1].date);
    assert_eq!(fill_of(0), Some(january));
    assert_eq!(fill_of(1), Some(july));
    assert_ne!(january, july);
}

#[test]
fn render_reemits_full_scene() {
    let mut engine = ScatterEngine::from_json(
        RecordingSurface::default(),
        TWO_DAYS,
        ScatterEngineConfig::square(600.0),
    )
    .expect("engine init");
    engine.pointer_enter_cell(1).expect("enter");
    engine.render().expect("render");

    let frame = engine.surface().last_frame().expect("render frame");
    assert_eq!(frame.cell_boundary_count(), 2);
    assert_eq!(frame.opacity_of(NodeId::HoverGroup), Some((1.0, None)));
    assert!(frame.draws_node(NodeId::HoverMarker(MarginalSide::Top)));
    assert_eq!(engine.surface().frames().len(), 3);
}

#[test]
fn invalid_configuration_is_rejected() {
    let cases = [
        ScatterEngineConfig::square(600.0).with_grid_size(1),
        ScatterEngineConfig::square(600.0).with_bandwidth(0.0),
        ScatterEngineConfig::square(600.0).with_brush_window_days(0),
        ScatterEngineConfig::square(600.0).with_tooltip_offset(f64::NAN, 0.0),
    ];
    for config in cases {
        let result = ScatterEngine::from_json(NullSurface::default(), TWO_DAYS, config);
        assert!(matches!(result, Err(ScatterError::InvalidConfig(_))));
    }

    let tiny = ScatterEngine::from_json(
        NullSurface::default(),
        TWO_DAYS,
        ScatterEngineConfig::square(100.0),
    );
    assert!(matches!(tiny, Err(ScatterError::InvalidLayout { .. })));
}

#[test]
fn empty_dataset_is_rejected() {
    let result = ScatterEngine::from_json(
        NullSurface::default(),
        "[]",
        ScatterEngineConfig::square(600.0),
    );
    assert!(matches!(result, Err(ScatterError::EmptyDataset)));
}
