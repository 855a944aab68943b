use std::cell::RefCell;
use std::rc::Rc;

use scatter_rs::ScatterError;
use scatter_rs::api::{ScatterEngine, ScatterEngineConfig};
use scatter_rs::extensions::{InteractionEvent, PluginContext, ScatterPlugin};
use scatter_rs::interaction::HoverState;
use scatter_rs::render::NullSurface;

const TWO_DAYS: &str = r#"[
    {"date": "2010-01-01", "temperatureMin": 20, "temperatureMax": 35},
    {"date": "2010-07-01", "temperatureMin": 60, "temperatureMax": 90}
]"#;

type Log = Rc<RefCell<Vec<(InteractionEvent, PluginContext)>>>;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Log,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Log) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ScatterPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: InteractionEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn engine() -> ScatterEngine<NullSurface> {
    ScatterEngine::from_json(
        NullSurface::default(),
        TWO_DAYS,
        ScatterEngineConfig::square(600.0),
    )
    .expect("engine init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut engine = engine();
    let events: Log = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.pointer_enter_cell(0).expect("enter first");
    engine.pointer_enter_cell(1).expect("enter second");
    engine.pointer_leave_cell(0).expect("stale leave");
    engine.legend_pointer_move(-100.0).expect("brush");
    engine.legend_pointer_leave().expect("leave legend");
    engine.plot_pointer_leave().expect("leave plot");
    engine.render().expect("render");

    let kinds: Vec<InteractionEvent> = events.borrow().iter().map(|(event, _)| *event).collect();
    assert_eq!(
        kinds,
        vec![
            InteractionEvent::HoverEntered { index: 0 },
            InteractionEvent::HoverLeft { index: 0 },
            InteractionEvent::HoverEntered { index: 1 },
            InteractionEvent::BrushMoved {
                selected: 1,
                month: 1,
            },
            InteractionEvent::BrushCleared,
            InteractionEvent::HoverLeft { index: 1 },
            InteractionEvent::Rendered,
        ]
    );
}

#[test]
fn plugin_context_reflects_state_after_the_event() {
    let mut engine = engine();
    let events: Log = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.pointer_enter_cell(1).expect("enter");
    engine.legend_pointer_move(-100.0).expect("brush");
    engine.legend_pointer_leave().expect("leave legend");

    let log = events.borrow();
    let (_, entered) = log[0];
    assert_eq!(entered.point_count, 2);
    assert_eq!(entered.hover.hovered_index(), Some(1));
    assert_eq!(entered.selected_count, None);
    assert_eq!(entered.layout, engine.config().layout);

    let (_, brushed) = log[1];
    assert_eq!(brushed.selected_count, Some(1));
    let (_, cleared) = log[2];
    assert_eq!(cleared.selected_count, None);
    assert!(matches!(cleared.hover, HoverState::Hovering { index: 1, .. }));
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let mut engine = engine();
    let events: Log = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    let duplicate =
        engine.register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())));
    assert!(matches!(duplicate, Err(ScatterError::InvalidConfig(_))));
    let empty = engine.register_plugin(Box::new(RecordingPlugin::new("", events.clone())));
    assert!(matches!(empty, Err(ScatterError::InvalidConfig(_))));
    let blank = engine.register_plugin(Box::new(RecordingPlugin::new("  ", events)));
    assert!(matches!(blank, Err(ScatterError::InvalidConfig(_))));
    assert_eq!(engine.plugin_count(), 1);
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let mut engine = engine();
    let events: Log = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");
    assert!(engine.has_plugin("recorder"));

    engine.pointer_enter_cell(0).expect("enter");
    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));
    assert!(!engine.has_plugin("recorder"));
    engine.pointer_leave_cell(0).expect("leave");

    assert_eq!(events.borrow().len(), 1);
    assert_eq!(engine.plugin_count(), 0);
}
