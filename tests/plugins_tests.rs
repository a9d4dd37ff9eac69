use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use playaxis::api::{Margins, PlayAxisEngine, PlayAxisLayout, UpdateBundle};
use playaxis::core::{DataPoint, PointId, PointKey, ScalePair, Viewport};
use playaxis::extensions::{PlayAxisContext, PlayAxisEvent, PlayAxisPlugin};
use playaxis::render::NullRenderer;
use playaxis::{PlayAxisConfig, PlayAxisError};

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PlayAxisEvent, PlayAxisContext)>>>,
}

impl RecordingPlugin {
    fn new(
        id: impl Into<String>,
        events: Rc<RefCell<Vec<(PlayAxisEvent, PlayAxisContext)>>>,
    ) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl PlayAxisPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PlayAxisEvent, context: PlayAxisContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn engine() -> PlayAxisEngine<NullRenderer> {
    PlayAxisEngine::new(NullRenderer::default(), PlayAxisConfig::default()).expect("engine init")
}

fn structural_update() -> UpdateBundle {
    let viewport = Viewport::new(640, 480);
    let points = (0..3)
        .map(|year| {
            DataPoint::new(f64::from(year) * 10.0, 5.0, PointKey::new("A", "s"))
                .with_play_axis_value(2000 + year)
        })
        .collect();
    UpdateBundle::structural(
        points,
        ScalePair::from_domains((0.0, 100.0), (0.0, 10.0), viewport).expect("scales"),
        PlayAxisLayout::new(viewport, Margins::uniform(8.0)),
    )
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.update(structural_update()).expect("update");
    engine.on_select(&[PointId(0)], false).expect("select");
    engine.play();
    engine.advance(Duration::from_millis(800));
    engine.advance(Duration::from_millis(800));
    engine.render().expect("render");

    let recorded: Vec<PlayAxisEvent> = events.borrow().iter().map(|(event, _)| *event).collect();
    assert_eq!(
        recorded,
        vec![
            PlayAxisEvent::GroupsRebuilt { group_count: 3 },
            PlayAxisEvent::SelectionChanged { trace_count: 1 },
            PlayAxisEvent::IndexCommitted { index: 0 },
            PlayAxisEvent::PlaybackStarted { from: 0 },
            PlayAxisEvent::IndexCommitted { index: 1 },
            PlayAxisEvent::IndexCommitted { index: 2 },
            PlayAxisEvent::PlaybackStopped { at: 2 },
            PlayAxisEvent::Rendered,
        ]
    );
}

#[test]
fn context_reflects_engine_state_at_emit_time() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.update(structural_update()).expect("update");
    engine.begin_drag();
    engine.drag(1);

    let events = events.borrow();
    let (event, context) = events.last().expect("drag preview event");
    assert_eq!(*event, PlayAxisEvent::DragPreview { index: 1 });
    assert_eq!(context.group_count, 3);
    assert_eq!(context.current_index, 2);
    assert_eq!(context.points_len, 3);
    assert_eq!(context.viewport, Some(Viewport::new(640, 480)));
}

#[test]
fn duplicate_and_empty_plugin_ids_are_rejected() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("first registration");

    let duplicate = engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect_err("duplicate id");
    assert!(matches!(duplicate, PlayAxisError::InvalidData(_)));

    let empty = engine
        .register_plugin(Box::new(RecordingPlugin::new("", events)))
        .expect_err("empty id");
    assert!(matches!(empty, PlayAxisError::InvalidData(_)));
    assert_eq!(engine.plugin_count(), 1);
}

#[test]
fn unregistered_plugins_stop_receiving_events() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    assert!(engine.has_plugin("recorder"));
    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));

    engine.update(structural_update()).expect("update");
    assert!(events.borrow().is_empty());
}
