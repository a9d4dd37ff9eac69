use std::time::Duration;

use approx::assert_relative_eq;
use playaxis::api::{Margins, PlayAxisEngine, PlayAxisLayout, UpdateBundle};
use playaxis::core::{DataPoint, PointId, PointKey, ScalePair, Viewport};
use playaxis::render::{
    CirclePrimitive, Color, LinePrimitive, NullRenderer, PathPrimitive, RenderFrame, TextHAlign,
};
use playaxis::{PlayAxisConfig, PlayAxisError};

fn loaded_engine() -> PlayAxisEngine<NullRenderer> {
    let viewport = Viewport::new(320, 320);
    let points = vec![
        DataPoint::new(0.0, 0.0, PointKey::new("A", "wine")).with_play_axis_value(2019),
        DataPoint::new(6.0, 8.0, PointKey::new("A", "wine")).with_play_axis_value(2020),
        DataPoint::new(12.0, 16.0, PointKey::new("A", "wine")).with_play_axis_value(2021),
        DataPoint::new(40.0, 40.0, PointKey::new("B", "wine")).with_play_axis_value(2021),
    ];
    let mut engine =
        PlayAxisEngine::new(NullRenderer::default(), PlayAxisConfig::default()).expect("engine");
    engine
        .update(UpdateBundle::structural(
            points,
            ScalePair::from_domains((0.0, 64.0), (0.0, 64.0), viewport).expect("scales"),
            PlayAxisLayout::new(viewport, Margins::uniform(10.0)),
        ))
        .expect("update");
    engine
}

#[test]
fn no_frame_before_the_first_update() {
    let engine =
        PlayAxisEngine::new(NullRenderer::default(), PlayAxisConfig::default()).expect("engine");
    assert!(engine.build_render_frame().is_none());
}

#[test]
fn frame_draws_shown_points_axis_and_caption() {
    let mut engine = loaded_engine();
    engine.render().expect("render");
    let frame = engine.renderer().last_frame.clone().expect("frame");
    let style = engine.config().style;

    assert_eq!(engine.renderer().render_count, 1);
    assert_eq!(frame.points.len(), 2);
    assert!(frame.paths.is_empty());
    assert!(frame.markers.is_empty());
    // axis line plus one tick per group
    assert_eq!(frame.lines.len(), 4);
    assert_eq!(frame.rects.len(), 1);

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["2019", "2020", "2021", "\u{25B6}", "2021"]);
    let caption = frame.texts.last().expect("caption");
    assert_eq!(caption.h_align, TextHAlign::Right);
    assert_relative_eq!(caption.font_size_px, 28.0);

    let handle = frame.handle.expect("handle");
    assert_relative_eq!(handle.x, 303.0);
    assert_relative_eq!(handle.radius, style.handle_radius_px);
}

#[test]
fn selected_trace_renders_as_dashed_path_with_markers() {
    let mut engine = loaded_engine();
    engine.on_select(&[PointId(2)], false).expect("select");
    let frame = engine.build_render_frame().expect("frame");
    let style = engine.config().style;

    assert_eq!(frame.paths.len(), 1);
    let path = &frame.paths[0];
    assert_eq!(path.points, vec![(0.0, 320.0), (30.0, 280.0), (60.0, 240.0)]);
    assert_relative_eq!(path.dash_length, 104.0, epsilon = 1e-9);
    assert_relative_eq!(path.dash_offset, 4.0, epsilon = 1e-9);

    assert_eq!(frame.markers.len(), 2);
    let selected = frame
        .points
        .iter()
        .find(|point| (point.x - 60.0).abs() < 1e-9)
        .expect("selected point");
    assert_eq!(selected.fill_color, style.selected_point_color);
}

#[test]
fn fading_points_carry_partial_opacity() {
    let mut engine = loaded_engine();
    engine.commit_drag(0);
    engine.advance(Duration::from_millis(375));
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.points.len(), 3);
    for point in &frame.points {
        assert_relative_eq!(point.fill_color.alpha, 0.85 * 0.5, epsilon = 1e-9);
    }
}

#[test]
fn button_glyph_reflects_playback() {
    let mut engine = loaded_engine();
    engine.play();
    let frame = engine.build_render_frame().expect("frame");

    assert!(frame.texts.iter().any(|text| text.text == "\u{275A}\u{275A}"));
}

#[test]
fn crowded_axis_thins_labels_but_keeps_every_tick() {
    let viewport = Viewport::new(200, 300);
    let points: Vec<DataPoint> = (0..20)
        .map(|year| {
            DataPoint::new(1.0, 1.0, PointKey::new("A", "s")).with_play_axis_value(1990 + year)
        })
        .collect();
    let mut engine =
        PlayAxisEngine::new(NullRenderer::default(), PlayAxisConfig::default()).expect("engine");
    engine
        .update(UpdateBundle::structural(
            points,
            ScalePair::from_domains((0.0, 10.0), (0.0, 10.0), viewport).expect("scales"),
            PlayAxisLayout::new(viewport, Margins::uniform(10.0)),
        ))
        .expect("update");

    // span = (200 - 10 - 7) - (10 + 24 + 12) = 137; label = 4 * 6.6 + 10 = 36.4
    let labels = engine.label_visibility();
    assert_eq!(labels.thinning_factor(), 7);
    assert_eq!(labels.visible_indices(), vec![0, 7, 14]);

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 21);
    let style = engine.config().style;
    let major_ticks = frame
        .lines
        .iter()
        .filter(|line| line.color == style.major_tick_color)
        .count();
    assert_eq!(major_ticks, 3);
}

#[test]
fn disabled_engine_renders_an_empty_frame() {
    let mut engine = loaded_engine();
    engine.disable();
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn frame_validation_rejects_bad_primitives() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_path(PathPrimitive {
        points: vec![(0.0, 0.0)],
        stroke_width: 1.0,
        color: Color::rgb(0.0, 0.0, 0.0),
        dash_length: 10.0,
        dash_offset: 0.0,
    });
    assert!(matches!(frame.validate(), Err(PlayAxisError::InvalidData(_))));

    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.handle = Some(CirclePrimitive::new(5.0, 5.0, 0.0, Color::rgb(0.0, 0.0, 0.0)));
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(Viewport::new(0, 100));
    assert!(matches!(
        frame.validate(),
        Err(PlayAxisError::InvalidViewport { .. })
    ));

    let frame = RenderFrame::new(Viewport::new(100, 100)).with_line(LinePrimitive::new(
        0.0,
        0.0,
        f64::NAN,
        1.0,
        1.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn caption_sits_below_the_host_legend() {
    let mut engine = loaded_engine();
    let viewport = Viewport::new(320, 320);
    let layout = PlayAxisLayout::new(viewport, Margins::uniform(10.0)).with_legend_height_px(24.0);
    engine
        .update(UpdateBundle::resize(
            ScalePair::from_domains((0.0, 64.0), (0.0, 64.0), viewport).expect("scales"),
            layout,
        ))
        .expect("resize");

    let frame = engine.build_render_frame().expect("frame");
    let caption = frame.texts.last().expect("caption");
    assert_eq!(caption.text, "2021");
    assert_relative_eq!(caption.x, 310.0);
    assert_relative_eq!(caption.y, 34.0);

    let err = engine
        .update(UpdateBundle::resize(
            ScalePair::from_domains((0.0, 64.0), (0.0, 64.0), viewport).expect("scales"),
            layout.with_legend_height_px(-1.0),
        ))
        .expect_err("negative legend height");
    assert!(matches!(err, PlayAxisError::InvalidData(_)));
}
