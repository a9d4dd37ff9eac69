#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use playaxis::api::{Margins, PlayAxisEngine, PlayAxisLayout, UpdateBundle};
use playaxis::core::{DataPoint, PointId, PointKey, ScalePair, TextMeasurer, Viewport};
use playaxis::render::{CairoRenderer, PangoTextMeasurer};
use playaxis::{PlayAxisConfig, PlayAxisError};

fn engine_with_selection(renderer: CairoRenderer) -> PlayAxisEngine<CairoRenderer> {
    let viewport = Viewport::new(640, 400);
    let points = vec![
        DataPoint::new(10.0, 10.0, PointKey::new("A", "s")).with_play_axis_value(2019),
        DataPoint::new(20.0, 30.0, PointKey::new("A", "s")).with_play_axis_value(2020),
        DataPoint::new(40.0, 15.0, PointKey::new("A", "s")).with_play_axis_value(2021),
    ];
    let mut engine = PlayAxisEngine::new(renderer, PlayAxisConfig::default()).expect("engine");
    engine
        .update(UpdateBundle::structural(
            points,
            ScalePair::from_domains((0.0, 50.0), (0.0, 50.0), viewport).expect("scales"),
            PlayAxisLayout::new(viewport, Margins::uniform(12.0)),
        ))
        .expect("update");
    engine.on_select(&[PointId(2)], false).expect("select");
    engine
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlayAxisError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_paths_points_and_axis() {
    let renderer = CairoRenderer::new(640, 400).expect("renderer");
    let mut engine = engine_with_selection(renderer);

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.paths_drawn, 1);
    // one shown point, two markers, the handle
    assert_eq!(stats.circles_drawn, 4);
    assert_eq!(stats.lines_drawn, 4);
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.texts_drawn, 5);
}

#[test]
fn cairo_renderer_draws_into_an_external_context() {
    let renderer = CairoRenderer::new(16, 16).expect("renderer");
    let mut engine = engine_with_selection(renderer);

    let surface = ImageSurface::create(Format::ARgb32, 640, 400).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on external context");

    assert_eq!(engine.renderer().last_stats().paths_drawn, 1);
}

#[test]
fn pango_measurer_grows_with_text_length() {
    let measurer = PangoTextMeasurer::new().expect("measurer");
    let short = measurer.measure_text_width("2019", 11.0);
    let long = measurer.measure_text_width("12/31/2019", 11.0);

    assert!(short > 0.0);
    assert!(long > short);
}

#[test]
fn offscreen_surface_exports_as_png() {
    let renderer = CairoRenderer::new(640, 400).expect("renderer");
    let mut engine = engine_with_selection(renderer);
    engine.render().expect("render");

    let mut png = Vec::new();
    engine
        .renderer()
        .surface()
        .write_to_png(&mut png)
        .expect("png export");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
