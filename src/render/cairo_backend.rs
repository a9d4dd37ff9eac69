use std::f64::consts::{FRAC_PI_2, TAU};

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::{ApproxTextMeasurer, TextMeasurer};
use crate::error::{PlayAxisError, PlayAxisResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

/// Primitive counts from the most recent draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also paint into a context they do not own, such as the
/// one handed to a GTK draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlayAxisResult<()>;
}

/// Draws play-axis frames with Cairo, laying text out through Pango.
///
/// `Renderer::render` paints into an owned offscreen surface; the
/// `CairoContextRenderer` path paints into a caller-provided context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlayAxisResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlayAxisError::InvalidData(format!(
                "offscreen surface must be at least 1x1, got {width}x{height}"
            )));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(backend_error("creating the offscreen surface"))?;
        Ok(Self {
            surface,
            background: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Offscreen target of `Renderer::render`, e.g. for PNG export.
    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn draw(&mut self, context: &Context, frame: &RenderFrame) -> PlayAxisResult<()> {
        frame.validate()?;
        set_source(context, self.background);
        context
            .paint()
            .map_err(backend_error("painting the background"))?;
        self.last_stats = draw_frame(context, frame)?;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlayAxisResult<()> {
        let context =
            Context::new(&self.surface).map_err(backend_error("opening a surface context"))?;
        self.draw(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlayAxisResult<()> {
        self.draw(context, frame)
    }
}

/// Paints a validated frame in back-to-front order.
fn draw_frame(context: &Context, frame: &RenderFrame) -> PlayAxisResult<CairoRenderStats> {
    let mut stats = CairoRenderStats::default();

    for path in &frame.paths {
        if stroke_trace(context, path)? {
            stats.paths_drawn += 1;
        }
    }
    for circle in frame.points.iter().chain(&frame.markers) {
        fill_circle(context, circle)?;
        stats.circles_drawn += 1;
    }
    for line in &frame.lines {
        stroke_line(context, line)?;
        stats.lines_drawn += 1;
    }
    for rect in &frame.rects {
        fill_rect(context, rect)?;
        stats.rects_drawn += 1;
    }
    if let Some(handle) = &frame.handle {
        fill_circle(context, handle)?;
        stats.circles_drawn += 1;
    }
    for text in &frame.texts {
        show_text(context, text);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

/// Strokes a trace with its reveal dash. Returns `false` for an empty path.
fn stroke_trace(context: &Context, path: &PathPrimitive) -> PlayAxisResult<bool> {
    let mut points = path.points.iter();
    let Some(&(x, y)) = points.next() else {
        return Ok(false);
    };
    context.new_path();
    context.move_to(x, y);
    for &(x, y) in points {
        context.line_to(x, y);
    }
    set_source(context, path.color);
    context.set_line_width(path.stroke_width);
    // One dash as long as the whole path; the offset hides the unreached tail.
    context.set_dash(&[path.dash_length, path.dash_length], path.dash_offset);
    let stroked = context.stroke();
    context.set_dash(&[], 0.0);
    stroked.map_err(backend_error("stroking a trace"))?;
    Ok(true)
}

fn fill_circle(context: &Context, circle: &CirclePrimitive) -> PlayAxisResult<()> {
    context.new_path();
    context.arc(circle.x, circle.y, circle.radius, 0.0, TAU);
    set_source(context, circle.fill_color);
    context.fill().map_err(backend_error("filling a circle"))
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> PlayAxisResult<()> {
    context.new_path();
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.stroke().map_err(backend_error("stroking an axis line"))
}

fn fill_rect(context: &Context, rect: &RectPrimitive) -> PlayAxisResult<()> {
    context.new_path();
    let radius = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    if radius > 0.0 {
        let (left, top) = (rect.x + radius, rect.y + radius);
        let (right, bottom) = (rect.x + rect.width - radius, rect.y + rect.height - radius);
        // Corners clockwise from the top-right, each a quarter turn.
        let corners = [(right, top), (right, bottom), (left, bottom), (left, top)];
        context.new_sub_path();
        for (quarter, (cx, cy)) in corners.into_iter().enumerate() {
            let start = -FRAC_PI_2 + FRAC_PI_2 * quarter as f64;
            context.arc(cx, cy, radius, start, start + FRAC_PI_2);
        }
        context.close_path();
    } else {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
    }
    set_source(context, rect.fill_color);
    context.fill().map_err(backend_error("filling the play button"))
}

fn show_text(context: &Context, text: &TextPrimitive) {
    let layout = pango_layout(context, &text.text, text.font_size_px);
    let width = f64::from(layout.pixel_size().0);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };
    set_source(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn pango_layout(context: &Context, text: &str, font_size_px: f64) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {font_size_px}"));
    layout.set_font_description(Some(&font));
    layout.set_text(text);
    layout
}

/// Measures label widths with the same Pango setup the renderer draws with.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    scratch: ImageSurface,
    fallback: ApproxTextMeasurer,
}

impl PangoTextMeasurer {
    pub fn new() -> PlayAxisResult<Self> {
        let scratch = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(backend_error("creating the measuring surface"))?;
        Ok(Self {
            scratch,
            fallback: ApproxTextMeasurer::default(),
        })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        match Context::new(&self.scratch) {
            Ok(context) => f64::from(pango_layout(&context, text, font_size_px).pixel_size().0),
            Err(_) => self.fallback.measure_text_width(text, font_size_px),
        }
    }
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(action: &'static str) -> impl Fn(cairo::Error) -> PlayAxisError {
    move |err| PlayAxisError::InvalidData(format!("cairo failed {action}: {err}"))
}
