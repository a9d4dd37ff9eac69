use crate::core::Viewport;
use crate::error::{PlayAxisError, PlayAxisResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one play-axis draw pass.
///
/// Backends draw in field order: paths, points, markers, axis lines, rects,
/// the scrubber handle, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub points: Vec<CirclePrimitive>,
    pub markers: Vec<CirclePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub handle: Option<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            points: Vec::new(),
            markers: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            handle: None,
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    pub fn validate(&self) -> PlayAxisResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlayAxisError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for circle in self.points.iter().chain(&self.markers).chain(&self.handle) {
            circle.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.points.is_empty()
            && self.markers.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.handle.is_none()
            && self.texts.is_empty()
    }
}
