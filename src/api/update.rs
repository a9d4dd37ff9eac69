use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, ScalePair, Viewport};
use crate::error::{PlayAxisError, PlayAxisResult};

use super::PlayAxisConfig;

const BUTTON_TRACK_GAP_PX: f64 = 12.0;

/// Whether an update carries new data or only new geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateKind {
    /// New data: regroup, reset the timeline, rebuild everything.
    Structural,
    /// Same data, new size: reuse groups and `current_index`.
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Chart geometry the play axis is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayAxisLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    #[serde(default)]
    pub legend_height_px: f64,
}

impl PlayAxisLayout {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            viewport,
            margins,
            legend_height_px: 0.0,
        }
    }

    #[must_use]
    pub fn with_legend_height_px(mut self, legend_height_px: f64) -> Self {
        self.legend_height_px = legend_height_px;
        self
    }

    pub fn validate(self) -> PlayAxisResult<Self> {
        if !self.viewport.is_valid() {
            return Err(PlayAxisError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (value, name) in [
            (self.margins.top, "top margin"),
            (self.margins.right, "right margin"),
            (self.margins.bottom, "bottom margin"),
            (self.margins.left, "left margin"),
            (self.legend_height_px, "legend height"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlayAxisError::InvalidData(format!(
                    "layout {name} must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    /// Resolves where the play button, track and caption sit.
    #[must_use]
    pub fn axis_geometry(self, config: &PlayAxisConfig) -> AxisGeometry {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let style = config.style;

        let axis_y = (height - config.axis_height_px / 2.0).max(0.0);
        let button_x = self.margins.left;
        let track_start_x = button_x + style.button_size_px + BUTTON_TRACK_GAP_PX;
        let track_end_x = (width - self.margins.right - style.handle_radius_px).max(track_start_x);

        AxisGeometry {
            axis_y,
            button_x,
            button_y: axis_y - style.button_size_px / 2.0,
            track_start_x,
            track_end_x,
            caption_x: width - self.margins.right,
            caption_y: self.margins.top + self.legend_height_px,
        }
    }
}

/// Pixel geometry of the play-axis control for one layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub axis_y: f64,
    pub button_x: f64,
    pub button_y: f64,
    pub track_start_x: f64,
    pub track_end_x: f64,
    pub caption_x: f64,
    pub caption_y: f64,
}

impl AxisGeometry {
    #[must_use]
    pub fn track_span_px(self) -> f64 {
        self.track_end_x - self.track_start_x
    }

    /// X position of group `index` when `count` groups share the track.
    #[must_use]
    pub fn group_x(self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.track_start_x;
        }
        let ratio = index.min(count - 1) as f64 / (count - 1) as f64;
        self.track_start_x + self.track_span_px() * ratio
    }

    /// Nearest group index for a pointer x, used by scrubbing adapters.
    #[must_use]
    pub fn index_at_x(self, x: f64, count: usize) -> usize {
        let span = self.track_span_px();
        if count <= 1 || !x.is_finite() || span <= 0.0 {
            return 0;
        }
        let ratio = ((x - self.track_start_x) / span).clamp(0.0, 1.0);
        (ratio * (count - 1) as f64).round() as usize
    }

    #[must_use]
    pub fn hits_button(self, x: f64, y: f64, button_size_px: f64) -> bool {
        x >= self.button_x
            && x <= self.button_x + button_size_px
            && y >= self.button_y
            && y <= self.button_y + button_size_px
    }
}

/// Everything the chart pushes on one update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBundle {
    pub kind: UpdateKind,
    pub points: Vec<DataPoint>,
    pub scales: ScalePair,
    pub layout: PlayAxisLayout,
}

impl UpdateBundle {
    #[must_use]
    pub fn structural(points: Vec<DataPoint>, scales: ScalePair, layout: PlayAxisLayout) -> Self {
        Self {
            kind: UpdateKind::Structural,
            points,
            scales,
            layout,
        }
    }

    /// Geometry-only update; the point list is ignored by the engine.
    #[must_use]
    pub fn resize(scales: ScalePair, layout: PlayAxisLayout) -> Self {
        Self {
            kind: UpdateKind::Resize,
            points: Vec::new(),
            scales,
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Margins, PlayAxisLayout};
    use crate::api::PlayAxisConfig;
    use crate::core::Viewport;

    #[test]
    fn group_positions_span_the_track_and_invert() {
        let layout = PlayAxisLayout::new(Viewport::new(600, 400), Margins::uniform(10.0));
        let geometry = layout.axis_geometry(&PlayAxisConfig::default());

        assert_eq!(geometry.group_x(0, 5), geometry.track_start_x);
        assert_eq!(geometry.group_x(4, 5), geometry.track_end_x);
        for index in 0..5 {
            assert_eq!(geometry.index_at_x(geometry.group_x(index, 5), 5), index);
        }
        assert_eq!(geometry.index_at_x(-100.0, 5), 0);
        assert_eq!(geometry.index_at_x(10_000.0, 5), 4);
    }
}
