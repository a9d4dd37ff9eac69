use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{LABEL_MARGIN_PX, MatchPolicy};
use crate::error::{PlayAxisError, PlayAxisResult};
use crate::render::Color;

use super::TransitionSpec;

/// Extra length added to every trace so rounding never leaves a stray pixel
/// of stroke visible at the path end.
pub const PATH_LENGTH_RESERVE_PX: f64 = 4.0;

/// Visual tuning of the play-axis control and trace paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayAxisStyle {
    pub axis_line_color: Color,
    pub tick_color: Color,
    pub major_tick_color: Color,
    pub label_color: Color,
    pub caption_color: Color,
    pub handle_color: Color,
    pub button_color: Color,
    pub button_glyph_color: Color,
    pub path_color: Color,
    pub marker_color: Color,
    pub point_color: Color,
    pub selected_point_color: Color,
    pub axis_line_width_px: f64,
    pub tick_height_px: f64,
    pub major_tick_height_px: f64,
    pub handle_radius_px: f64,
    pub button_size_px: f64,
    pub path_stroke_width_px: f64,
    pub marker_radius_px: f64,
    pub point_radius_px: f64,
}

impl Default for PlayAxisStyle {
    fn default() -> Self {
        Self {
            axis_line_color: Color::rgb(0.55, 0.55, 0.55),
            tick_color: Color::rgba(0.55, 0.55, 0.55, 0.6),
            major_tick_color: Color::rgb(0.25, 0.25, 0.25),
            label_color: Color::rgb(0.35, 0.35, 0.35),
            caption_color: Color::rgba(0.4, 0.4, 0.4, 0.8),
            handle_color: Color::rgb(0.2, 0.45, 0.8),
            button_color: Color::rgb(0.93, 0.93, 0.93),
            button_glyph_color: Color::rgb(0.2, 0.2, 0.2),
            path_color: Color::rgba(0.2, 0.45, 0.8, 0.9),
            marker_color: Color::rgba(0.2, 0.45, 0.8, 0.6),
            point_color: Color::rgba(0.0, 0.6, 0.6, 0.85),
            selected_point_color: Color::rgb(0.85, 0.3, 0.1),
            axis_line_width_px: 2.0,
            tick_height_px: 4.0,
            major_tick_height_px: 8.0,
            handle_radius_px: 7.0,
            button_size_px: 24.0,
            path_stroke_width_px: 2.0,
            marker_radius_px: 4.0,
            point_radius_px: 6.0,
        }
    }
}

impl PlayAxisStyle {
    pub fn validate(self) -> PlayAxisResult<Self> {
        for color in [
            self.axis_line_color,
            self.tick_color,
            self.major_tick_color,
            self.label_color,
            self.caption_color,
            self.handle_color,
            self.button_color,
            self.button_glyph_color,
            self.path_color,
            self.marker_color,
            self.point_color,
            self.selected_point_color,
        ] {
            color.validate()?;
        }
        for (value, name) in [
            (self.axis_line_width_px, "axis_line_width_px"),
            (self.tick_height_px, "tick_height_px"),
            (self.major_tick_height_px, "major_tick_height_px"),
            (self.handle_radius_px, "handle_radius_px"),
            (self.button_size_px, "button_size_px"),
            (self.path_stroke_width_px, "path_stroke_width_px"),
            (self.marker_radius_px, "marker_radius_px"),
            (self.point_radius_px, "point_radius_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlayAxisError::InvalidData(format!(
                    "play-axis style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// play-axis setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayAxisConfig {
    #[serde(default = "default_play_interval_ms")]
    pub play_interval_ms: u64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
    #[serde(default = "default_path_length_reserve_px")]
    pub path_length_reserve_px: f64,
    #[serde(default = "default_label_margin_px")]
    pub label_margin_px: f64,
    #[serde(default = "default_axis_height_px")]
    pub axis_height_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_caption_font_size_px")]
    pub caption_font_size_px: f64,
    #[serde(default)]
    pub match_policy: MatchPolicy,
    #[serde(default)]
    pub style: PlayAxisStyle,
}

impl Default for PlayAxisConfig {
    fn default() -> Self {
        Self {
            play_interval_ms: default_play_interval_ms(),
            transition_duration_ms: default_transition_duration_ms(),
            path_length_reserve_px: default_path_length_reserve_px(),
            label_margin_px: default_label_margin_px(),
            axis_height_px: default_axis_height_px(),
            label_font_size_px: default_label_font_size_px(),
            caption_font_size_px: default_caption_font_size_px(),
            match_policy: MatchPolicy::default(),
            style: PlayAxisStyle::default(),
        }
    }
}

impl PlayAxisConfig {
    #[must_use]
    pub fn with_play_interval(mut self, interval: Duration) -> Self {
        self.play_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    #[must_use]
    pub fn with_path_length_reserve_px(mut self, reserve_px: f64) -> Self {
        self.path_length_reserve_px = reserve_px;
        self
    }

    #[must_use]
    pub fn with_label_margin_px(mut self, margin_px: f64) -> Self {
        self.label_margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_axis_height_px(mut self, height_px: f64) -> Self {
        self.axis_height_px = height_px;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PlayAxisStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn play_interval(self) -> Duration {
        Duration::from_millis(self.play_interval_ms)
    }

    #[must_use]
    pub fn transition(self) -> TransitionSpec {
        TransitionSpec::linear(Duration::from_millis(self.transition_duration_ms))
    }

    pub fn validate(self) -> PlayAxisResult<Self> {
        if self.play_interval_ms == 0 {
            return Err(PlayAxisError::InvalidData(
                "play interval must be > 0 ms".to_owned(),
            ));
        }
        for (value, name) in [
            (self.path_length_reserve_px, "path_length_reserve_px"),
            (self.label_margin_px, "label_margin_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlayAxisError::InvalidData(format!(
                    "play-axis config `{name}` must be finite and >= 0"
                )));
            }
        }
        for (value, name) in [
            (self.axis_height_px, "axis_height_px"),
            (self.label_font_size_px, "label_font_size_px"),
            (self.caption_font_size_px, "caption_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlayAxisError::InvalidData(format!(
                    "play-axis config `{name}` must be finite and > 0"
                )));
            }
        }
        self.style.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> PlayAxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlayAxisError::InvalidData(format!("failed to serialize play-axis config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> PlayAxisResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            PlayAxisError::InvalidData(format!("failed to parse play-axis config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_play_interval_ms() -> u64 {
    800
}

fn default_transition_duration_ms() -> u64 {
    750
}

fn default_path_length_reserve_px() -> f64 {
    PATH_LENGTH_RESERVE_PX
}

fn default_label_margin_px() -> f64 {
    LABEL_MARGIN_PX
}

fn default_axis_height_px() -> f64 {
    80.0
}

fn default_label_font_size_px() -> f64 {
    11.0
}

fn default_caption_font_size_px() -> f64 {
    28.0
}
