use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn center(self) -> ScreenPoint {
        ScreenPoint::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Position of a point inside the list pushed by the latest structural update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub usize);

impl PointId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Composite identity used to match one point's counterparts across groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointKey {
    pub category: String,
    pub series: String,
}

impl PointKey {
    #[must_use]
    pub fn new(category: impl Into<String>, series: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            series: series.into(),
        }
    }
}

/// Raw play-axis value as delivered by the data-transform stage.
///
/// Date-like values arrive as strings; the classifier decides how they compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayAxisValue {
    Number(f64),
    Text(String),
}

impl From<f64> for PlayAxisValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PlayAxisValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PlayAxisValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PlayAxisValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for PlayAxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One scatter point as seen by the play-axis engine.
///
/// The engine reads positions and identity and annotates `shown`; it never
/// creates or destroys points. Render handles live in `RenderBindings`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub play_axis_value: Option<PlayAxisValue>,
    pub key: PointKey,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "default_shown")]
    pub shown: bool,
}

fn default_shown() -> bool {
    true
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, key: PointKey) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            play_axis_value: None,
            key,
            selected: false,
            shown: true,
        }
    }

    #[must_use]
    pub fn with_play_axis_value(mut self, value: impl Into<PlayAxisValue>) -> Self {
        self.play_axis_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn without_x(mut self) -> Self {
        self.x = None;
        self
    }

    #[must_use]
    pub fn without_y(mut self) -> Self {
        self.y = None;
        self
    }
}

/// Pixel-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
