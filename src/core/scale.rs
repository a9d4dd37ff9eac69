use serde::{Deserialize, Serialize};

use crate::core::types::{ScreenPoint, Viewport};
use crate::error::{PlayAxisError, PlayAxisResult};

/// Linear mapping from a data domain to a pixel range.
///
/// The pixel range may be descending (screen `y` grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> PlayAxisResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlayAxisError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(PlayAxisError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> PlayAxisResult<f64> {
        if !value.is_finite() {
            return Err(PlayAxisError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }
}

/// The X/Y scale pair handed over by the chart, plus the plot viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    pub x: LinearScale,
    pub y: LinearScale,
    pub viewport: Viewport,
}

impl ScalePair {
    pub fn new(x: LinearScale, y: LinearScale, viewport: Viewport) -> PlayAxisResult<Self> {
        if !viewport.is_valid() {
            return Err(PlayAxisError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self { x, y, viewport })
    }

    /// Builds the usual scatter mapping: `x` left to right, `y` bottom to top.
    pub fn from_domains(
        x_domain: (f64, f64),
        y_domain: (f64, f64),
        viewport: Viewport,
    ) -> PlayAxisResult<Self> {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        Self::new(
            LinearScale::new(x_domain, (0.0, width))?,
            LinearScale::new(y_domain, (height, 0.0))?,
            viewport,
        )
    }

    /// Projects a data-space position into pixels.
    ///
    /// Absent or non-finite coordinates land on the viewport center, matching
    /// where an unplotted point is drawn.
    #[must_use]
    pub fn project(&self, x: Option<f64>, y: Option<f64>) -> ScreenPoint {
        let center = self.viewport.center();
        let px = x
            .and_then(|value| self.x.domain_to_pixel(value).ok())
            .unwrap_or(center.x);
        let py = y
            .and_then(|value| self.y.domain_to_pixel(value).ok())
            .unwrap_or(center.y);
        ScreenPoint::new(px, py)
    }
}
