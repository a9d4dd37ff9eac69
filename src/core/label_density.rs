use serde::{Deserialize, Serialize};

/// Horizontal gap reserved between two neighbouring play-axis labels.
pub const LABEL_MARGIN_PX: f64 = 10.0;

/// Text-width oracle used to size axis labels.
pub trait TextMeasurer {
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> f64,
{
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        self(text, font_size_px)
    }
}

/// Headless measurer assuming a fixed average glyph width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproxTextMeasurer {
    pub char_width_ratio: f64,
}

impl Default for ApproxTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
        }
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        text.chars().count() as f64 * font_size_px * self.char_width_ratio
    }
}

/// Which group labels are drawn, one flag per group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelVisibilityMap {
    visible: Vec<bool>,
    thinning_factor: usize,
}

impl LabelVisibilityMap {
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.visible
    }

    #[must_use]
    pub fn thinning_factor(&self) -> usize {
        self.thinning_factor
    }

    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Thins group labels so the widest one still fits between its neighbours.
///
/// `capacity = floor(span / (max label width + margin))`, clamped to at least
/// one, and every `ceil(N / capacity)`-th label is kept starting at index 0.
pub fn plan_label_density<S, M>(
    names: &[S],
    pixel_span: f64,
    margin_px: f64,
    font_size_px: f64,
    measurer: &M,
) -> LabelVisibilityMap
where
    S: AsRef<str>,
    M: TextMeasurer + ?Sized,
{
    if names.is_empty() {
        return LabelVisibilityMap::default();
    }

    let margin_px = if margin_px.is_finite() { margin_px.max(0.0) } else { 0.0 };
    let max_width = names
        .iter()
        .map(|name| {
            let measured = measurer.measure_text_width(name.as_ref(), font_size_px);
            let measured = if measured.is_finite() { measured.max(0.0) } else { 0.0 };
            measured + margin_px
        })
        .fold(0.0_f64, f64::max);

    let capacity = if pixel_span.is_finite() && pixel_span > 0.0 && max_width > 0.0 {
        ((pixel_span / max_width).floor() as usize).max(1)
    } else {
        1
    };
    let thinning_factor = names.len().div_ceil(capacity).max(1);

    LabelVisibilityMap {
        visible: (0..names.len())
            .map(|index| index % thinning_factor == 0)
            .collect(),
        thinning_factor,
    }
}
