use std::time::Duration;

use indexmap::IndexMap;
use tracing::trace;

use crate::core::{DataPoint, PlayAxisGroups, PointId};

use super::{AnimatedValue, TransitionSpec};

/// Ephemeral render state of one point, owned by the rendering side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointBinding {
    opacity: AnimatedValue,
    rendered: bool,
}

impl PointBinding {
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity.value()
    }

    /// Whether the point is still in the render list (and hit-testable).
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }
}

/// Render bindings keyed by point id, kept apart from the `DataPoint` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBindings {
    bindings: IndexMap<PointId, PointBinding>,
}

impl RenderBindings {
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&PointBinding> {
        self.bindings.get(&id)
    }

    #[must_use]
    pub fn is_rendered(&self, id: PointId) -> bool {
        self.bindings.get(&id).is_some_and(PointBinding::is_rendered)
    }

    /// Points currently in the render list, in insertion order.
    pub fn rendered(&self) -> impl Iterator<Item = (PointId, f64)> + '_ {
        self.bindings
            .iter()
            .filter(|(_, binding)| binding.rendered)
            .map(|(id, binding)| (*id, binding.opacity()))
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.bindings
            .values()
            .any(|binding| binding.opacity.is_animating())
    }

    /// Steps every fade; points whose fade-out landed leave the render list.
    pub fn advance(&mut self, elapsed: Duration) {
        for (id, binding) in &mut self.bindings {
            if binding.opacity.advance(elapsed) && binding.opacity.target() <= 0.0 {
                binding.rendered = false;
                trace!(point = %id, "fade-out finished; point removed from render list");
            }
        }
    }

    fn show(&mut self, id: PointId, transition: Option<TransitionSpec>) {
        let binding = self.bindings.entry(id).or_insert(PointBinding {
            opacity: AnimatedValue::new(0.0),
            rendered: false,
        });
        binding.rendered = true;
        match transition {
            Some(spec) => binding.opacity.animate_to(1.0, spec),
            None => binding.opacity.set(1.0),
        }
    }

    fn hide(&mut self, id: PointId, transition: Option<TransitionSpec>) {
        let binding = self.bindings.entry(id).or_insert(PointBinding {
            opacity: AnimatedValue::new(0.0),
            rendered: false,
        });
        match transition {
            Some(spec) if binding.rendered => {
                binding.opacity.animate_to(0.0, spec);
                if !binding.opacity.is_animating() {
                    binding.rendered = false;
                }
            }
            _ => {
                binding.opacity.set(0.0);
                binding.rendered = false;
            }
        }
    }
}

/// Shows the points of `groups[index]` and hides every other point.
///
/// With a transition, hidden points fade out and stay in the render list until
/// the fade completes. Returns the caption of the displayed group.
pub fn slice_visibility(
    points: &mut [DataPoint],
    groups: &PlayAxisGroups,
    index: usize,
    bindings: &mut RenderBindings,
    transition: Option<TransitionSpec>,
) -> Option<String> {
    let group = groups.get(index)?;

    for (position, point) in points.iter_mut().enumerate() {
        let id = PointId(position);
        let shown = groups.group_of(id) == Some(index);
        point.shown = shown;
        if shown {
            bindings.show(id, transition);
        } else {
            bindings.hide(id, transition);
        }
    }

    Some(group.caption().to_owned())
}
