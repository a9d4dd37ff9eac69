use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{PointId, ScreenPoint, Trace};

use super::{AnimatedValue, TransitionSpec};

/// Stroke length of a trace: all segment lengths plus the reserve.
#[must_use]
pub fn total_path_length(trace: &Trace, reserve_px: f64) -> f64 {
    trace.total_distance() + reserve_px
}

/// Dash offset that reveals the trace up to `current_index`.
#[must_use]
pub fn dash_offset_at(trace: &Trace, current_index: usize, reserve_px: f64) -> f64 {
    total_path_length(trace, reserve_px) - trace.distance_through(current_index)
}

/// Circle drawn at a traced counterpart already reached by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathMarker {
    pub owner: PointId,
    pub point: PointId,
    pub slot: usize,
    pub position: ScreenPoint,
}

/// One trace as currently drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedTrace {
    owner: PointId,
    owner_group: usize,
    slots: Vec<Option<PointId>>,
    positions: Vec<Option<ScreenPoint>>,
    total_length: f64,
    dash_offset: AnimatedValue,
}

impl AnimatedTrace {
    #[must_use]
    pub fn owner(&self) -> PointId {
        self.owner
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    #[must_use]
    pub fn dash_offset(&self) -> f64 {
        self.dash_offset.value()
    }

    #[must_use]
    pub fn target_dash_offset(&self) -> f64 {
        self.dash_offset.target()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.dash_offset.is_animating()
    }

    /// Polyline through the defined slots.
    #[must_use]
    pub fn polyline(&self) -> Vec<ScreenPoint> {
        self.positions.iter().flatten().copied().collect()
    }

    fn same_geometry(&self, trace: &Trace) -> bool {
        self.owner == trace.owner()
            && self.slots.as_slice() == trace.slots()
            && self.positions.as_slice() == trace.positions()
    }
}

/// Drives the distance-proportional reveal of every trace path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathAnimator {
    reserve_px: f64,
    traces: Vec<AnimatedTrace>,
    current_index: usize,
}

impl PathAnimator {
    #[must_use]
    pub fn new(reserve_px: f64) -> Self {
        Self {
            reserve_px,
            traces: Vec::new(),
            current_index: 0,
        }
    }

    #[must_use]
    pub fn reserve_px(&self) -> f64 {
        self.reserve_px
    }

    #[must_use]
    pub fn traces(&self) -> &[AnimatedTrace] {
        &self.traces
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.traces.iter().any(AnimatedTrace::is_animating)
    }

    /// Drops every path immediately, canceling in-flight reveals.
    pub fn clear(&mut self) {
        if !self.traces.is_empty() {
            trace!(count = self.traces.len(), "clearing trace paths");
        }
        self.traces.clear();
    }

    /// Re-targets every path at `current_index`.
    ///
    /// A path whose geometry is unchanged animates to its new offset when a
    /// transition is given; new or re-measured paths jump straight there.
    pub fn render(
        &mut self,
        traces: &[Trace],
        current_index: usize,
        transition: Option<TransitionSpec>,
    ) {
        self.current_index = current_index;
        if traces.is_empty() {
            self.clear();
            return;
        }

        let mut previous = std::mem::take(&mut self.traces);
        self.traces = traces
            .iter()
            .map(|trace| {
                let target = dash_offset_at(trace, current_index, self.reserve_px);
                let reused = previous
                    .iter()
                    .position(|animated| animated.same_geometry(trace))
                    .map(|position| previous.swap_remove(position));

                match (reused, transition) {
                    (Some(mut animated), Some(spec)) => {
                        animated.dash_offset.animate_to(target, spec);
                        animated
                    }
                    _ => AnimatedTrace {
                        owner: trace.owner(),
                        owner_group: trace.owner_group(),
                        slots: trace.slots().to_vec(),
                        positions: trace.positions().to_vec(),
                        total_length: total_path_length(trace, self.reserve_px),
                        dash_offset: AnimatedValue::new(target),
                    },
                }
            })
            .collect();
    }

    pub fn advance(&mut self, elapsed: Duration) {
        for animated in &mut self.traces {
            animated.dash_offset.advance(elapsed);
        }
    }

    /// Markers for reached slots, skipping each owner's own group slot.
    #[must_use]
    pub fn markers(&self) -> Vec<PathMarker> {
        let mut markers = Vec::new();
        for animated in &self.traces {
            for (slot, (point, position)) in animated
                .slots
                .iter()
                .zip(&animated.positions)
                .enumerate()
                .take(self.current_index.saturating_add(1))
            {
                if slot == animated.owner_group {
                    continue;
                }
                if let (Some(point), Some(position)) = (point, position) {
                    markers.push(PathMarker {
                        owner: animated.owner,
                        point: *point,
                        slot,
                        position: *position,
                    });
                }
            }
        }
        markers
    }
}
