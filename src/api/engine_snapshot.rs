use serde::{Deserialize, Serialize};

use crate::core::{PointId, ValueClass};
use crate::interaction::{TimelineMode, TimelineState};
use crate::render::Renderer;

use super::PlayAxisEngine;

/// Serializable state of one drawn trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSnapshot {
    pub owner: PointId,
    pub slots: Vec<Option<PointId>>,
    pub cumulative_distances: Vec<Option<f64>>,
    pub total_length: f64,
    pub dash_offset: f64,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayAxisSnapshot {
    pub enabled: bool,
    pub mode: TimelineMode,
    pub timeline: TimelineState,
    pub value_class: Option<ValueClass>,
    pub group_captions: Vec<String>,
    pub label_visibility: Vec<bool>,
    pub thinning_factor: usize,
    pub shown_points: Vec<PointId>,
    pub selection: Vec<PointId>,
    pub caption: Option<String>,
    pub traces: Vec<TraceSnapshot>,
}

impl<R: Renderer> PlayAxisEngine<R> {
    /// Captures the settled state; dash offsets report their transition
    /// targets.
    #[must_use]
    pub fn snapshot(&self) -> PlayAxisSnapshot {
        let traces = self
            .traces
            .iter()
            .zip(self.animator.traces())
            .map(|(trace, animated)| TraceSnapshot {
                owner: trace.owner(),
                slots: trace.slots().to_vec(),
                cumulative_distances: trace.cumulative_distances().to_vec(),
                total_length: animated.total_length(),
                dash_offset: animated.target_dash_offset(),
            })
            .collect();

        PlayAxisSnapshot {
            enabled: self.enabled,
            mode: self.timeline.mode(),
            timeline: self.timeline.state(),
            value_class: self.groups.as_ref().map(|groups| groups.value_class()),
            group_captions: self
                .groups
                .as_ref()
                .map(|groups| groups.captions())
                .unwrap_or_default(),
            label_visibility: self.labels.flags().to_vec(),
            thinning_factor: self.labels.thinning_factor(),
            shown_points: self
                .points
                .iter()
                .enumerate()
                .filter(|(_, point)| point.shown)
                .map(|(index, _)| PointId(index))
                .collect(),
            selection: self.selection.clone(),
            caption: self.caption.clone(),
            traces,
        }
    }
}
