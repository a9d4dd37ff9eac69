use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::PointId;
use crate::error::{PlayAxisError, PlayAxisResult};
use crate::render::Renderer;

use super::{PlayAxisEngine, PlayAxisEvent};

/// Selection change reported by the host's selection collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDelta {
    pub selected: Vec<PointId>,
    pub deselected: Vec<PointId>,
}

impl SelectionDelta {
    #[must_use]
    pub fn new(selected: Vec<PointId>, deselected: Vec<PointId>) -> Self {
        Self {
            selected,
            deselected,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.deselected.is_empty()
    }

    /// First point listed as both newly selected and newly deselected.
    #[must_use]
    pub fn contradiction(&self) -> Option<PointId> {
        self.selected
            .iter()
            .copied()
            .find(|id| self.deselected.contains(id))
    }
}

impl<R: Renderer> PlayAxisEngine<R> {
    /// Replaces the whole selection set.
    pub fn on_select(&mut self, selection: &[PointId], transition: bool) -> PlayAxisResult<()> {
        let delta = SelectionDelta {
            selected: selection
                .iter()
                .copied()
                .filter(|id| !self.selection.contains(id))
                .collect(),
            deselected: self
                .selection
                .iter()
                .copied()
                .filter(|id| !selection.contains(id))
                .collect(),
        };
        self.apply_selection_delta(&delta, transition)
    }

    /// Applies an incremental selection change and rebuilds every trace.
    ///
    /// A point appearing on both sides of the delta is a contract violation
    /// upstream and is rejected before any state changes.
    pub fn apply_selection_delta(
        &mut self,
        delta: &SelectionDelta,
        transition: bool,
    ) -> PlayAxisResult<()> {
        if let Some(point) = delta.contradiction() {
            return Err(PlayAxisError::ContradictorySelection { point });
        }
        if let Some(unknown) = delta
            .selected
            .iter()
            .chain(&delta.deselected)
            .find(|id| id.index() >= self.points.len())
        {
            return Err(PlayAxisError::InvalidData(format!(
                "selection refers to unknown point {unknown}"
            )));
        }

        for id in &delta.deselected {
            self.selection.retain(|selected| selected != id);
            if let Some(point) = self.points.get_mut(id.index()) {
                point.selected = false;
            }
        }
        for id in &delta.selected {
            if !self.selection.contains(id) {
                self.selection.push(*id);
            }
            if let Some(point) = self.points.get_mut(id.index()) {
                point.selected = true;
            }
        }

        self.rebuild_traces();
        let transition = transition.then(|| self.config.transition());
        self.animator
            .render(&self.traces, self.timeline.display_index(), transition);

        let trace_count = self.traces.len();
        debug!(
            selected = self.selection.len(),
            trace_count, "selection applied"
        );
        self.emit_plugin_event(PlayAxisEvent::SelectionChanged { trace_count });
        Ok(())
    }

    pub fn clear_selection(&mut self) -> PlayAxisResult<()> {
        let delta = SelectionDelta::new(Vec::new(), self.selection.clone());
        self.apply_selection_delta(&delta, false)
    }
}
