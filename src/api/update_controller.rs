use tracing::{debug, trace};

use crate::core::{
    DataPoint, LabelVisibilityMap, PlayAxisGroups, PointId, ScalePair, build_groups,
    plan_label_density, trace_selection,
};
use crate::error::{PlayAxisError, PlayAxisResult};
use crate::render::Renderer;

use super::{
    PlayAxisEngine, PlayAxisEvent, PlayAxisLayout, TransitionSpec, UpdateBundle, UpdateKind,
    slice_visibility,
};

impl<R: Renderer> PlayAxisEngine<R> {
    /// Applies one chart update.
    ///
    /// Structural updates regroup and reset the timeline to the most recent
    /// group before anything is rendered. Resize updates keep groups and the
    /// current index, re-planning labels and re-measuring traces only.
    pub fn update(&mut self, bundle: UpdateBundle) -> PlayAxisResult<()> {
        let layout = bundle.layout.validate()?;
        match bundle.kind {
            UpdateKind::Structural => {
                self.apply_structural_update(bundle.points, bundle.scales, layout)
            }
            UpdateKind::Resize => {
                self.apply_resize_update(bundle.scales, layout);
                Ok(())
            }
        }
    }

    pub(super) fn apply_structural_update(
        &mut self,
        points: Vec<DataPoint>,
        scales: ScalePair,
        layout: PlayAxisLayout,
    ) -> PlayAxisResult<()> {
        self.reset_play_axis_state();
        self.points = points;
        self.scales = Some(scales);
        self.layout = Some(layout);
        self.selection = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.selected)
            .map(|(index, _)| PointId(index))
            .collect();

        if !self.enabled {
            for point in &mut self.points {
                point.shown = true;
            }
            return Ok(());
        }

        let groups = match build_groups(&self.points) {
            Ok(groups) => groups,
            Err(PlayAxisError::EmptyInput) => {
                debug!("no points to group; play axis stays idle");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let group_count = groups.len();
        debug!(
            group_count,
            points = self.points.len(),
            class = ?groups.value_class(),
            "play-axis groups rebuilt"
        );
        self.timeline.on_structural_update(group_count);
        self.groups = Some(groups);
        self.refresh_label_visibility();
        self.rebuild_traces();
        self.apply_display(self.timeline.display_index(), None);
        self.emit_plugin_event(PlayAxisEvent::GroupsRebuilt { group_count });
        Ok(())
    }

    fn apply_resize_update(&mut self, scales: ScalePair, layout: PlayAxisLayout) {
        self.scales = Some(scales);
        self.layout = Some(layout);
        let Some(group_count) = self.groups.as_ref().map(PlayAxisGroups::len) else {
            trace!("resize before any groups; nothing to re-render");
            return;
        };

        let current_index = self.timeline.on_resize_update();
        debug!(group_count, current_index, "play axis resized");
        self.refresh_label_visibility();
        self.rebuild_traces();
        self.apply_display(self.timeline.display_index(), None);
        self.emit_plugin_event(PlayAxisEvent::Resized { group_count });
    }

    pub(super) fn refresh_label_visibility(&mut self) {
        let (Some(groups), Some(layout)) = (self.groups.as_ref(), self.layout) else {
            self.labels = LabelVisibilityMap::default();
            return;
        };
        let geometry = layout.axis_geometry(&self.config);
        self.labels = plan_label_density(
            &groups.captions(),
            geometry.track_span_px(),
            self.config.label_margin_px,
            self.config.label_font_size_px,
            &*self.measurer,
        );
        trace!(
            thinning_factor = self.labels.thinning_factor(),
            span_px = geometry.track_span_px(),
            "axis labels planned"
        );
    }

    /// Rebuilds traces for the current selection and measures them in
    /// screen space.
    pub(super) fn rebuild_traces(&mut self) {
        let (Some(groups), Some(scales)) = (self.groups.as_ref(), self.scales.as_ref()) else {
            self.traces.clear();
            return;
        };
        let mut traces = trace_selection(
            groups,
            &self.points,
            &self.selection,
            self.config.match_policy,
        );
        for trace in &mut traces {
            trace.measure(&self.points, scales);
        }
        self.traces = traces;
    }

    /// Rebuilds traces and redraws paths at the displayed index without
    /// animating.
    pub(super) fn refresh_traces(&mut self) {
        self.rebuild_traces();
        self.animator
            .render(&self.traces, self.timeline.display_index(), None);
    }

    pub(super) fn apply_display(&mut self, index: usize, transition: Option<TransitionSpec>) {
        let Some(groups) = self.groups.as_ref() else {
            return;
        };
        self.caption = slice_visibility(
            &mut self.points,
            groups,
            index,
            &mut self.bindings,
            transition,
        );
        self.animator.render(&self.traces, index, transition);
    }
}
