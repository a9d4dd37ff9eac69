use crate::extensions::PlayAxisContext;
use crate::render::Renderer;

use super::{PlayAxisEngine, PlayAxisEvent};

impl<R: Renderer> PlayAxisEngine<R> {
    pub(super) fn plugin_context(&self) -> PlayAxisContext {
        PlayAxisContext {
            viewport: self.layout.map(|layout| layout.viewport),
            enabled: self.enabled,
            points_len: self.points.len(),
            group_count: self.groups.as_ref().map_or(0, |groups| groups.len()),
            current_index: self.timeline.current_index(),
            mode: self.timeline.mode(),
            selected_len: self.selection.len(),
            trace_count: self.traces.len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PlayAxisEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
