use std::time::Duration;

use tracing::{debug, trace};

use crate::interaction::{TimelineMode, TimelineStep};
use crate::render::Renderer;

use super::{PlayAxisEngine, PlayAxisEvent};

impl<R: Renderer> PlayAxisEngine<R> {
    /// Starts auto-play; restarts from the first group when already at the end.
    pub fn play(&mut self) {
        let step = self.timeline.play();
        self.apply_timeline_step(step);
        if self.timeline.is_playing() {
            let from = self.timeline.current_index();
            self.emit_plugin_event(PlayAxisEvent::PlaybackStarted { from });
        }
    }

    /// Stops auto-play and snaps in-flight path reveals to their targets.
    pub fn pause(&mut self) {
        if !self.timeline.is_playing() {
            return;
        }
        self.timeline.pause();
        self.animator
            .render(&self.traces, self.timeline.display_index(), None);
        let at = self.timeline.current_index();
        self.emit_plugin_event(PlayAxisEvent::PlaybackStopped { at });
    }

    pub fn toggle_playback(&mut self) {
        if self.timeline.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn begin_drag(&mut self) {
        let was_playing = self.timeline.is_playing();
        let step = self.timeline.begin_drag();
        if was_playing {
            let at = self.timeline.current_index();
            self.emit_plugin_event(PlayAxisEvent::PlaybackStopped { at });
        }
        self.apply_timeline_step(step);
    }

    /// Moves the live scrub preview to `index` without committing it.
    pub fn drag(&mut self, index: usize) {
        let was_playing = self.timeline.is_playing();
        let step = self.timeline.drag(index);
        if was_playing {
            let at = self.timeline.current_index();
            self.emit_plugin_event(PlayAxisEvent::PlaybackStopped { at });
        }
        self.apply_timeline_step(step);
    }

    /// Commits `index`, mirroring a slider release.
    pub fn commit_drag(&mut self, index: usize) {
        let was_playing = self.timeline.is_playing();
        let step = self.timeline.commit_drag(index);
        if was_playing {
            let at = self.timeline.current_index();
            self.emit_plugin_event(PlayAxisEvent::PlaybackStopped { at });
        }
        self.apply_timeline_step(step);
    }

    /// Pointer press on the control strip. Returns `true` when consumed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        if self.timeline.mode() == TimelineMode::Idle {
            return false;
        }
        let geometry = layout.axis_geometry(&self.config);
        if geometry.hits_button(x, y, self.config.style.button_size_px) {
            self.toggle_playback();
            return true;
        }
        let reach = self.config.style.handle_radius_px * 2.0;
        if (y - geometry.axis_y).abs() > reach
            || x < geometry.track_start_x - reach
            || x > geometry.track_end_x + reach
        {
            return false;
        }
        self.begin_drag();
        self.drag(geometry.index_at_x(x, self.timeline.group_count()));
        true
    }

    pub fn pointer_move(&mut self, x: f64) -> bool {
        if self.timeline.mode() != TimelineMode::Dragging {
            return false;
        }
        let Some(layout) = self.layout else {
            return false;
        };
        let geometry = layout.axis_geometry(&self.config);
        self.drag(geometry.index_at_x(x, self.timeline.group_count()));
        true
    }

    pub fn pointer_up(&mut self, x: f64) -> bool {
        if self.timeline.mode() != TimelineMode::Dragging {
            return false;
        }
        let Some(layout) = self.layout else {
            return false;
        };
        let geometry = layout.axis_geometry(&self.config);
        self.commit_drag(geometry.index_at_x(x, self.timeline.group_count()));
        true
    }

    /// Feeds elapsed wall-clock time to fades, path reveals and the auto-play
    /// timer. Returns `true` when the host should redraw.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let animating = self.bindings.is_animating() || self.animator.is_animating();
        self.bindings.advance(elapsed);
        self.animator.advance(elapsed);

        let step = self.timeline.advance(elapsed);
        let stepped = step != TimelineStep::None;
        self.apply_timeline_step(step);
        animating || stepped
    }

    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.timeline.time_until_next_tick()
    }

    /// Whether `advance` still has work: a running timer or an in-flight
    /// transition.
    #[must_use]
    pub fn needs_animation_frame(&self) -> bool {
        self.timeline.is_playing() || self.bindings.is_animating() || self.animator.is_animating()
    }

    fn apply_timeline_step(&mut self, step: TimelineStep) {
        match step {
            TimelineStep::None => {}
            TimelineStep::Preview { index } => {
                trace!(index, "scrub preview");
                self.apply_display(index, None);
                self.emit_plugin_event(PlayAxisEvent::DragPreview { index });
            }
            TimelineStep::Committed { index } => {
                debug!(index, "timeline index committed");
                self.apply_display(index, Some(self.config.transition()));
                self.emit_plugin_event(PlayAxisEvent::IndexCommitted { index });
            }
            TimelineStep::Tick { index, finished } => {
                trace!(index, finished, "auto-play tick");
                self.apply_display(index, Some(self.config.transition()));
                self.emit_plugin_event(PlayAxisEvent::IndexCommitted { index });
                if finished {
                    self.emit_plugin_event(PlayAxisEvent::PlaybackStopped { at: index });
                }
            }
        }
    }
}
