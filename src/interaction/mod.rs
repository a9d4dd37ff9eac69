use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default spacing between two auto-play ticks.
pub const DEFAULT_PLAY_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineMode {
    /// No play-axis groups yet.
    Idle,
    Ready,
    /// User is scrubbing; `drag_preview_index` carries the live position.
    Dragging,
    /// Auto-play timer is armed.
    Playing,
}

/// Public timeline state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineState {
    pub current_index: usize,
    pub is_playing: bool,
    pub drag_preview_index: Option<usize>,
}

/// State transition reported back to the caller so it can re-slice and re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineStep {
    /// Nothing changed.
    None,
    /// Live scrub position moved; `current_index` is untouched.
    Preview { index: usize },
    /// `current_index` changed and should be applied with transitions.
    Committed { index: usize },
    /// An auto-play tick advanced `current_index`.
    Tick { index: usize, finished: bool },
}

/// Scrubber and auto-play state machine for the play axis.
///
/// The controller never owns a real timer: hosts call `advance` with the
/// elapsed wall-clock time and apply whatever step it reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineController {
    mode: TimelineMode,
    group_count: usize,
    state: TimelineState,
    play_interval: Duration,
    since_last_tick: Duration,
}

impl Default for TimelineController {
    fn default() -> Self {
        Self::new(DEFAULT_PLAY_INTERVAL)
    }
}

impl TimelineController {
    #[must_use]
    pub fn new(play_interval: Duration) -> Self {
        Self {
            mode: TimelineMode::Idle,
            group_count: 0,
            state: TimelineState::default(),
            play_interval: play_interval.max(Duration::from_millis(1)),
            since_last_tick: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TimelineMode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> TimelineState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Index the view should show right now: the drag preview when scrubbing.
    #[must_use]
    pub fn display_index(&self) -> usize {
        self.state
            .drag_preview_index
            .unwrap_or(self.state.current_index)
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.mode == TimelineMode::Playing
    }

    #[must_use]
    pub fn play_interval(&self) -> Duration {
        self.play_interval
    }

    pub fn set_play_interval(&mut self, interval: Duration) {
        self.play_interval = interval.max(Duration::from_millis(1));
    }

    fn last_index(&self) -> usize {
        self.group_count.saturating_sub(1)
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    fn stop_timer(&mut self) {
        self.state.is_playing = false;
        self.since_last_tick = Duration::ZERO;
    }

    /// Resets to the most recent group after new data arrived.
    pub fn on_structural_update(&mut self, group_count: usize) {
        self.stop_timer();
        self.group_count = group_count;
        self.state.drag_preview_index = None;
        if group_count == 0 {
            self.state.current_index = 0;
            self.mode = TimelineMode::Idle;
        } else {
            self.state.current_index = group_count - 1;
            self.mode = TimelineMode::Ready;
        }
        debug!(group_count, current_index = self.state.current_index, "timeline reset");
    }

    /// Resize keeps the timeline untouched; the caller re-renders at
    /// `current_index`.
    pub fn on_resize_update(&mut self) -> usize {
        self.state.current_index
    }

    pub fn begin_drag(&mut self) -> TimelineStep {
        if self.mode == TimelineMode::Idle {
            return TimelineStep::None;
        }
        if self.mode == TimelineMode::Playing {
            debug!("scrub started during playback; pausing");
            self.stop_timer();
        }
        self.mode = TimelineMode::Dragging;
        self.state.drag_preview_index = Some(self.state.current_index);
        TimelineStep::Preview {
            index: self.state.current_index,
        }
    }

    /// Moves the live preview without committing.
    pub fn drag(&mut self, index: usize) -> TimelineStep {
        if self.mode == TimelineMode::Idle {
            return TimelineStep::None;
        }
        if self.mode != TimelineMode::Dragging {
            self.begin_drag();
        }
        let index = self.clamp_index(index);
        if self.state.drag_preview_index == Some(index) {
            return TimelineStep::None;
        }
        self.state.drag_preview_index = Some(index);
        TimelineStep::Preview { index }
    }

    /// Commits a scrub position, mirroring a slider release.
    pub fn commit_drag(&mut self, index: usize) -> TimelineStep {
        if self.mode == TimelineMode::Idle {
            return TimelineStep::None;
        }
        self.stop_timer();
        let index = self.clamp_index(index);
        self.state.current_index = index;
        self.state.drag_preview_index = None;
        self.mode = TimelineMode::Ready;
        TimelineStep::Committed { index }
    }

    /// Starts auto-play, restarting from the first group when already at the end.
    pub fn play(&mut self) -> TimelineStep {
        match self.mode {
            TimelineMode::Idle | TimelineMode::Playing => return TimelineStep::None,
            TimelineMode::Ready | TimelineMode::Dragging => {}
        }

        // An abandoned scrub preview must give way to the committed index.
        let mut step = match self.state.drag_preview_index.take() {
            Some(preview) if preview != self.state.current_index => TimelineStep::Committed {
                index: self.state.current_index,
            },
            _ => TimelineStep::None,
        };
        if self.state.current_index >= self.last_index() {
            self.state.current_index = 0;
            step = TimelineStep::Committed { index: 0 };
        }

        if self.state.current_index >= self.last_index() {
            // Single group: nothing left to play through.
            self.mode = TimelineMode::Ready;
            return step;
        }

        self.mode = TimelineMode::Playing;
        self.state.is_playing = true;
        self.since_last_tick = Duration::ZERO;
        debug!(from = self.state.current_index, "playback started");
        step
    }

    pub fn pause(&mut self) {
        if self.mode != TimelineMode::Playing {
            return;
        }
        self.stop_timer();
        self.mode = TimelineMode::Ready;
        debug!(at = self.state.current_index, "playback paused");
    }

    /// Time left before the next auto-play tick, if playing.
    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.is_playing()
            .then(|| self.play_interval.saturating_sub(self.since_last_tick))
    }

    /// Feeds elapsed wall-clock time to the auto-play timer.
    ///
    /// At most one tick fires per call and leftover time never exceeds one
    /// interval, so a stalled host resumes with a single step.
    pub fn advance(&mut self, elapsed: Duration) -> TimelineStep {
        if self.mode != TimelineMode::Playing {
            return TimelineStep::None;
        }

        self.since_last_tick = self.since_last_tick.saturating_add(elapsed);
        if self.since_last_tick < self.play_interval {
            return TimelineStep::None;
        }
        self.since_last_tick = (self.since_last_tick - self.play_interval).min(self.play_interval);

        let index = self.clamp_index(self.state.current_index + 1);
        self.state.current_index = index;
        let finished = index >= self.last_index();
        if finished {
            self.stop_timer();
            self.mode = TimelineMode::Ready;
            debug!(at = index, "playback finished");
        }
        TimelineStep::Tick { index, finished }
    }
}
