use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::TimelineMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayAxisContext {
    pub viewport: Option<Viewport>,
    pub enabled: bool,
    pub points_len: usize,
    pub group_count: usize,
    pub current_index: usize,
    pub mode: TimelineMode,
    pub selected_len: usize,
    pub trace_count: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayAxisEvent {
    GroupsRebuilt { group_count: usize },
    Resized { group_count: usize },
    DragPreview { index: usize },
    IndexCommitted { index: usize },
    PlaybackStarted { from: usize },
    PlaybackStopped { at: usize },
    SelectionChanged { trace_count: usize },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe play-axis events and read engine context without
/// mutating engine internals directly.
pub trait PlayAxisPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PlayAxisEvent, context: PlayAxisContext);
}
