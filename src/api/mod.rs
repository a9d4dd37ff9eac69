//! Public play-axis engine surface.
//!
//! `PlayAxisEngine` is split across several files, each adding one
//! `impl<R: Renderer> PlayAxisEngine<R>` block for a single concern.

mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod path_animator;
mod plugin_dispatch;
mod plugin_registry;
mod scene_builder;
mod selection;
mod timeline_controller;
mod transition;
mod update;
mod update_controller;
mod visibility;

pub use engine::PlayAxisEngine;
pub use engine_config::{PATH_LENGTH_RESERVE_PX, PlayAxisConfig, PlayAxisStyle};
pub use engine_snapshot::{PlayAxisSnapshot, TraceSnapshot};
pub use json_contract::{PLAY_AXIS_SNAPSHOT_JSON_SCHEMA_V1, PlayAxisSnapshotJsonContractV1};
pub use path_animator::{
    AnimatedTrace, PathAnimator, PathMarker, dash_offset_at, total_path_length,
};
pub use selection::SelectionDelta;
pub use transition::{AnimatedValue, Easing, TransitionSpec};
pub use update::{AxisGeometry, Margins, PlayAxisLayout, UpdateBundle, UpdateKind};
pub use visibility::{PointBinding, RenderBindings, slice_visibility};

pub use crate::extensions::{PlayAxisContext, PlayAxisEvent, PlayAxisPlugin};
