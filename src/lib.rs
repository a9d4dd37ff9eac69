//! playaxis-rs: play-axis engine for animated scatter charts.
//!
//! Groups scatter points by a time-like value, drives a scrubber and
//! auto-play timeline over the ordered groups, slices point visibility per
//! group and reveals trace paths of selected points across groups.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PlayAxisConfig, PlayAxisEngine};
pub use error::{PlayAxisError, PlayAxisResult};
