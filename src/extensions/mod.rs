//! Optional feature modules live here.
//!
//! Keep extensions decoupled from core paths; the engine only talks to them
//! through the plugin trait.

pub mod plugins;

pub use plugins::{PlayAxisContext, PlayAxisEvent, PlayAxisPlugin};
