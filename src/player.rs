//! Playback subsystem: audio graph, media element boundary and the
//! player state machine.

mod controller;
mod graph;
mod media;
mod types;

pub use controller::Player;
pub use graph::AudioGraph;
pub use media::{GatewayElement, MediaElement};
pub use types::{PlaybackSnapshot, ProgressStep};
