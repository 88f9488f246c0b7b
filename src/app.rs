//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the mount lifecycle,
//! playback state mirror and UI affordances for one player view.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
