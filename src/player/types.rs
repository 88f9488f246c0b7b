//! Player-facing small types.

/// Step granularity of the progress control.
///
/// Starts fine; switches to coarse once the user adjusts the control with
/// the step keys, and stays coarse for subsequent adjustments.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProgressStep {
    Fine,
    Coarse,
}

impl Default for ProgressStep {
    fn default() -> Self {
        Self::Fine
    }
}

/// Read-only snapshot of playback state for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    /// Index of the active track in the mounted tracklist.
    pub current_track: usize,
    /// Whether playback is currently active.
    pub playing: bool,
    /// Whole-second duration, once the media source has reported it.
    pub duration: Option<f64>,
    /// Displayed position: the scrub preview while scrubbing, the media
    /// position otherwise.
    pub current_time: f64,
    /// Whether a scrub drag is in progress.
    pub scrubbing: bool,
    /// Position being previewed by the scrub drag.
    pub scrub_preview: Option<f64>,
    /// Gain currently applied, in `[0.0, 1.0]`.
    pub volume: f32,
}
