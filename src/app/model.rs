//! Application model types: `App`, `MountPhase` and `PlaybackState`.

use crate::config::ControlsSettings;
use crate::player::ProgressStep;

/// The playback state of the application, as mirrored for MPRIS and the UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Lifecycle of one mounted player view.
#[derive(Debug, Clone, PartialEq)]
pub enum MountPhase {
    /// No transaction ids were supplied; nothing to render.
    Idle,
    /// The resolution query is in flight.
    Resolving,
    /// Resolution failed; the message replaces the player.
    Failed(String),
    /// Tracks resolved and handed to the player.
    Ready,
}

/// The main application model.
pub struct App {
    /// Transaction ids requested on the command line.
    pub txids: Vec<String>,
    pub phase: MountPhase,
    pub playback: PlaybackState,
    /// Volume on the 0-100 input scale; the player maps it to gain.
    pub volume: u8,
    /// Step granularity of the progress control.
    pub progress_step: ProgressStep,
    /// Generation of the current mount. Resolution outcomes carrying a
    /// different generation are stale and must be dropped.
    pub generation: u64,
}

impl App {
    /// Create a new `App` for the provided transaction ids.
    pub fn new(txids: Vec<String>) -> Self {
        let phase = if txids.is_empty() {
            MountPhase::Idle
        } else {
            MountPhase::Resolving
        };

        Self {
            txids,
            phase,
            playback: PlaybackState::Stopped,
            volume: 100,
            progress_step: ProgressStep::Fine,
            generation: 0,
        }
    }

    /// Record a failed resolution; the message is rendered in place of the
    /// player.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = MountPhase::Failed(message.into());
    }

    /// Mark the mount ready once tracks have been handed to the player.
    pub fn ready(&mut self) {
        self.phase = MountPhase::Ready;
    }

    /// Switch the progress control to coarse stepping. Stays coarse for
    /// subsequent adjustments.
    pub fn coarsen_step(&mut self) {
        self.progress_step = ProgressStep::Coarse;
    }

    /// Current scrub step in seconds, per the controls settings.
    pub fn step_seconds(&self, controls: &ControlsSettings) -> f64 {
        match self.progress_step {
            ProgressStep::Fine => controls.fine_step,
            ProgressStep::Coarse => controls.coarse_step,
        }
    }

    /// Adjust volume by `delta` on the 0-100 scale, clamped.
    pub fn adjust_volume(&mut self, delta: i16) -> u8 {
        let next = i16::from(self.volume) + delta;
        self.volume = next.clamp(0, 100) as u8;
        self.volume
    }
}
