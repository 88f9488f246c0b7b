//! The playback state machine.

use crate::ledger::{Track, Tracklist};

use super::media::MediaElement;
use super::types::PlaybackSnapshot;

/// Playback controller: one coherent state machine over a tracklist and a
/// bound media element. A single track mounts as a list of one.
///
/// Every control is a silent no-op until `mount` has bound an element; a
/// not-yet-ready player must never throw at the caller. Callers are
/// expected to disable interaction, but the controller degrades safely
/// either way.
pub struct Player<M: MediaElement> {
    media: Option<M>,
    tracks: Tracklist,
    current: usize,
    playing: bool,
    duration: Option<f64>,
    current_time: f64,
    scrubbing: bool,
    scrub_preview: Option<f64>,
    volume: f32,
    auto_advance: bool,
    resume_when_ready: bool,
}

impl<M: MediaElement> Player<M> {
    pub fn new() -> Self {
        Self {
            media: None,
            tracks: Vec::new(),
            current: 0,
            playing: false,
            duration: None,
            current_time: 0.0,
            scrubbing: false,
            scrub_preview: None,
            volume: 1.0,
            auto_advance: false,
            resume_when_ready: false,
        }
    }

    /// Whether to advance to the next track when the current one ends.
    ///
    /// Off by default: a track that ends naturally stops, and the next
    /// toggle starts it over.
    pub fn set_auto_advance(&mut self, on: bool) {
        self.auto_advance = on;
    }

    /// Mount the player over `tracks`, binding the first one to `media`.
    /// No-op when `tracks` is empty.
    pub fn mount(&mut self, mut media: M, tracks: Tracklist) {
        if tracks.is_empty() {
            return;
        }

        media.bind(&tracks[0].src);
        media.set_gain(self.volume);
        self.media = Some(media);
        self.tracks = tracks;
        self.current = 0;
        self.playing = false;
        self.duration = None;
        self.current_time = 0.0;
        self.scrubbing = false;
        self.scrub_preview = None;
        self.resume_when_ready = false;
    }

    pub fn mounted(&self) -> bool {
        self.media.is_some()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The active track, once mounted.
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Displayed position: the scrub preview while scrubbing, the synced
    /// media position otherwise.
    pub fn position(&self) -> f64 {
        if self.scrubbing {
            self.scrub_preview.unwrap_or(self.current_time)
        } else {
            self.current_time
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current,
            playing: self.playing,
            duration: self.duration,
            current_time: self.position(),
            scrubbing: self.scrubbing,
            scrub_preview: self.scrub_preview,
            volume: self.volume,
        }
    }

    /// Toggle between playing and paused.
    ///
    /// Resumes a suspended output context first. Playback only starts once
    /// the element has buffered enough; repeated invocations while it has
    /// not are no-ops, guarded by the `playing` flag rather than by
    /// disabling the control.
    pub fn toggle_play_pause(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };

        if media.suspended() {
            media.resume();
        }

        if self.playing {
            media.pause();
            self.playing = false;
        } else if media.ready() {
            media.play();
            self.playing = true;
        }
        self.resume_when_ready = false;
    }

    /// Map a 0-100 volume input onto the graph gain, applied immediately.
    pub fn set_volume(&mut self, volume: u8) {
        let gain = f32::from(volume.min(100)) / 100.0;
        self.volume = gain;
        if let Some(media) = self.media.as_mut() {
            media.set_gain(gain);
        }
    }

    /// Begin (or continue) a scrub drag at `value`.
    ///
    /// Only the displayed position changes; the underlying media position
    /// is untouched until commit.
    pub fn begin_scrub(&mut self, value: f64) {
        if self.media.is_none() {
            return;
        }
        self.scrubbing = true;
        self.scrub_preview = Some(value);
    }

    /// Commit a scrub: seek the media element and adopt the value.
    pub fn commit_scrub(&mut self, value: f64) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        self.scrubbing = false;
        self.scrub_preview = None;
        media.seek(value);
        self.current_time = value;
    }

    pub fn next_track(&mut self) {
        self.switch_track(1);
    }

    pub fn previous_track(&mut self) {
        self.switch_track(-1);
    }

    /// Advance the active track by `step` with wraparound, rebinding the
    /// element source. No-op for lists shorter than two; playback is left
    /// paused for the next toggle.
    fn switch_track(&mut self, step: isize) {
        if self.tracks.len() < 2 {
            return;
        }
        let Some(media) = self.media.as_mut() else {
            return;
        };

        let len = self.tracks.len() as isize;
        let next = (self.current as isize + step).rem_euclid(len) as usize;
        media.bind(&self.tracks[next].src);

        self.current = next;
        self.playing = false;
        self.duration = None;
        self.current_time = 0.0;
        self.scrubbing = false;
        self.scrub_preview = None;
        self.resume_when_ready = false;
    }

    /// Apply pending notifications from the media element: metadata
    /// readiness, the continuous position update and end-of-media. Called
    /// once per event-loop iteration; updates are applied in arrival order.
    pub fn tick(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };

        // Ready-state sync is the single source of truth for duration.
        if media.ready() {
            self.duration = Some(media.duration().unwrap_or(0.0).floor());
        }

        let ended = media.take_ended();
        if !ended && self.playing && !self.scrubbing {
            // Position updates are ignored while scrubbing to keep the
            // preview steady; playback itself continues underneath.
            self.current_time = media.position();
        }

        if ended {
            self.playing = false;
            if let Some(duration) = self.duration {
                self.current_time = duration;
            }
            if self.auto_advance && self.tracks.len() > 1 {
                self.switch_track(1);
                self.resume_when_ready = true;
            }
        }

        if self.resume_when_ready && !self.playing {
            let Some(media) = self.media.as_mut() else {
                return;
            };
            if media.ready() {
                if media.suspended() {
                    media.resume();
                }
                media.play();
                self.playing = true;
                self.resume_when_ready = false;
            }
        }
    }
}

impl<M: MediaElement> Default for Player<M> {
    fn default() -> Self {
        Self::new()
    }
}
