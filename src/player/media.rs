//! Media element boundary and the gateway-backed implementation.

use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use lofty::file::AudioFile;
use lofty::probe::Probe;
use rodio::{Decoder, Source};
use tracing::{debug, warn};

use super::graph::AudioGraph;

/// Host media-playback primitives consumed by the player controller.
///
/// Implementations must degrade safely: any operation on a source that is
/// not ready yet, or on a suspended output context, is a no-op.
pub trait MediaElement {
    /// Bind a new source URI, replacing the current one.
    fn bind(&mut self, src: &str);
    /// True once enough of the source is buffered to start playback.
    fn ready(&self) -> bool;
    /// True while the output context has not been resumed yet.
    fn suspended(&self) -> bool;
    /// Resume a suspended output context.
    fn resume(&mut self);
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek to an absolute position in seconds.
    fn seek(&mut self, position: f64);
    /// Current position in seconds.
    fn position(&self) -> f64;
    /// Total duration in seconds, once the source reports it.
    fn duration(&self) -> Option<f64>;
    /// Set the gain in `[0.0, 1.0]`.
    fn set_gain(&mut self, gain: f32);
    /// True exactly once after the bound source finished playing naturally.
    fn take_ended(&mut self) -> bool;
}

/// Byte fetch state shared with the download thread.
#[derive(Default)]
struct FetchSlot {
    bytes: Option<Vec<u8>>,
    duration: Option<f64>,
}

/// A media element whose source lives behind an HTTP gateway.
///
/// Binding starts a background download; the element becomes ready once the
/// bytes have arrived. Decoding happens on the persistent sink of the owned
/// [`AudioGraph`]; seeking rebuilds the decoder at the target offset.
pub struct GatewayElement {
    graph: AudioGraph,
    slot: Option<Arc<Mutex<FetchSlot>>>,
    // Committed offset plus wall time while playing.
    base: Duration,
    started_at: Option<Instant>,
    // A decoded source is currently queued on the sink.
    queued: bool,
}

impl GatewayElement {
    pub fn new() -> Self {
        Self {
            graph: AudioGraph::new(),
            slot: None,
            base: Duration::ZERO,
            started_at: None,
            queued: false,
        }
    }

    fn fetched_bytes(&self) -> Option<Vec<u8>> {
        let slot = self.slot.as_ref()?;
        slot.lock().ok()?.bytes.clone()
    }

    /// Decode the fetched bytes at the committed offset and queue them on
    /// the sink. No-op until both the bytes and the graph are available.
    fn queue_source(&mut self) {
        if self.queued {
            return;
        }
        let Some(bytes) = self.fetched_bytes() else {
            return;
        };
        let Some(sink) = self.graph.sink() else {
            return;
        };

        match Decoder::new(Cursor::new(bytes)) {
            Ok(decoder) => {
                // `skip_duration` is the seeking primitive; Duration::ZERO is fine.
                sink.append(decoder.skip_duration(self.base));
                self.queued = true;
            }
            Err(err) => warn!("failed to decode fetched audio: {err}"),
        }
    }
}

impl Default for GatewayElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for GatewayElement {
    fn bind(&mut self, src: &str) {
        if let Some(sink) = self.graph.sink() {
            sink.clear();
        }
        self.base = Duration::ZERO;
        self.started_at = None;
        self.queued = false;

        // Each bind gets a fresh slot; a download still running for a
        // previous bind fills its own slot and is never observed again.
        let slot = Arc::new(Mutex::new(FetchSlot::default()));
        self.slot = Some(slot.clone());
        let src = src.to_string();
        thread::spawn(move || fetch_into(&slot, &src));
    }

    fn ready(&self) -> bool {
        self.slot
            .as_ref()
            .and_then(|slot| slot.lock().ok().map(|state| state.bytes.is_some()))
            .unwrap_or(false)
    }

    fn suspended(&self) -> bool {
        self.graph.suspended()
    }

    fn resume(&mut self) {
        self.graph.resume();
    }

    fn play(&mut self) {
        if !self.ready() {
            return;
        }
        self.queue_source();
        if !self.queued {
            return;
        }
        if let Some(sink) = self.graph.sink() {
            sink.play();
        }
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.graph.sink() {
            sink.pause();
        }
        if let Some(started) = self.started_at.take() {
            self.base += started.elapsed();
        }
    }

    fn seek(&mut self, position: f64) {
        let was_playing = self.started_at.is_some();
        if let Some(sink) = self.graph.sink() {
            sink.clear();
        }
        self.queued = false;
        self.base = Duration::from_secs_f64(position.max(0.0));
        self.started_at = None;

        if was_playing {
            self.queue_source();
            if self.queued {
                if let Some(sink) = self.graph.sink() {
                    sink.play();
                }
                self.started_at = Some(Instant::now());
            }
        }
    }

    fn position(&self) -> f64 {
        let elapsed = self
            .started_at
            .map_or(Duration::ZERO, |started| started.elapsed());
        (self.base + elapsed).as_secs_f64()
    }

    fn duration(&self) -> Option<f64> {
        let slot = self.slot.as_ref()?;
        slot.lock().ok()?.duration
    }

    fn set_gain(&mut self, gain: f32) {
        self.graph.set_gain(gain);
    }

    fn take_ended(&mut self) -> bool {
        let drained = self.queued
            && self.started_at.is_some()
            && self.graph.sink().map(|sink| sink.empty()).unwrap_or(false);
        if !drained {
            return false;
        }

        // The next play starts the track over.
        self.base = Duration::ZERO;
        self.started_at = None;
        self.queued = false;
        true
    }
}

fn fetch_into(slot: &Arc<Mutex<FetchSlot>>, src: &str) {
    debug!(%src, "fetching media bytes");
    let bytes = match fetch_bytes(src) {
        Ok(bytes) => bytes,
        Err(err) => {
            // The element simply never becomes ready; controls stay no-ops.
            warn!("media fetch failed: {err}");
            return;
        }
    };

    let duration = probe_duration(&bytes);
    if let Ok(mut state) = slot.lock() {
        state.duration = duration;
        state.bytes = Some(bytes);
    }
}

fn fetch_bytes(src: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = reqwest::blocking::get(src)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

/// Probe the total duration of the fetched audio.
fn probe_duration(bytes: &[u8]) -> Option<f64> {
    let mut cursor = Cursor::new(bytes);
    let tagged = Probe::new(&mut cursor).guess_file_type().ok()?.read().ok()?;
    Some(tagged.properties().duration().as_secs_f64())
}
