//! Audio output graph backed by rodio.

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::warn;

/// The processing graph behind one mounted player: an output stream
/// (device destination) and a single sink acting as the gain stage the
/// bound source plays through.
///
/// The graph starts suspended and is acquired at most once; track switches
/// swap the source queued on the sink, never the nodes. The output device
/// is not opened until the first user toggle resumes the graph.
pub struct AudioGraph {
    nodes: Option<GraphNodes>,
    gain: f32,
}

struct GraphNodes {
    // Held for its lifetime: dropping the stream closes the output device.
    _stream: OutputStream,
    sink: Sink,
}

impl AudioGraph {
    pub fn new() -> Self {
        Self {
            nodes: None,
            gain: 1.0,
        }
    }

    /// True while the output device has not been opened yet.
    pub fn suspended(&self) -> bool {
        self.nodes.is_none()
    }

    /// Open the output device and connect the sink, at most once.
    ///
    /// A failed open leaves the graph suspended; the next resume retries.
    pub fn resume(&mut self) {
        if self.nodes.is_some() {
            return;
        }

        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(err) => {
                warn!("no audio output device: {err}");
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(self.gain);
        sink.pause();

        self.nodes = Some(GraphNodes {
            _stream: stream,
            sink,
        });
    }

    /// Set the gain applied to whatever source is bound, in `[0.0, 1.0]`.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
        if let Some(nodes) = &self.nodes {
            nodes.sink.set_volume(gain);
        }
    }

    /// The sink sources play through, once the graph is live.
    pub fn sink(&self) -> Option<&Sink> {
        self.nodes.as_ref().map(|nodes| &nodes.sink)
    }
}

impl Default for AudioGraph {
    fn default() -> Self {
        Self::new()
    }
}
