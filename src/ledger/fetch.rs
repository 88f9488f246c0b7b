//! Background resolution with mount liveness.
//!
//! Resolution runs once per mount on a worker thread and reports back over
//! a channel. There is no retry and no cancellation of an in-flight query;
//! instead each outcome carries the mount generation that requested it, and
//! the event loop drops outcomes whose generation no longer matches.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tracing::warn;

use super::identity::HttpIdentityLookup;
use super::model::Tracklist;
use super::query::GraphqlIndex;
use super::resolve::{ResolveError, resolve_tracklist};

/// Result of one background resolution, tagged with its mount generation.
#[derive(Debug)]
pub struct ResolveOutcome {
    pub generation: u64,
    pub result: Result<Tracklist, ResolveError>,
}

/// Spawn the resolution worker for one mount.
///
/// The receiver side must check `generation` before applying the outcome.
pub fn spawn_resolve(
    gateway: String,
    identity_endpoint: String,
    ids: Vec<String>,
    content_types: Vec<String>,
    generation: u64,
    tx: Sender<ResolveOutcome>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let index = GraphqlIndex::new(gateway.clone());
        let lookup = HttpIdentityLookup::new(identity_endpoint);
        let result = resolve_tracklist(&gateway, &ids, &content_types, &index, &lookup);

        if let Err(err) = &result {
            warn!("resolution failed: {err}");
        }

        // The receiver may be gone if the app already exited.
        let _ = tx.send(ResolveOutcome { generation, result });
    })
}
