//! Assembly of the resolution pipeline: query, extract, normalize.

use thiserror::Error;
use tracing::info;

use super::artwork::placeholder_artwork;
use super::identity::{IdentityLookup, resolve_creator};
use super::model::{Track, Tracklist};
use super::query::{IndexError, LedgerIndex};
use super::tags::first_tag_value;

/// Why a resolution produced no tracklist.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The index transport failed.
    #[error("could not reach the ledger index: {0}")]
    Network(#[from] IndexError),
    /// The query succeeded but matched no entry.
    #[error("no ledger entry matched the requested ids")]
    EmptyResult,
}

/// Resolve `ids` into an ordered tracklist.
///
/// Issues one batched index query and maps every returned entry into a
/// [`Track`], preserving the index's result order. Identity resolution
/// cannot fail an entry; only the query itself can fail the batch.
pub fn resolve_tracklist(
    gateway: &str,
    ids: &[String],
    content_types: &[String],
    index: &dyn LedgerIndex,
    lookup: &dyn IdentityLookup,
) -> Result<Tracklist, ResolveError> {
    let entries = index.query(ids, content_types)?;
    if entries.is_empty() {
        return Err(ResolveError::EmptyResult);
    }

    let gateway = gateway.trim_end_matches('/');
    let tracks: Tracklist = entries
        .into_iter()
        .map(|entry| {
            let name = first_tag_value(&entry.tags, "Title").map(str::to_string);
            let artwork_src = first_tag_value(&entry.tags, "Thumbnail")
                .filter(|thumb| !thumb.is_empty())
                .map(|thumb| format!("{gateway}/{thumb}"))
                .unwrap_or_else(|| placeholder_artwork(&entry.id));
            let creator = resolve_creator(lookup, &entry.owner.address);
            let src = format!("{gateway}/{}", entry.id);

            Track {
                id: entry.id,
                name,
                creator,
                src,
                artwork_src,
            }
        })
        .collect();

    info!(count = tracks.len(), "resolved tracklist");
    Ok(tracks)
}
