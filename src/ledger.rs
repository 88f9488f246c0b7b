//! Ledger metadata resolution.
//!
//! Tracks live as immutable transactions on a content-addressed ledger.
//! This module turns transaction ids into player-ready [`Track`] records:
//! it queries the gateway's GraphQL index, extracts semantic fields from
//! the entry tags, resolves the owner address to a display name and fills
//! in deterministic placeholder artwork where none was published.

mod artwork;
mod fetch;
mod identity;
mod model;
mod query;
mod resolve;
mod tags;

pub use artwork::placeholder_artwork;
pub use fetch::{ResolveOutcome, spawn_resolve};
pub use identity::{
    Account, HttpIdentityLookup, IdentityLookup, Profile, abbreviate_address, resolve_creator,
};
pub use model::{Track, Tracklist};
pub use query::{AUDIO_CONTENT_TYPES, GraphqlIndex, IndexError, LedgerEntry, LedgerIndex, Owner};
pub use resolve::{ResolveError, resolve_tracklist};
pub use tags::{Tag, first_tag_value};

#[cfg(test)]
mod tests;
