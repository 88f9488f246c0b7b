//! Query boundary to the remote ledger-indexing service.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::tags::Tag;

/// Default `Content-Type` filter for playable entries.
pub const AUDIO_CONTENT_TYPES: [&str; 3] = ["audio/mpeg", "audio/wav", "audio/aac"];

/// One matched transaction as returned by the index.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub owner: Owner,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub address: String,
}

/// Transport-level failures of the index query.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("ledger index request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("ledger index returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Ledger index: find transactions by id and tag filter.
///
/// Result order is whatever the index returns; implementations must not
/// reorder, and callers must not assume it matches the input id order.
pub trait LedgerIndex {
    fn query(
        &self,
        ids: &[String],
        content_types: &[String],
    ) -> Result<Vec<LedgerEntry>, IndexError>;
}

const TRANSACTIONS_QUERY: &str = "\
query($ids: [ID!], $tags: [TagFilter!]) {
  transactions(ids: $ids, tags: $tags) {
    edges {
      node {
        id
        owner { address }
        tags { name value }
      }
    }
  }
}";

#[derive(Deserialize)]
struct QueryResponse {
    data: TransactionsData,
}

#[derive(Deserialize)]
struct TransactionsData {
    transactions: Connection,
}

#[derive(Deserialize)]
struct Connection {
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct Edge {
    node: LedgerEntry,
}

/// GraphQL index exposed by a ledger gateway at `{gateway}/graphql`.
pub struct GraphqlIndex {
    gateway: String,
    client: reqwest::blocking::Client,
}

impl GraphqlIndex {
    pub fn new(gateway: impl Into<String>) -> Self {
        Self {
            gateway: gateway.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl LedgerIndex for GraphqlIndex {
    fn query(
        &self,
        ids: &[String],
        content_types: &[String],
    ) -> Result<Vec<LedgerEntry>, IndexError> {
        let url = format!("{}/graphql", self.gateway.trim_end_matches('/'));
        let body = serde_json::json!({
            "query": TRANSACTIONS_QUERY,
            "variables": {
                "ids": ids,
                "tags": [{ "name": "Content-Type", "values": content_types }],
            },
        });

        debug!(%url, ids = ids.len(), "querying ledger index");
        let response = self.client.post(&url).json(&body).send()?;
        if !response.status().is_success() {
            return Err(IndexError::Status(response.status()));
        }

        let parsed: QueryResponse = response.json()?;
        Ok(parsed
            .data
            .transactions
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect())
    }
}
