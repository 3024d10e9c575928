//! Seam between the router and the hosted search index.

use serde::{Deserialize, Serialize};

/// One result record from the collaborator. Only `content` is used; other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SearchHit {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

/// Why a collaborator call could not be completed or understood.
///
/// The router reports every variant to the user the same way; the split exists
/// for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Request could not be sent or no response arrived in time.
    #[error("{0}")]
    Transport(String),
    /// Collaborator answered with a non-2xx status.
    #[error("search service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body was not the expected JSON shape.
    #[error("malformed search response: {0}")]
    Parse(String),
}

/// Trait implemented by search collaborators (Algolia in production, stubs in tests).
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    /// Backend name for logs and `/health`.
    fn name(&self) -> &str;

    /// Returns up to `hits_per_page` hits for `query`, in the collaborator's order.
    async fn search(&self, query: &str, hits_per_page: u32) -> Result<Vec<SearchHit>, SearchError>;
}
