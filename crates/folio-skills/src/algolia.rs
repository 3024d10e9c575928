//! Algolia collaborator: one `POST /1/indexes/{index}/query` per fallback question.

use folio_core::{SearchBackend, SearchConfig, SearchError, SearchHit};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BACKEND_NAME: &str = "algolia";
const HEADER_APP_ID: &str = "X-Algolia-Application-Id";
const HEADER_API_KEY: &str = "X-Algolia-API-Key";
/// Error bodies are echoed into the user-facing answer; keep them short.
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    #[serde(rename = "hitsPerPage")]
    hits_per_page: u32,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    hits: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Parses a query response body. A hit without `content` contributes nothing;
/// a hit whose `content` is present but not a string (including `null`) is malformed.
fn hits_from_body(body: &str) -> Result<Vec<SearchHit>, SearchError> {
    let parsed: QueryResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    parsed
        .hits
        .into_iter()
        .map(|hit| match hit.get("content") {
            None => Ok(SearchHit::default()),
            Some(serde_json::Value::String(content)) => Ok(SearchHit::with_content(content.as_str())),
            Some(other) => Err(SearchError::Parse(format!(
                "hit content is not a string: {}",
                other
            ))),
        })
        .collect()
}

/// Queries a hosted Algolia index. Credentials are sent as-is; an empty or wrong
/// key surfaces as [`SearchError::Status`] from the service.
pub struct AlgoliaSearch {
    client: reqwest::Client,
    url: String,
    app_id: String,
    api_key: String,
}

impl AlgoliaSearch {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: config.query_url(),
            app_id: config.app_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Query endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl SearchBackend for AlgoliaSearch {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn search(&self, query: &str, hits_per_page: u32) -> Result<Vec<SearchHit>, SearchError> {
        let body = QueryRequest {
            query,
            hits_per_page,
        };
        tracing::debug!(target: "folio::search", url = %self.url, hits_per_page, "Querying Algolia");

        let response = self
            .client
            .post(&self.url)
            .header(HEADER_APP_ID, &self.app_id)
            .header(HEADER_API_KEY, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let hits = hits_from_body(&text)?;
        tracing::debug!(target: "folio::search", hits = hits.len(), "Algolia responded");
        Ok(hits)
    }
}
