//! `reqwest` client for the Neo4j transactional HTTP endpoint.

use std::sync::Arc;

use crate::config::{MAX_ERROR_BODY_LENGTH, NEO_COMMIT_PATH};
use crate::error_handling::StoreError;
use crate::storage::client::StoreClient;

use super::types::{CommitRequest, CommitResponse, CypherQuery};

/// Executes Cypher batches against Neo4j.
///
/// Each batch is sent as a single `transaction/commit` request, so Neo4j
/// applies all statements in one transaction or none of them.
#[derive(Clone)]
pub struct NeoStoreClient {
    client: Arc<reqwest::Client>,
    commit_url: String,
}

impl NeoStoreClient {
    /// Creates a client for the Neo4j REST root, e.g. `http://localhost:7474/db/data`.
    pub fn new(client: Arc<reqwest::Client>, neo_url: &str) -> Self {
        let commit_url = format!("{}/{}", neo_url.trim_end_matches('/'), NEO_COMMIT_PATH);
        NeoStoreClient { client, commit_url }
    }

    pub fn commit_url(&self) -> &str {
        &self.commit_url
    }

    /// Runs `statements` in order inside one transaction.
    pub async fn commit(&self, statements: &[CypherQuery]) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.commit_url)
            .header(reqwest::header::ACCEPT, "application/json; charset=UTF-8")
            .json(&CommitRequest { statements })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: truncate(&body),
            });
        }

        let parsed: CommitResponse =
            serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))?;

        if let Some(first) = parsed.errors.into_iter().next() {
            return Err(StoreError::Cypher {
                code: first.code,
                message: first.message,
            });
        }

        Ok(())
    }

    /// Creates a schema index for every `(label, property)` pair.
    ///
    /// Schema changes cannot share a transaction with each other in older
    /// Neo4j versions, so each index is committed on its own.
    pub async fn ensure_indexes(&self, indexes: &[(&str, &str)]) -> Result<(), StoreError> {
        for (label, property) in indexes {
            let query = CypherQuery::new(format!("CREATE INDEX ON :{}({})", label, property));
            self.commit(std::slice::from_ref(&query)).await?;
            log::info!("Ensured index on :{}({})", label, property);
        }
        Ok(())
    }
}

impl StoreClient for NeoStoreClient {
    type Operation = CypherQuery;

    async fn execute_batch(&mut self, ops: Vec<CypherQuery>) -> Result<(), StoreError> {
        self.commit(&ops).await
    }
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let kept: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
    format!("{}... (truncated)", kept)
}
