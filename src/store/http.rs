//! HTTP document store client.
//!
//! Talks to the store's mutation endpoint: every operation is a JSON batch
//! of `createIfNotExists` / `patch` mutations scoped to a dataset.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::StoreConfig;
use crate::store::client::DocumentStore;
use crate::store::types::{ReferenceEntry, StoreError, StoreResult, TransactionRecord, UserRecord};

/// Document store client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: reqwest::Client,
    mutate_url: String,
    token: Option<String>,
}

impl HttpDocumentStore {
    /// Build a client from configuration, reading the API token from the
    /// configured environment variable if one is named.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let token = match &config.token_env_var {
            Some(var) => Some(std::env::var(var).map_err(|_| {
                StoreError::Transport(format!("Environment variable {} not set", var))
            })?),
            None => None,
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            mutate_url: format!(
                "{}/data/mutate/{}",
                config.endpoint.trim_end_matches('/'),
                config.dataset
            ),
            token,
        })
    }

    async fn mutate(&self, mutations: Value) -> StoreResult<()> {
        let mut request = self
            .client
            .post(&self.mutate_url)
            .json(&json!({ "mutations": mutations }));

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Write(format!("{}: {}", status, body)));
        }

        Ok(())
    }

    fn document(id: &str, doc_type: &str, body: Value) -> Value {
        let mut doc = body;
        doc["_id"] = json!(id);
        doc["_type"] = json!(doc_type);
        doc
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn upsert_user(&self, user: UserRecord) -> StoreResult<()> {
        let id = user.address.clone();
        let body = serde_json::to_value(&user).map_err(|e| StoreError::Write(e.to_string()))?;
        self.mutate(json!([
            { "createIfNotExists": Self::document(&id, "users", body) }
        ]))
        .await
    }

    async fn upsert_transaction(&self, record: TransactionRecord) -> StoreResult<()> {
        let id = record.tx_hash.clone();
        let body = serde_json::to_value(&record).map_err(|e| StoreError::Write(e.to_string()))?;
        self.mutate(json!([
            { "createIfNotExists": Self::document(&id, "transactions", body) }
        ]))
        .await
    }

    async fn append_transaction_ref(
        &self,
        user_address: &str,
        entry: ReferenceEntry,
    ) -> StoreResult<()> {
        self.mutate(json!([
            {
                "patch": {
                    "id": user_address,
                    "setIfMissing": { "transactions": [] },
                    "insert": {
                        "after": "transactions[-1]",
                        "items": [
                            { "_key": entry.key, "_ref": entry.reference, "_type": "reference" }
                        ]
                    }
                }
            }
        ]))
        .await
    }
}
