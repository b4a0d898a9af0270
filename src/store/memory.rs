//! In-process document store.
//!
//! Same semantics as the HTTP backend over a concurrent map: idempotent
//! create-if-absent upserts and a blind list append. Used by tests and
//! offline runs.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};

use crate::store::client::DocumentStore;
use crate::store::types::{ReferenceEntry, StoreError, StoreResult, TransactionRecord, UserRecord};

/// Concurrent in-memory document store.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    docs: DashMap<String, Value>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a document by id.
    pub fn document(&self, id: &str) -> Option<Value> {
        self.docs.get(id).map(|r| r.value().clone())
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn create_if_absent(&self, id: String, doc: Value) {
        self.docs.entry(id).or_insert(doc);
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn upsert_user(&self, user: UserRecord) -> StoreResult<()> {
        let doc = serde_json::to_value(&user).map_err(|e| StoreError::Write(e.to_string()))?;
        self.create_if_absent(user.address, doc);
        Ok(())
    }

    async fn upsert_transaction(&self, record: TransactionRecord) -> StoreResult<()> {
        let doc = serde_json::to_value(&record).map_err(|e| StoreError::Write(e.to_string()))?;
        self.create_if_absent(record.tx_hash, doc);
        Ok(())
    }

    async fn append_transaction_ref(
        &self,
        user_address: &str,
        entry: ReferenceEntry,
    ) -> StoreResult<()> {
        let mut doc = self
            .docs
            .get_mut(user_address)
            .ok_or_else(|| StoreError::Write(format!("no document with id {}", user_address)))?;

        let list = doc
            .as_object_mut()
            .ok_or_else(|| StoreError::Write("document is not an object".to_string()))?
            .entry("transactions")
            .or_insert_with(|| json!([]));

        list.as_array_mut()
            .ok_or_else(|| StoreError::Write("transactions field is not a list".to_string()))?
            .push(json!({ "_key": entry.key, "_ref": entry.reference }));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(address: &str) -> UserRecord {
        UserRecord {
            address: address.to_string(),
            user_name: "Unnamed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_is_create_if_absent() {
        let store = MemoryDocumentStore::new();
        store.upsert_user(user("0xA")).await.unwrap();

        // Second upsert with a different display name must not overwrite.
        store
            .upsert_user(UserRecord {
                address: "0xA".to_string(),
                user_name: "Renamed".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.document("0xA").unwrap()["userName"], "Unnamed");
    }

    #[tokio::test]
    async fn test_append_creates_list_then_appends_blindly() {
        let store = MemoryDocumentStore::new();
        store.upsert_user(user("0xA")).await.unwrap();

        let entry = ReferenceEntry {
            key: "0xhash".to_string(),
            reference: "0xhash".to_string(),
        };
        store.append_transaction_ref("0xA", entry.clone()).await.unwrap();
        store.append_transaction_ref("0xA", entry).await.unwrap();

        let doc = store.document("0xA").unwrap();
        let list = doc["transactions"].as_array().unwrap();
        // No dedup: the same hash appended twice shows up twice.
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_append_to_missing_document_fails() {
        let store = MemoryDocumentStore::new();
        let err = store
            .append_transaction_ref(
                "0xMissing",
                ReferenceEntry {
                    key: "k".to_string(),
                    reference: "k".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
    }
}
