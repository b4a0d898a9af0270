//! Document store seam.

use async_trait::async_trait;

use crate::store::types::{ReferenceEntry, StoreResult, TransactionRecord, UserRecord};

/// The external document store collaborator.
///
/// Upserts are create-if-absent: an existing document with the same key is
/// left untouched. The list append is blind; callers replaying the same
/// reference get a duplicate entry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create the user document if no document with its address exists.
    async fn upsert_user(&self, user: UserRecord) -> StoreResult<()>;

    /// Create the transaction document if no document with its hash exists.
    async fn upsert_transaction(&self, record: TransactionRecord) -> StoreResult<()>;

    /// Append a reference entry to the user's transaction list, creating
    /// the list if absent.
    async fn append_transaction_ref(
        &self,
        user_address: &str,
        entry: ReferenceEntry,
    ) -> StoreResult<()>;
}
