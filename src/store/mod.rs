//! Document store subsystem.
//!
//! # Data Flow
//! ```text
//! coordinator
//!     → recorder.rs (transfer + user documents)
//!     → client.rs (DocumentStore seam)
//!     → http.rs (mutation batches over HTTP)
//!       memory.rs (in-process backend for tests/offline)
//! ```
//!
//! # Design Decisions
//! - Upserts are create-if-absent; replays never overwrite documents
//! - The transaction-list append is blind; replays duplicate entries
//! - No compensating rollback between the two record writes

pub mod client;
pub mod http;
pub mod memory;
pub mod recorder;
pub mod types;

pub use client::DocumentStore;
pub use http::HttpDocumentStore;
pub use memory::MemoryDocumentStore;
pub use recorder::TransferRecorder;
pub use types::{ReferenceEntry, StoreError, TransactionRecord, UserRecord};
