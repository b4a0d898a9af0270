//! Transfer registry subsystem.
//!
//! # Data Flow
//! ```text
//! coordinator
//!     → proxy.rs (TransferRegistry / PendingPublication seams)
//!     → contract.rs (calldata encoding, receipt polling)
//!     → JSON-RPC endpoint
//! ```

pub mod contract;
pub mod proxy;

pub use contract::AlloyRegistry;
pub use proxy::{PendingPublication, Publication, RegistryError, TransferRegistry};
