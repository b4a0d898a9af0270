//! Transfer workflow subsystem.
//!
//! # Data Flow
//! ```text
//! session (account, form)
//!     → coordinator.rs (connect / detect / send sequencing)
//!         → wallet    (native transfer)
//!         → registry  (publication + confirmation)
//!         → store     (transaction record, user list reference)
//!     → session (loading transitions)
//! ```
//!
//! # Invariants
//! - At most one send in flight per session
//! - No transaction record is written before the publication confirms

pub mod amount;
pub mod coordinator;
pub mod types;

pub use amount::{parse_amount, ParsedAmount};
pub use coordinator::TransferCoordinator;
pub use types::WorkflowError;
