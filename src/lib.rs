//! Transfer Workflow Coordinator
//!
//! Orchestrates a native-currency transfer across three injected
//! collaborators: a wallet provider, an on-chain transfer registry, and a
//! document store. Owns an explicit, observable session (account, form,
//! loading flag) and runs connect/send as strict sequential async steps
//! with typed error results.

pub mod config;
pub mod observability;
pub mod registry;
pub mod session;
pub mod store;
pub mod wallet;
pub mod workflow;

pub use config::CoordinatorConfig;
pub use session::{FormField, Session, SessionState};
pub use workflow::{TransferCoordinator, WorkflowError};
