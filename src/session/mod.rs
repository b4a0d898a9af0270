//! Page-session state subsystem.
//!
//! # Data Flow
//! ```text
//! coordinator (account, loading) ─┐
//! input surface (form fields) ────┼─▶ Session (watch channel)
//!                                 │        │
//!                                 │        ▼
//!                                 └── subscribers (UI layers, loggers)
//! ```
//!
//! # Design Decisions
//! - Explicit state struct instead of ambient framework state
//! - Writers are restricted: only the coordinator touches account/loading
//! - At-most-one concurrent send, enforced by the session's send slot

pub mod state;

pub use state::{FormField, FormState, Session, SessionState};
