//! Client for the agendo backend.
//!
//! This crate provides everything a frontend needs to talk to the
//! backend:
//! - `store` for the on-disk session file
//! - `http` for the authenticated transport
//! - `auth` for login, registration and logout
//! - `resource` for the generic CRUD client over events, notes and tasks
//! - `guard` for navigation decisions based on the stored session

pub mod auth;
pub mod guard;
pub mod http;
pub mod resource;
pub mod store;

#[cfg(test)]
mod testutil;

// Re-export the working set at crate root for convenience
pub use auth::{Auth, AuthOutcome};
pub use guard::{GuardDecision, PathKind};
pub use http::Transport;
pub use resource::{EventsClient, NotesClient, ResourceClient, TasksClient};
pub use store::SessionStore;
