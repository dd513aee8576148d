//! Core types for the agendo ecosystem.
//!
//! This crate provides the shared vocabulary used by the agendo CLI and
//! by any frontend embedding the client:
//! - entity types (`Event`, `Note`, `Task`) with their draft/patch forms
//! - the `Resource` trait that parameterizes the generic resource client
//! - `protocol` wire shapes for the backend's REST API
//! - `Session`, the stored authenticated identity
//! - error and configuration types

pub mod config;
pub mod error;
pub mod event;
pub mod note;
pub mod protocol;
pub mod resource;
pub mod session;
pub mod task;

pub use config::Config;
pub use error::{AgendoError, AgendoResult};
pub use event::{Event, EventPatch, NewEvent};
pub use note::{NewNote, Note, NotePatch};
pub use resource::Resource;
pub use session::Session;
pub use task::{NewTask, Task, TaskPatch};
