//! The stored authenticated identity.

use serde::{Deserialize, Serialize};

/// A logged-in user's identity and bearer token.
///
/// This is the record `POST auth/login` answers with and the session
/// store persists. The `status`/`msg` fields only appear on some backend
/// replies and are kept as-is when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Session {
    /// The single authentication predicate used everywhere: a session
    /// authenticates if and only if its token is non-empty.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
