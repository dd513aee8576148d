//! Wire shapes for the backend's REST API.
//!
//! Every resource endpoint wraps its payload in a `{success, msg, data}`
//! envelope. The auth endpoints are the exception: login answers with
//! the session object itself, registration with `{exito, msg}`.

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// The `{success, msg, data}` wrapper around resource responses.
///
/// `success` is decoded but not used for control flow: like the
/// frontends this backend was built for, the client keys on the HTTP
/// status and on `data` presence, which real deployments set more
/// consistently than the flag.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub msg: Option<String>,
    // No serde `default` here: it would put a `T: Default` bound on the
    // derive, and a missing field already decodes as `None`.
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Envelope for a body-less 2xx reply (some servers answer DELETE
    /// with `204 No Content`).
    pub fn empty() -> Self {
        ApiEnvelope {
            success: false,
            msg: None,
            data: None,
        }
    }
}

/// Body for `POST auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// What `POST auth/login` answers.
///
/// Every field is optional: on a rejected login the backend answers 200
/// with only `{status, msg}`, so a strict decode would confuse "wrong
/// password" with "malformed response".
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl LoginPayload {
    /// Convert to a session when the reply carries a usable token and an
    /// account id; `None` means the login was not accepted.
    pub fn into_session(self) -> Option<Session> {
        let token = self.token.filter(|t| !t.is_empty())?;
        Some(Session {
            id: self.id?,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            token,
            role: self.role.unwrap_or_default(),
            status: self.status,
            msg: self.msg,
        })
    }
}

/// Body for `POST usuario`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// What `POST usuario` answers. Success is decided solely by `exito`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterReply {
    #[serde(default)]
    pub exito: bool,
    #[serde(default)]
    pub msg: Option<String>,
}
