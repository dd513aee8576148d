//! Login, registration and logout against the backend's auth endpoints.
//!
//! Neither `login` nor `register` returns `Err`: callers get an
//! [`AuthOutcome`] and render its message, so UI code needs no error
//! handling of its own.

use agendo_core::error::{AgendoError, AgendoResult};
use agendo_core::protocol::{LoginPayload, LoginRequest, RegisterReply, RegisterRequest};
use reqwest::Method;

use crate::http::Transport;
use crate::store::SessionStore;

/// The backend's canonical copy for a rejected login, regardless of the
/// rejection's cause.
pub const INVALID_CREDENTIALS: &str = "Credenciales incorrectas";

/// Role assigned to self-registered accounts.
const DEFAULT_ROLE: &str = "REGULAR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted,
    Rejected { msg: String },
}

impl AuthOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AuthOutcome::Accepted)
    }
}

pub struct Auth<'a> {
    transport: &'a Transport,
    store: &'a SessionStore,
}

impl<'a> Auth<'a> {
    pub fn new(transport: &'a Transport, store: &'a SessionStore) -> Self {
        Auth { transport, store }
    }

    /// POST `auth/login`. An accepted login answers with the session
    /// object itself; it is persisted before `Accepted` is returned.
    ///
    /// Any reply from a reachable server that does not carry a usable
    /// token is a rejection with [`INVALID_CREDENTIALS`]; only a
    /// connectivity failure surfaces its own message.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let body = match serde_json::to_value(LoginRequest { email, password }) {
            Ok(body) => body,
            Err(e) => return AuthOutcome::Rejected { msg: e.to_string() },
        };

        let reply = self
            .transport
            .send_raw::<LoginPayload>(Method::POST, "auth/login", None, Some(&body))
            .await;

        match reply {
            Ok(payload) => match payload.into_session() {
                Some(session) => match self.store.save(&session) {
                    Ok(()) => AuthOutcome::Accepted,
                    Err(e) => AuthOutcome::Rejected {
                        msg: format!("Login succeeded but the session could not be stored: {e}"),
                    },
                },
                None => AuthOutcome::Rejected {
                    msg: INVALID_CREDENTIALS.into(),
                },
            },
            Err(AgendoError::RequestFailed {
                status: None,
                message,
            }) => AuthOutcome::Rejected { msg: message },
            Err(_) => AuthOutcome::Rejected {
                msg: INVALID_CREDENTIALS.into(),
            },
        }
    }

    /// POST `usuario` with the fixed `REGULAR` role. Acceptance is
    /// decided solely by the reply's `exito` flag; the session store is
    /// never touched.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthOutcome {
        let request = RegisterRequest {
            name,
            email,
            password,
            role: DEFAULT_ROLE,
        };
        let body = match serde_json::to_value(request) {
            Ok(body) => body,
            Err(e) => return AuthOutcome::Rejected { msg: e.to_string() },
        };

        let reply = self
            .transport
            .send_raw::<RegisterReply>(Method::POST, "usuario", None, Some(&body))
            .await;

        match reply {
            Ok(reply) if reply.exito => AuthOutcome::Accepted,
            Ok(reply) => AuthOutcome::Rejected {
                msg: reply
                    .msg
                    .unwrap_or_else(|| "Registration was not accepted".into()),
            },
            Err(AgendoError::RequestFailed { message, .. }) => {
                AuthOutcome::Rejected { msg: message }
            }
            Err(e) => AuthOutcome::Rejected { msg: e.to_string() },
        }
    }

    /// Forget the stored session. Logging out while logged out is fine.
    pub fn logout(&self) -> AgendoResult<()> {
        self.store.clear()
    }
}
