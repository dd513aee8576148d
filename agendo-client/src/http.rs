//! HTTP transport for the agendo backend.

use agendo_core::config::Config;
use agendo_core::error::{AgendoError, AgendoResult};
use agendo_core::protocol::ApiEnvelope;
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Error bodies carry the human-readable reason under `msg`, whether or
/// not the rest of the envelope is present.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
}

/// Thin wrapper around `reqwest::Client` that knows the backend's base
/// URL and error conventions. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub fn new(config: &Config) -> Self {
        Transport {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Issue a request and return the response body on 2xx.
    ///
    /// Failures never panic: connection problems become
    /// `RequestFailed { status: None }`, non-2xx responses become
    /// `RequestFailed { status: Some(code) }` carrying the server's `msg`
    /// when the error body supplies one.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> AgendoResult<String> {
        let url = self.url(path);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log::debug!("{method} {url} -> unreachable: {e}");
            AgendoError::RequestFailed {
                status: None,
                message: format!("Failed to reach {url}: {e}"),
            }
        })?;

        let status = response.status();
        log::debug!("{method} {url} -> {status}");

        let text = response
            .text()
            .await
            .map_err(|e| AgendoError::RequestFailed {
                status: Some(status.as_u16()),
                message: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.msg)
                .unwrap_or_else(|| format!("Request failed with status {status}"));

            return Err(AgendoError::RequestFailed {
                status: Some(status.as_u16()),
                message,
            });
        }

        Ok(text)
    }

    /// Request whose response body is the `{success, msg, data}`
    /// envelope, which is every resource endpoint. A body-less 2xx is
    /// treated as an envelope with no data.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> AgendoResult<ApiEnvelope<T>> {
        let text = self.dispatch(method, path, token, body).await?;

        if text.trim().is_empty() {
            return Ok(ApiEnvelope::empty());
        }

        serde_json::from_str(&text)
            .map_err(|e| AgendoError::Decode(format!("Unexpected response from {path}: {e}")))
    }

    /// Request whose response body is the payload itself, which is the
    /// two auth endpoints.
    pub async fn send_raw<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> AgendoResult<T> {
        let text = self.dispatch(method, path, token, body).await?;

        serde_json::from_str(&text)
            .map_err(|e| AgendoError::Decode(format!("Unexpected response from {path}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;
    use agendo_core::task::Task;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    fn make_transport(base_url: &str) -> Transport {
        Transport::new(&Config::new(base_url).unwrap())
    }

    #[test]
    fn test_url_join_uses_a_single_slash() {
        let transport = make_transport("http://localhost:4000");

        assert_eq!(transport.url("tasks"), "http://localhost:4000/tasks");
        assert_eq!(transport.url("/tasks"), "http://localhost:4000/tasks");
    }

    #[tokio::test]
    async fn test_bearer_header_is_attached_when_token_given() {
        let seen = Arc::new(Mutex::new(None::<String>));
        let recorded = seen.clone();

        let app = Router::new().route(
            "/tasks",
            get(move |headers: HeaderMap| {
                let recorded = recorded.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *recorded.lock().unwrap() = auth;
                    Json(serde_json::json!({"success": true, "data": []}))
                }
            }),
        );
        let server = testutil::spawn(app).await;
        let transport = make_transport(&server.base_url);

        transport
            .send::<Vec<Task>>(Method::GET, "tasks", Some("t1"), None)
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().as_deref(), Some("Bearer t1"));
    }

    #[tokio::test]
    async fn test_error_body_msg_wins_over_status_line() {
        let app = Router::new().route(
            "/tasks",
            get(|| async {
                (
                    axum::http::StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"success": false, "msg": "correo en uso"})),
                )
            }),
        );
        let server = testutil::spawn(app).await;
        let transport = make_transport(&server.base_url);

        let err = transport
            .send::<Vec<Task>>(Method::GET, "tasks", None, None)
            .await
            .unwrap_err();

        match err {
            AgendoError::RequestFailed { status, message } => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "correo en uso");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_msg_falls_back_to_status() {
        let app = Router::new().route(
            "/tasks",
            get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let server = testutil::spawn(app).await;
        let transport = make_transport(&server.base_url);

        let err = transport
            .send::<Vec<Task>>(Method::GET, "tasks", None, None)
            .await
            .unwrap_err();

        match err {
            AgendoError::RequestFailed { status, message } => {
                assert_eq!(status, Some(500));
                assert!(message.contains("500"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_success_body_is_an_empty_envelope() {
        let app = Router::new().route("/tasks/1", axum::routing::delete(|| async { "" }));
        let server = testutil::spawn(app).await;
        let transport = make_transport(&server.base_url);

        let envelope = transport
            .send::<Task>(Method::DELETE, "tasks/1", Some("t1"), None)
            .await
            .unwrap();

        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_a_decode_error() {
        // What a misconfigured proxy answers: 200 with an HTML body.
        let app = Router::new().route("/tasks", get(|| async { "<html>proxy error</html>" }));
        let server = testutil::spawn(app).await;
        let transport = make_transport(&server.base_url);

        let err = transport
            .send::<Vec<Task>>(Method::GET, "tasks", Some("t1"), None)
            .await
            .unwrap_err();

        match err {
            AgendoError::Decode(msg) => assert!(msg.contains("tasks")),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = transport
            .send_raw::<Task>(Method::GET, "tasks", Some("t1"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AgendoError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_has_no_status() {
        // Port 9 (discard) is a safe "nothing listens here" target.
        let transport = make_transport("http://127.0.0.1:9");

        let err = transport
            .send::<Vec<Task>>(Method::GET, "tasks", None, None)
            .await
            .unwrap_err();

        match err {
            AgendoError::RequestFailed { status, .. } => assert_eq!(status, None),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
