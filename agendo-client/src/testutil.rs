//! Shared helpers for client tests: a fake backend on an ephemeral port
//! and session fixtures.

use agendo_core::session::Session;
use axum::{Json, Router};
use serde_json::Value;
use tokio::task::JoinHandle;

pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve `app` on 127.0.0.1 with an OS-assigned port.
pub async fn spawn(app: Router) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}

/// A reply in the `{success, msg, data}` envelope.
pub fn enveloped(data: Value) -> Json<Value> {
    Json(serde_json::json!({"success": true, "data": data}))
}

pub fn make_session() -> Session {
    Session {
        id: 5,
        name: "Ana".into(),
        email: "ana@example.com".into(),
        token: "t1".into(),
        role: "REGULAR".into(),
        status: None,
        msg: None,
    }
}
