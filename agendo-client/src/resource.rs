//! Generic CRUD client over the backend's resource endpoints.
//!
//! Events, notes and tasks share one wire shape (`{success, msg, data}`
//! envelopes under `/{segment}` and `/{segment}/{id}`), so a single
//! implementation parameterized by [`Resource`] serves all three.

use std::sync::{Mutex, MutexGuard};

use agendo_core::error::{AgendoError, AgendoResult};
use agendo_core::event::Event;
use agendo_core::note::Note;
use agendo_core::protocol::ApiEnvelope;
use agendo_core::resource::Resource;
use agendo_core::session::Session;
use agendo_core::task::Task;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::Transport;
use crate::store::SessionStore;

/// Serialize a draft or patch and attach the account id under `userId`,
/// the ownership field the backend expects in every mutating body.
fn attach_user_id<B: Serialize>(body: &B, user_id: i64) -> AgendoResult<Value> {
    let mut value =
        serde_json::to_value(body).map_err(|e| AgendoError::Serialization(e.to_string()))?;

    match value.as_object_mut() {
        Some(map) => {
            map.insert("userId".to_string(), Value::from(user_id));
            Ok(value)
        }
        None => Err(AgendoError::Serialization(
            "request body is not a JSON object".into(),
        )),
    }
}

/// Authenticated client for one resource type, holding a local mirror of
/// the server-side collection.
///
/// The mirror changes only after the server has confirmed an operation,
/// and then reflects exactly what the server returned: `list` replaces
/// it wholesale, `create` appends, `update` replaces the matching entry,
/// `delete` removes it. A failed call leaves the mirror as it was.
///
/// The session is read from the store on every call, so a login or
/// logout elsewhere in the process takes effect immediately.
pub struct ResourceClient<R: Resource> {
    transport: Transport,
    store: SessionStore,
    cache: Mutex<Vec<R>>,
}

pub type EventsClient = ResourceClient<Event>;
pub type NotesClient = ResourceClient<Note>;
pub type TasksClient = ResourceClient<Task>;

impl<R: Resource> ResourceClient<R> {
    pub fn new(transport: Transport, store: SessionStore) -> Self {
        ResourceClient {
            transport,
            store,
            cache: Mutex::new(Vec::new()),
        }
    }

    fn cache_lock(&self) -> MutexGuard<'_, Vec<R>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Session with a non-empty token, or `Unauthenticated`. Called
    /// before any request is issued.
    fn active_session(&self) -> AgendoResult<Session> {
        match self.store.load()? {
            Some(session) if session.is_authenticated() => Ok(session),
            _ => Err(AgendoError::Unauthenticated),
        }
    }

    /// Send one authenticated request. A 401 means the stored token is
    /// no longer honored, so the session file is cleared before the
    /// error propagates; later calls then fail `Unauthenticated` without
    /// touching the network.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        session: &Session,
        body: Option<&Value>,
    ) -> AgendoResult<ApiEnvelope<T>> {
        let result = self
            .transport
            .send(method, path, Some(&session.token), body)
            .await;

        if let Err(e) = &result {
            if e.is_auth_rejection() {
                log::warn!(
                    "{} request rejected as unauthenticated, clearing stored session",
                    R::LABEL
                );
                if let Err(clear_err) = self.store.clear() {
                    log::warn!("could not clear stored session: {clear_err}");
                }
            }
        }

        result
    }

    /// GET `/{segment}`. On success the mirror is replaced with the
    /// returned collection; an envelope without `data` means an empty
    /// collection.
    pub async fn list(&self) -> AgendoResult<Vec<R>> {
        let session = self.active_session()?;

        let envelope: ApiEnvelope<Vec<R>> = self
            .request(Method::GET, R::SEGMENT, &session, None)
            .await?;
        let items = envelope.data.unwrap_or_default();

        *self.cache_lock() = items.clone();
        Ok(items)
    }

    /// POST `/{segment}` with the draft plus the session's `userId`. The
    /// confirmed entity is appended to the mirror and returned.
    pub async fn create(&self, draft: &R::Draft) -> AgendoResult<R> {
        let session = self.active_session()?;
        let body = attach_user_id(draft, session.id)?;

        let envelope: ApiEnvelope<R> = self
            .request(Method::POST, R::SEGMENT, &session, Some(&body))
            .await?;
        let created = envelope.data.ok_or(AgendoError::CreationFailed(R::LABEL))?;

        self.cache_lock().push(created.clone());
        Ok(created)
    }

    /// PUT `/{segment}/{id}` with the patch plus `userId`. The confirmed
    /// entity replaces the mirror entry with the same id; an id the
    /// mirror does not hold leaves it unchanged.
    pub async fn update(&self, id: i64, patch: &R::Patch) -> AgendoResult<R> {
        let session = self.active_session()?;
        let body = attach_user_id(patch, session.id)?;
        let path = format!("{}/{}", R::SEGMENT, id);

        let envelope: ApiEnvelope<R> = self
            .request(Method::PUT, &path, &session, Some(&body))
            .await?;
        let updated = envelope.data.ok_or(AgendoError::UpdateFailed(R::LABEL))?;

        let mut cache = self.cache_lock();
        if let Some(slot) = cache.iter_mut().find(|item| item.id() == updated.id()) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// DELETE `/{segment}/{id}`. The server confirms with the deleted
    /// entity; the mirror entry with that id is removed.
    pub async fn delete(&self, id: i64) -> AgendoResult<R> {
        let session = self.active_session()?;
        let path = format!("{}/{}", R::SEGMENT, id);

        let envelope: ApiEnvelope<R> = self
            .request(Method::DELETE, &path, &session, None)
            .await?;
        let deleted = envelope.data.ok_or(AgendoError::DeletionFailed(R::LABEL))?;

        self.cache_lock().retain(|item| item.id() != id);
        Ok(deleted)
    }

    /// Snapshot of the mirror, for rendering without a round trip.
    pub fn cached(&self) -> Vec<R> {
        self.cache_lock().clone()
    }
}
