pub mod auth;
pub mod config;
pub mod events;
pub mod notes;
pub mod tasks;

use agendo_client::{
    Auth, EventsClient, NotesClient, ResourceClient, SessionStore, TasksClient, Transport,
};
use agendo_core::config::Config;
use anyhow::Result;

/// Connection context for commands that talk to the backend: resolved
/// base URL plus the session store.
pub struct Backend {
    pub transport: Transport,
    pub store: SessionStore,
}

pub fn backend() -> Result<Backend> {
    let config = Config::resolve()?;
    log::debug!("using backend at {}", config.base_url);

    Ok(Backend {
        transport: Transport::new(&config),
        store: SessionStore::open_default()?,
    })
}

impl Backend {
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.transport, &self.store)
    }

    pub fn events(&self) -> EventsClient {
        ResourceClient::new(self.transport.clone(), self.store.clone())
    }

    pub fn notes(&self) -> NotesClient {
        ResourceClient::new(self.transport.clone(), self.store.clone())
    }

    pub fn tasks(&self) -> TasksClient {
        ResourceClient::new(self.transport.clone(), self.store.clone())
    }
}
