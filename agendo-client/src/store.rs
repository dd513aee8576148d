//! On-disk session storage.
//!
//! Stores the authenticated identity at:
//!   ~/.config/agendo/session/user.toml
//!
//! `user` is the storage key the backend's web frontends use for the
//! same object; keeping the name makes the file recognizable.

use std::path::PathBuf;

use agendo_core::config::Config;
use agendo_core::error::{AgendoError, AgendoResult};
use agendo_core::session::Session;

const SESSION_DIR: &str = "session";
const SESSION_FILE: &str = "user.toml";

/// Handle to the session file. Cheap to clone; every operation opens the
/// file fresh, so two handles on the same directory always agree.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Store rooted at the real agendo config directory.
    pub fn open_default() -> AgendoResult<Self> {
        Ok(SessionStore {
            root: Config::default_dir()?,
        })
    }

    /// Store rooted at an explicit directory, for tests and embedders.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        SessionStore { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(SESSION_DIR).join(SESSION_FILE)
    }

    /// Read the stored session. An absent file means "not logged in" and
    /// is `Ok(None)`; a file that exists but cannot be read or parsed is
    /// an error.
    pub fn load(&self) -> AgendoResult<Option<Session>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        let session: Session = toml::from_str(&contents).map_err(|e| {
            AgendoError::Decode(format!("Failed to parse session from {}: {e}", path.display()))
        })?;

        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> AgendoResult<()> {
        let path = self.path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(session)
            .map_err(|e| AgendoError::Serialization(e.to_string()))?;
        std::fs::write(&path, contents)?;

        // Set to owner-only (0600) since file contains a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Delete the session file. Clearing an already-empty store succeeds.
    pub fn clear(&self) -> AgendoResult<()> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
