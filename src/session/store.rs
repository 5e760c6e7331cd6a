use std::{path::PathBuf, sync::Arc};

use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::Audience,
    config::Config,
    errors::StorageError,
    session::storage::{FileStorage, MemoryStorage, TokenStorage},
};

/// Storage key for the identifier of the active student.
pub const USER_ID_KEY: &str = "uid";

/// Session context shared by the authorizer, the navigation guard and every
/// resource client. Clones share the same underlying storage.
///
/// Holds at most one token per [`Audience`]. Tokens are opaque: no expiry or
/// format checks happen here, the backend decides validity on each call.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::open(path)))
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.session_file {
            Some(path) => Self::persistent(path.clone()),
            None => Self::in_memory(),
        }
    }

    /// Stores `token` for `audience`, replacing any previous one. Fails only
    /// when durable storage cannot be written, in which case the previous
    /// token is kept.
    pub fn set_token(
        &self,
        audience: Audience,
        token: &SecretString,
    ) -> Result<(), StorageError> {
        self.storage
            .set(audience.storage_key(), token.expose_secret())?;
        log::debug!("Stored {} session token", audience);
        Ok(())
    }

    /// The stored token for `audience`. An empty stored value counts as absent.
    pub fn token(&self, audience: Audience) -> Option<SecretString> {
        self.storage
            .get(audience.storage_key())
            .filter(|value| !value.is_empty())
            .map(SecretString::from)
    }

    pub fn has_token(&self, audience: Audience) -> bool {
        self.token(audience).is_some()
    }

    pub fn clear_token(&self, audience: Audience) -> Result<(), StorageError> {
        self.storage.remove(audience.storage_key())?;
        log::debug!("Cleared {} session token", audience);
        Ok(())
    }

    pub fn set_user_id(&self, user_id: &str) -> Result<(), StorageError> {
        self.storage.set(USER_ID_KEY, user_id)
    }

    pub fn user_id(&self) -> Option<String> {
        self.storage
            .get(USER_ID_KEY)
            .filter(|value| !value.is_empty())
    }

    pub fn clear_user_id(&self) -> Result<(), StorageError> {
        self.storage.remove(USER_ID_KEY)
    }

    /// Drops every token and the active user id.
    pub fn clear(&self) -> Result<(), StorageError> {
        for audience in Audience::PRECEDENCE {
            self.clear_token(audience)?;
        }
        self.clear_user_id()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
