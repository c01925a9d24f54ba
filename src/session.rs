//! Server-side sessions keyed by an opaque id.
//!
//! The store is constructed once and handed to every connection. Clones share
//! the same underlying map, which synchronizes internally.

use std::sync::Arc;

use dashmap::DashMap;

use crate::http::error::LookupError;

/// A session and its attributes.
///
/// Cloning a `Session` yields another handle to the same attribute map.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    attributes: Arc<DashMap<String, String>>,
}

impl Session {
    /// Creates a session with a random UUID v4 id.
    pub fn new() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Arc::new(DashMap::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).map(|v| v.value().clone())
    }

    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.attributes.remove(name).map(|(_, v)| v)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe map from session id to [`Session`].
///
/// Entries never expire; they live until [`SessionStore::remove`] or process
/// exit.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `session`, replacing any session with the same id.
    pub fn add(&self, session: Session) {
        tracing::debug!(session = session.id(), "Session added");
        self.inner.insert(session.id.clone(), session);
    }

    pub fn find(&self, id: &str) -> Option<Session> {
        self.inner.get(id).map(|entry| entry.value().clone())
    }

    pub fn get(&self, id: &str) -> Result<Session, LookupError> {
        self.find(id)
            .ok_or_else(|| LookupError::SessionNotFound(id.to_string()))
    }

    /// Removes the session if present.
    pub fn remove(&self, id: &str) -> Option<Session> {
        let removed = self.inner.remove(id).map(|(_, session)| session);
        if removed.is_some() {
            tracing::debug!(session = id, "Session removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
