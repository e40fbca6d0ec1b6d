//! Session store accessor
//!
//! Reads and writes the session (token + user record) through a
//! [`SessionStorage`] backend and publishes every mutation on a
//! [`StorageBus`]. Several stores sharing a bus behave like browser tabs
//! sharing `localStorage`: each one observes the others' changes, never its
//! own.

use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::error::SessionResult;
use super::storage::{MemoryStorage, SessionStorage};
use crate::journal::User;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-encoded user record
pub const USER_KEY: &str = "user";

/// A change made to session storage
#[derive(Debug, Clone, PartialEq)]
pub struct StorageEvent {
    /// Changed key; `None` means the whole storage was cleared
    pub key: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    /// Store instance that made the change
    pub origin: Uuid,
}

impl StorageEvent {
    fn is_session_key(&self) -> bool {
        match self.key.as_deref() {
            None => true,
            Some(key) => key == TOKEN_KEY || key == USER_KEY,
        }
    }
}

/// Change-notification channel shared by store instances
#[derive(Debug, Clone)]
pub struct StorageBus {
    tx: broadcast::Sender<StorageEvent>,
}

impl StorageBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    fn publish(&self, event: StorageEvent) {
        // No receivers is the common case outside the header
        let _ = self.tx.send(event);
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.tx.subscribe()
    }
}

impl Default for StorageBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Session accessor over a storage backend
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    bus: StorageBus,
    origin: Uuid,
}

impl SessionStore {
    /// Create a store instance with its own origin id
    pub fn new(storage: Arc<dyn SessionStorage>, bus: StorageBus) -> Self {
        Self {
            storage,
            bus,
            origin: Uuid::new_v4(),
        }
    }

    /// Store backed by fresh in-memory storage and a private bus
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), StorageBus::default())
    }

    /// Another instance over the same storage and bus
    pub fn sibling(&self) -> Self {
        Self::new(Arc::clone(&self.storage), self.bus.clone())
    }

    pub fn origin(&self) -> Uuid {
        self.origin
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Current user record
    ///
    /// Missing or malformed data reads as signed out.
    pub fn read(&self) -> Option<User> {
        let raw = self.storage.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed stored user");
                None
            }
        }
    }

    /// Snapshot used as the initial value for observers
    pub fn snapshot(&self) -> Option<User> {
        self.read()
    }

    /// Persist a new session: token first, then the user record
    pub fn write(&self, token: &str, user: &User) -> SessionResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.set(TOKEN_KEY, token)?;
        self.set(USER_KEY, &user_json)?;
        tracing::info!(user = %user.name, "Session stored");
        Ok(())
    }

    /// Remove both session keys
    pub fn clear(&self) -> SessionResult<()> {
        self.remove(TOKEN_KEY)?;
        self.remove(USER_KEY)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Observe changes made by other instances
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.bus.subscribe(),
            origin: self.origin,
        }
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let old_value = self.storage.get_item(key);
        self.storage.set_item(key, value)?;
        self.bus.publish(StorageEvent {
            key: Some(key.to_string()),
            old_value,
            new_value: Some(value.to_string()),
            origin: self.origin,
        });
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let old_value = self.storage.get_item(key);
        self.storage.remove_item(key)?;
        if old_value.is_some() {
            self.bus.publish(StorageEvent {
                key: Some(key.to_string()),
                old_value,
                new_value: None,
                origin: self.origin,
            });
        }
        Ok(())
    }
}

/// Live subscription to session changes made elsewhere
///
/// Dropping it, or calling [`unsubscribe`](Self::unsubscribe), detaches it
/// from the bus.
pub struct SessionSubscription {
    rx: broadcast::Receiver<StorageEvent>,
    origin: Uuid,
}

impl SessionSubscription {
    /// Wait for the next relevant change
    ///
    /// Returns `None` once every store on the bus is gone. A lagged receiver
    /// reports a synthetic whole-storage change so the observer re-reads.
    pub async fn changed(&mut self) -> Option<StorageEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if self.accepts(&event) => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Session subscription lagged");
                    return Some(self.lagged_event());
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`changed`](Self::changed)
    pub fn try_changed(&mut self) -> Option<StorageEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) if self.accepts(&event) => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::TryRecvError::Lagged(_)) => return Some(self.lagged_event()),
                Err(_) => return None,
            }
        }
    }

    /// Detach from the bus
    pub fn unsubscribe(self) {
        tracing::debug!(origin = %self.origin, "Session subscription closed");
    }

    fn accepts(&self, event: &StorageEvent) -> bool {
        event.origin != self.origin && event.is_session_key()
    }

    fn lagged_event(&self) -> StorageEvent {
        StorageEvent {
            key: None,
            old_value: None,
            new_value: None,
            origin: Uuid::nil(),
        }
    }
}

/// Session handle constructed once at the application root and handed to
/// every page and shell component
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<SessionStore>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl Deref for SessionContext {
    type Target = SessionStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_clear() {
        let store = SessionStore::in_memory();
        assert!(store.token().is_none());
        assert!(store.read().is_none());

        store.write("tok-1", &User::new("Ada")).unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(store.read().map(|u| u.name), Some("Ada".to_string()));

        store.clear().unwrap();
        assert!(store.token().is_none());
        assert!(store.read().is_none());
    }

    #[test]
    fn test_malformed_user_reads_as_signed_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(USER_KEY, "{not json").unwrap();
        let store = SessionStore::new(storage.clone(), StorageBus::default());
        assert!(store.read().is_none());

        storage.set_item(USER_KEY, r#"{"email":"x@y.z"}"#).unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "").unwrap();
        let store = SessionStore::new(storage, StorageBus::default());
        assert!(store.token().is_none());
    }

    #[tokio::test]
    async fn test_sibling_changes_are_observed() {
        let tab_a = SessionStore::in_memory();
        let tab_b = tab_a.sibling();

        let mut sub = tab_a.subscribe();
        tab_b.write("tok", &User::new("Grace")).unwrap();

        let first = sub.changed().await.unwrap();
        assert_eq!(first.key.as_deref(), Some(TOKEN_KEY));
        assert_eq!(first.origin, tab_b.origin());

        let second = sub.changed().await.unwrap();
        assert_eq!(second.key.as_deref(), Some(USER_KEY));
        assert_eq!(tab_a.snapshot().map(|u| u.name), Some("Grace".to_string()));
    }

    #[test]
    fn test_own_changes_are_not_echoed() {
        let store = SessionStore::in_memory();
        let mut sub = store.subscribe();

        store.write("tok", &User::new("Ada")).unwrap();
        store.clear().unwrap();

        assert!(sub.try_changed().is_none());
    }

    #[test]
    fn test_clear_of_empty_session_publishes_nothing() {
        let tab_a = SessionStore::in_memory();
        let tab_b = tab_a.sibling();
        let mut sub = tab_a.subscribe();

        tab_b.clear().unwrap();
        assert!(sub.try_changed().is_none());
    }

    #[test]
    fn test_unsubscribe_detaches_only_that_observer() {
        let tab_a = SessionStore::in_memory();
        let tab_b = tab_a.sibling();

        let sub = tab_a.subscribe();
        sub.unsubscribe();

        let mut other = tab_a.subscribe();
        tab_b.write("tok", &User::new("Ada")).unwrap();
        assert!(other.try_changed().is_some());
    }

    #[test]
    fn test_context_shares_one_instance() {
        let ctx = SessionContext::new(SessionStore::in_memory());
        let clone = ctx.clone();
        ctx.write("tok", &User::new("Ada")).unwrap();
        assert_eq!(clone.token().as_deref(), Some("tok"));
        assert_eq!(ctx.origin(), clone.origin());
    }
}
