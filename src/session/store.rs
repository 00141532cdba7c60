//! Session store: in-memory state with durable mirroring.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use crate::observability::{Event, Logger};
use crate::storage::SessionStorage;

use super::record::{Session, SessionRecord, UserProfile};

/// Fixed, versionless durable-storage namespace for the session record.
pub const SESSION_STORAGE_KEY: &str = "tuaran-kols-auth";

/// Simulated round-trip latency of the sign-in check.
const DEFAULT_SIGN_IN_LATENCY: Duration = Duration::from_millis(500);

/// Session store configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Durable-storage key the record lives under
    pub storage_key: String,

    /// How long `sign_in` suspends before resolving
    pub sign_in_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: SESSION_STORAGE_KEY.to_string(),
            sign_in_latency: DEFAULT_SIGN_IN_LATENCY,
        }
    }
}

/// Single source of truth for the client's authentication state.
///
/// Constructed once at application startup and shared by handle with the
/// router and the UI; [`SessionStore::initialize`] must run before the
/// first navigation is processed.
pub struct SessionStore<S: SessionStorage> {
    config: SessionConfig,
    storage: S,
    current: RwLock<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(SessionConfig::default(), storage)
    }

    pub fn with_config(config: SessionConfig, storage: S) -> Self {
        Self {
            config,
            storage,
            current: RwLock::new(Session::logged_out()),
        }
    }

    /// Restores the session from the durable record.
    ///
    /// A missing, unreadable, or malformed record leaves the session at its
    /// logged-out default; none of those cases is an error to the caller.
    pub fn initialize(&self) {
        let restored = match self.storage.get(&self.config.storage_key) {
            Ok(Some(raw)) => match SessionRecord::decode(&raw) {
                Some(record) => record.into_session(),
                None => {
                    Logger::warn(
                        Event::SessionRecordMalformed.as_str(),
                        &[("key", &self.config.storage_key)],
                    );
                    Session::logged_out()
                }
            },
            Ok(None) => Session::logged_out(),
            Err(e) => {
                Logger::warn(
                    Event::SessionRecordUnreadable.as_str(),
                    &[("error", &e.to_string()), ("key", &self.config.storage_key)],
                );
                Session::logged_out()
            }
        };

        if let Some(user) = &restored.user {
            Logger::info(
                Event::SessionRestored.as_str(),
                &[("username", &user.username)],
            );
        }

        self.swap(restored);
    }

    /// Demo-grade credential gate: after a simulated network round-trip,
    /// accepts any non-empty username/password pair.
    ///
    /// Failure is the `false` return value; this never panics and never
    /// returns an error. Until it resolves, the pre-existing session state
    /// stays visible to every query.
    pub async fn sign_in(&self, username: &str, password: &str) -> bool {
        tokio::time::sleep(self.config.sign_in_latency).await;

        if username.is_empty() || password.is_empty() {
            Logger::info(Event::SignInRejected.as_str(), &[("username", username)]);
            return false;
        }

        let session = Session::signed_in(username);
        self.swap(session.clone());
        self.persist(&session);
        Logger::info(Event::SignInAccepted.as_str(), &[("username", username)]);
        true
    }

    /// Clears the session and deletes the durable record. Idempotent.
    pub fn sign_out(&self) {
        self.swap(Session::logged_out());
        if let Err(e) = self.storage.delete(&self.config.storage_key) {
            Logger::error(
                Event::SessionPersistFailed.as_str(),
                &[("error", &e.to_string()), ("op", "delete")],
            );
        }
        Logger::info(Event::SignedOut.as_str(), &[]);
    }

    /// Whether the latest completed `initialize`/`sign_in`/`sign_out` left
    /// the client authenticated. In-memory read, no storage access.
    pub fn is_authenticated(&self) -> bool {
        self.read().is_logged_in
    }

    /// Identity of the signed-in user, for the UI layer.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.read().user
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.read()
    }

    /// Writes the durable record for `session`.
    ///
    /// A storage failure degrades durability, not the sign-in: the
    /// in-memory session stays authoritative and the failure is logged.
    fn persist(&self, session: &Session) {
        let record = SessionRecord::from(session);
        match serde_json::to_string(&record) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(&self.config.storage_key, &raw) {
                    Logger::error(
                        Event::SessionPersistFailed.as_str(),
                        &[("error", &e.to_string()), ("op", "set")],
                    );
                }
            }
            Err(e) => {
                Logger::error(
                    Event::SessionPersistFailed.as_str(),
                    &[("error", &e.to_string()), ("op", "encode")],
                );
            }
        }
    }

    /// Replaces the session as a whole value. A reader never observes a
    /// partially updated session.
    fn swap(&self, session: Session) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = session;
    }

    fn read(&self) -> Session {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn fast_store() -> SessionStore<MemoryStorage> {
        let config = SessionConfig {
            sign_in_latency: Duration::ZERO,
            ..SessionConfig::default()
        };
        SessionStore::with_config(config, MemoryStorage::new())
    }

    #[test]
    fn test_starts_logged_out() {
        let store = fast_store();
        store.initialize();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_accepts_non_empty_credentials() {
        let store = fast_store();
        store.initialize();

        assert!(store.sign_in("alice", "secret").await);
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_sign_in_rejects_empty_credentials() {
        let store = fast_store();
        store.initialize();

        assert!(!store.sign_in("", "secret").await);
        assert!(!store.sign_in("alice", "").await);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_sign_in_keeps_prior_session() {
        let store = fast_store();
        store.initialize();
        store.sign_in("alice", "secret").await;

        assert!(!store.sign_in("", "pw").await);
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let store = fast_store();
        store.initialize();
        store.sign_in("alice", "secret").await;

        store.sign_out();
        store.sign_out();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_initialize_survives_malformed_record() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_STORAGE_KEY, "{{{").unwrap();

        let store = SessionStore::new(storage);
        store.initialize();
        assert!(!store.is_authenticated());
    }
}
