//! Session lifecycle: restore, login, logout.
//!
//! The store is owned by the UI thread. Mutations happen in short borrows that
//! never span an `.await`, and subscribers are told about a change only after
//! the new state is in place.

use super::error::{SessionError, ValidationError};
use super::models::{LoginRequest, Session};
use super::storage::SessionStorage;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::sync::Arc;

/// Key the session is persisted under unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "ecospeche_user";

/// Lifecycle phase of the store.
///
/// `Loading` is entered once, by the first `restore`, and never again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Loading,
    Authenticated,
    Unauthenticated,
}

impl Phase {
    pub fn is_resolved(self) -> bool {
        matches!(self, Phase::Authenticated | Phase::Unauthenticated)
    }
}

/// What subscribers see after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub session: Option<Session>,
}

impl SessionSnapshot {
    pub fn is_loading(&self) -> bool {
        !self.phase.is_resolved()
    }
}

type Subscriber = Box<dyn Fn(&SessionSnapshot)>;

struct State {
    phase: Phase,
    session: Option<Session>,
}

pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    key: String,
    state: RefCell<State>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_key(storage, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: RefCell::new(State {
                phase: Phase::Uninitialized,
                session: None,
            }),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn is_loading(&self) -> bool {
        !self.phase().is_resolved()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.borrow();
        SessionSnapshot {
            phase: state.phase,
            session: state.session.clone(),
        }
    }

    /// Registers a callback run after every state change.
    ///
    /// Callbacks must not register further subscribers.
    pub fn subscribe(&self, subscriber: impl Fn(&SessionSnapshot) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Recovers the persisted session, if any.
    ///
    /// Only the first call does anything; later calls return the current
    /// session. Unreadable or malformed data counts as no session.
    pub async fn restore(&self) -> Option<Session> {
        {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Uninitialized {
                debug!("Session restore already ran, ignoring");
                return state.session.clone();
            }
            state.phase = Phase::Loading;
        }
        self.publish();

        let restored = self.read_persisted().await;

        {
            let mut state = self.state.borrow_mut();
            // A logout can't happen while loading and login is refused, so the
            // slot is still empty here.
            state.session = restored.clone();
            state.phase = if restored.is_some() {
                Phase::Authenticated
            } else {
                Phase::Unauthenticated
            };
        }
        match &restored {
            Some(session) => info!("Restored session for {}", session.email()),
            None => info!("No stored session, starting signed out"),
        }
        self.publish();

        restored
    }

    /// Signs in, replacing any current session.
    ///
    /// A failed write to storage is logged and otherwise ignored: the session
    /// still becomes active for this run.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, SessionError> {
        let missing = request.missing_credentials();
        if !missing.is_empty() {
            return Err(ValidationError::MissingCredentials(missing).into());
        }
        if !self.phase().is_resolved() {
            warn!("Login attempted before session restore finished");
            return Err(SessionError::NotReady);
        }

        let session = Session::from_request(&request);
        self.persist(&session).await;

        {
            let mut state = self.state.borrow_mut();
            state.session = Some(session.clone());
            state.phase = Phase::Authenticated;
        }
        info!("Signed in as {}", session.email());
        self.publish();

        Ok(session)
    }

    /// Clears the session from memory and storage. Does nothing when signed out.
    ///
    /// Subscribers hear about the logout before the stored record is removed.
    pub async fn logout(&self) {
        let previous = {
            let mut state = self.state.borrow_mut();
            let previous = state.session.take();
            if previous.is_some() {
                state.phase = Phase::Unauthenticated;
            }
            previous
        };

        let Some(previous) = previous else {
            debug!("Logout with no active session");
            return;
        };

        info!("Signed out {}", previous.email());
        self.publish();

        if let Err(e) = self.storage.delete(&self.key).await {
            warn!("Failed to remove stored session: {e}");
        }

        // A login that completed while the delete was pending lost its record.
        if let Some(current) = self.session() {
            debug!("Session replaced during logout, persisting it again");
            self.persist(&current).await;
        }
    }

    async fn read_persisted(&self) -> Option<Session> {
        let raw = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No session stored under {:?}", self.key);
                return None;
            }
            Err(e) => {
                warn!("Failed to read stored session: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_well_formed() => Some(session),
            Ok(_) => {
                warn!("Stored session is missing its id or email, discarding");
                self.discard_persisted().await;
                None
            }
            Err(e) => {
                warn!("Stored session is malformed, discarding: {e}");
                self.discard_persisted().await;
                None
            }
        }
    }

    async fn discard_persisted(&self) {
        if let Err(e) = self.storage.delete(&self.key).await {
            debug!("Could not discard stored session: {e}");
        }
    }

    async fn persist(&self, session: &Session) {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize session: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, json).await {
            warn!("Session for {} will not survive a restart: {e}", session.email());
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::error::StorageError;
    use crate::backend::session::models::{DEFAULT_DISPLAY_NAME, DEFAULT_ORGANIZATION, Role};
    use crate::backend::session::storage::MemoryStorage;
    use async_trait::async_trait;
    use std::rc::Rc;
    use tokio::sync::Notify;

    struct ReadOnlyStorage;

    #[async_trait]
    impl SessionStorage for ReadOnlyStorage {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: String) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        async fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    /// Holds every delete until `release` is notified.
    #[derive(Default)]
    struct GatedDeleteStorage {
        inner: MemoryStorage,
        release: Notify,
    }

    #[async_trait]
    impl SessionStorage for GatedDeleteStorage {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
            self.inner.set(key, value).await
        }

        async fn delete(&self, key: &str) -> Result<(), StorageError> {
            self.release.notified().await;
            self.inner.delete(key).await
        }
    }

    async fn ready_store(storage: Arc<dyn SessionStorage>) -> SessionStore {
        let store = SessionStore::new(storage);
        store.restore().await;
        store
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected_without_state_change() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ready_store(storage.clone()).await;

        for request in [
            LoginRequest::new("", "secret"),
            LoginRequest::new("a@b.com", ""),
            LoginRequest::new("", ""),
        ] {
            let err = store.login(request).await.unwrap_err();
            assert!(matches!(err, SessionError::Validation(_)));
        }

        assert!(store.session().is_none());
        assert_eq!(store.phase(), Phase::Unauthenticated);
        assert!(storage.get(DEFAULT_SESSION_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn whitespace_password_is_accepted() {
        let store = ready_store(Arc::new(MemoryStorage::new())).await;

        let session = store.login(LoginRequest::new("a@b.com", "   ")).await.unwrap();

        assert_eq!(session.email(), "a@b.com");
        assert_eq!(store.phase(), Phase::Authenticated);
    }

    #[tokio::test]
    async fn valid_login_creates_professional_session() {
        let store = ready_store(Arc::new(MemoryStorage::new())).await;

        let session = store.login(LoginRequest::new("a@b.com", "x")).await.unwrap();

        assert_eq!(session.role(), Role::MaritimeProfessional);
        assert_eq!(store.session(), Some(session));
        assert_eq!(store.phase(), Phase::Authenticated);
    }

    #[tokio::test]
    async fn empty_profile_fields_get_placeholders() {
        let store = ready_store(Arc::new(MemoryStorage::new())).await;

        let session = store
            .login(LoginRequest::new("a@b.com", "x").with_profile("", ""))
            .await
            .unwrap();

        assert_eq!(session.display_name(), DEFAULT_DISPLAY_NAME);
        assert_eq!(session.organization(), DEFAULT_ORGANIZATION);
    }

    #[tokio::test]
    async fn logout_twice_is_harmless() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ready_store(storage.clone()).await;
        store.login(LoginRequest::new("a@b.com", "x")).await.unwrap();

        store.logout().await;
        assert!(store.session().is_none());
        store.logout().await;
        assert!(store.session().is_none());
        assert_eq!(store.phase(), Phase::Unauthenticated);
        assert!(storage.get(DEFAULT_SESSION_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn restore_round_trips_across_stores() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
        let first = ready_store(storage.clone()).await;
        let request =
            LoginRequest::new("capitaine@neptune.fr", "pw").with_profile("Anne", "Neptune Pêche");
        let created = first.login(request).await.unwrap();

        let second = SessionStore::new(storage);
        let restored = second.restore().await;

        assert_eq!(restored.as_ref(), Some(&created));
        assert_eq!(second.phase(), Phase::Authenticated);
    }

    #[tokio::test]
    async fn malformed_data_restores_to_signed_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(DEFAULT_SESSION_KEY, "{not json".to_string())
            .await
            .unwrap();
        let store = SessionStore::new(storage.clone());

        assert!(store.restore().await.is_none());
        assert_eq!(store.phase(), Phase::Unauthenticated);
        assert!(!store.is_loading());
        assert!(storage.get(DEFAULT_SESSION_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn record_without_email_is_discarded() {
        let storage = Arc::new(MemoryStorage::new());
        let raw = r#"{"id":"1","email":"","displayName":"A","organization":"B","role":"maritime_professional"}"#;
        storage.set(DEFAULT_SESSION_KEY, raw.to_string()).await.unwrap();

        let store = SessionStore::new(storage);
        assert!(store.restore().await.is_none());
    }

    #[tokio::test]
    async fn loading_is_entered_once() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let phases = Rc::new(RefCell::new(Vec::new()));
        let seen = phases.clone();
        store.subscribe(move |snapshot| seen.borrow_mut().push(snapshot.phase));

        store.restore().await;
        store.restore().await;
        store.login(LoginRequest::new("a@b.com", "x")).await.unwrap();
        store.logout().await;

        assert_eq!(
            *phases.borrow(),
            vec![
                Phase::Loading,
                Phase::Unauthenticated,
                Phase::Authenticated,
                Phase::Unauthenticated,
            ]
        );
    }

    #[tokio::test]
    async fn subscribers_see_the_new_session() {
        let store = ready_store(Arc::new(MemoryStorage::new())).await;
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        store.subscribe(move |snapshot| *sink.borrow_mut() = snapshot.session.clone());

        let session = store.login(LoginRequest::new("a@b.com", "x")).await.unwrap();

        assert_eq!(*seen.borrow(), Some(session));
    }

    #[tokio::test]
    async fn login_before_restore_is_refused() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));

        let err = store.login(LoginRequest::new("a@b.com", "x")).await.unwrap_err();

        assert_eq!(err, SessionError::NotReady);
        assert_eq!(store.phase(), Phase::Uninitialized);
    }

    #[tokio::test]
    async fn login_during_pending_delete_keeps_its_record() {
        let storage = Arc::new(GatedDeleteStorage::default());
        let store = ready_store(storage.clone()).await;
        store.login(LoginRequest::new("first@b.com", "x")).await.unwrap();

        let (_, second) = tokio::join!(store.logout(), async {
            let session = store.login(LoginRequest::new("second@b.com", "y")).await;
            storage.release.notify_one();
            session
        });
        let second = second.unwrap();

        assert_eq!(store.session().as_ref(), Some(&second));
        let raw = storage.get(DEFAULT_SESSION_KEY).await.unwrap().unwrap();
        let persisted: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, second);

        let restarted = SessionStore::new(storage);
        assert_eq!(restarted.restore().await, Some(second));
    }

    #[tokio::test]
    async fn write_failure_still_signs_in() {
        let store = ready_store(Arc::new(ReadOnlyStorage)).await;

        let session = store.login(LoginRequest::new("a@b.com", "x")).await.unwrap();
        assert_eq!(store.session(), Some(session));

        store.logout().await;
        assert!(store.session().is_none());
    }
}
