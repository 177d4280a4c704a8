//! Session provider: the one `SessionStore` of the app, shared via context.

use crate::backend::navigation::{AppPath, Navigator};
use crate::backend::session::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};
use crate::backend::utils::config::StorageConfig;
use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use log::{info, warn};
use std::rc::Rc;
use std::sync::Arc;

#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    pub is_loading: Signal<bool>,
    store: Signal<Rc<SessionStore>>,
}

impl AuthState {
    /// Wraps the store and mirrors every change into signals.
    fn new(store: SessionStore) -> Self {
        let store = Rc::new(store);
        let session = Signal::new(store.session());
        let is_loading = Signal::new(store.is_loading());

        store.subscribe(move |snapshot| {
            let mut session = session;
            let mut is_loading = is_loading;
            session.set(snapshot.session.clone());
            is_loading.set(snapshot.is_loading());
        });

        Self {
            session,
            is_loading,
            store: Signal::new(store),
        }
    }

    pub fn store(&self) -> Rc<SessionStore> {
        self.store.read().clone()
    }

    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }
}

fn build_store(config: &StorageConfig) -> SessionStore {
    let storage: Arc<dyn SessionStorage> = match (config.persist_session, config.session_dir()) {
        (true, Some(dir)) => {
            info!("Persisting session under {}", dir.display());
            Arc::new(FileStorage::new(dir))
        }
        (true, None) => {
            warn!("No data directory available, session will not be persisted");
            Arc::new(MemoryStorage::new())
        }
        (false, _) => Arc::new(MemoryStorage::new()),
    };
    SessionStore::with_key(storage, config.session_key.clone())
}

/// Creates the session context at the app root and restores once.
pub fn use_session_provider(config: &StorageConfig) -> AuthState {
    let auth = use_context_provider(|| AuthState::new(build_store(config)));

    use_hook(move || {
        let store = auth.store();
        spawn(async move {
            store.restore().await;
        });
    });

    auth
}

/// Router-backed routing collaborator.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    nav: dioxus_router::Navigator,
}

impl RouterNavigator {
    pub fn new(nav: dioxus_router::Navigator) -> Self {
        Self { nav }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: AppPath) {
        self.nav.push(Route::from(path));
    }

    fn replace(&self, path: AppPath) {
        self.nav.replace(Route::from(path));
    }
}
