//! Fixed application paths and the protected navigation menu.

use crate::backend::session::{Session, SessionStore};
use std::fmt;

/// Every path the app can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppPath {
    Landing,
    Dashboard,
    References,
    SuiviControle,
    Tracabilite,
    Certification,
}

impl AppPath {
    pub const ALL: [AppPath; 6] = [
        AppPath::Landing,
        AppPath::Dashboard,
        AppPath::References,
        AppPath::SuiviControle,
        AppPath::Tracabilite,
        AppPath::Certification,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppPath::Landing => "/",
            AppPath::Dashboard => "/dashboard",
            AppPath::References => "/references",
            AppPath::SuiviControle => "/suivi-controle",
            AppPath::Tracabilite => "/tracabilite",
            AppPath::Certification => "/certification",
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == path)
    }

    /// Whether the page needs a session.
    pub fn is_protected(self) -> bool {
        self != AppPath::Landing
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing collaborator.
pub trait Navigator {
    /// Adds a history entry for `path`.
    fn navigate(&self, path: AppPath);

    /// Moves to `path` in place of the current history entry.
    fn replace(&self, path: AppPath) {
        self.navigate(path);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: AppPath,
    pub label: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    /// Exact match only: `/dashboard/x` does not highlight `/dashboard`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path.as_str() == current_path
    }
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        path: AppPath::Dashboard,
        label: "Accueil",
        icon: "🏠",
    },
    NavItem {
        path: AppPath::References,
        label: "Références",
        icon: "🗄",
    },
    NavItem {
        path: AppPath::SuiviControle,
        label: "Suivi et contrôle",
        icon: "📈",
    },
    NavItem {
        path: AppPath::Tracabilite,
        label: "Traçabilité",
        icon: "🛡",
    },
    NavItem {
        path: AppPath::Certification,
        label: "Certification des captures",
        icon: "🏅",
    },
];

/// The menu entry for the current path, if any.
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(current_path))
}

/// Identity block shown at the right of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub organization: String,
}

/// What the navigation shell shows, or `None` when signed out.
pub fn identity(session: Option<&Session>) -> Option<Identity> {
    session.map(|s| Identity {
        display_name: s.display_name().to_string(),
        organization: s.organization().to_string(),
    })
}

/// Logout button: drop the session, then go back to the landing page.
///
/// The guard of the page being left may already have redirected, so this
/// replaces the entry rather than stacking a second `/`.
pub async fn sign_out(store: &SessionStore, navigator: &impl Navigator) {
    store.logout().await;
    navigator.replace(AppPath::Landing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::guard::RouteGuard;
    use crate::backend::session::{LoginRequest, MemoryStorage};
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    enum Move {
        Push(AppPath),
        Replace(AppPath),
    }

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<Move>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: AppPath) {
            self.calls.borrow_mut().push(Move::Push(path));
        }

        fn replace(&self, path: AppPath) {
            self.calls.borrow_mut().push(Move::Replace(path));
        }
    }

    #[test]
    fn highlight_is_exact_match() {
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active("/references"))
            .map(|item| item.path)
            .collect();
        assert_eq!(active, vec![AppPath::References]);

        assert!(active_item("/references/").is_none());
        assert!(active_item("/ref").is_none());
        assert!(active_item("/").is_none());
        assert_eq!(active_item("/tracabilite").map(|i| i.label), Some("Traçabilité"));
    }

    #[test]
    fn paths_round_trip_through_parse() {
        for path in AppPath::ALL {
            assert_eq!(AppPath::parse(path.as_str()), Some(path));
        }
        assert_eq!(AppPath::parse("/admin"), None);
        assert!(!AppPath::Landing.is_protected());
        assert!(NAV_ITEMS.iter().all(|item| item.path.is_protected()));
    }

    #[test]
    fn no_identity_without_session() {
        assert!(identity(None).is_none());
    }

    #[tokio::test]
    async fn sign_out_clears_session_and_returns_to_landing() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store.restore().await;
        store
            .login(LoginRequest::new("a@b.com", "x").with_profile("Anne", "Neptune Pêche"))
            .await
            .unwrap();
        assert_eq!(
            identity(store.session().as_ref()),
            Some(Identity {
                display_name: "Anne".to_string(),
                organization: "Neptune Pêche".to_string(),
            })
        );

        let navigator = RecordingNavigator::default();
        sign_out(&store, &navigator).await;

        assert!(store.session().is_none());
        assert_eq!(*navigator.calls.borrow(), vec![Move::Replace(AppPath::Landing)]);
    }

    #[tokio::test]
    async fn guard_redirect_then_sign_out_never_pushes() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store.restore().await;
        let session = store.login(LoginRequest::new("a@b.com", "x")).await.unwrap();

        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new();
        guard.observe(false, Some(&session), &navigator);

        // The guard reacts to the published logout before sign_out resumes.
        store.logout().await;
        guard.observe(false, store.session().as_ref(), &navigator);
        sign_out(&store, &navigator).await;

        let calls = navigator.calls.borrow();
        assert!(calls.iter().all(|call| matches!(call, Move::Replace(_))));
        assert_eq!(calls.len(), 2);
    }
}
