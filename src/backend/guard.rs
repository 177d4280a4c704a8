//! Route guard for protected pages.
//!
//! The decision is a pure function of `(is_loading, session present)`.
//! [`RouteGuard`] remembers the last decision so a redirect is issued once per
//! transition into the signed-out state, however often it is re-evaluated.

use crate::backend::navigation::{AppPath, Navigator};
use crate::backend::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Restore still running: show a spinner, don't navigate.
    Loading,
    /// No session: leave for the given path and render nothing.
    Redirect(AppPath),
    /// Session present: render the page.
    Render,
}

pub fn evaluate(is_loading: bool, has_session: bool) -> GuardDecision {
    if is_loading {
        GuardDecision::Loading
    } else if has_session {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(AppPath::Landing)
    }
}

#[derive(Debug, Default)]
pub struct RouteGuard {
    last: Option<GuardDecision>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluates after a change of session or loading state.
    pub fn observe(
        &mut self,
        is_loading: bool,
        session: Option<&Session>,
        navigator: &impl Navigator,
    ) -> GuardDecision {
        let decision = evaluate(is_loading, session.is_some());
        if let GuardDecision::Redirect(path) = decision {
            if self.last != Some(decision) {
                navigator.replace(path);
            }
        }
        self.last = Some(decision);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::{LoginRequest, MemoryStorage, SessionStore};
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<AppPath>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, _path: AppPath) {
            panic!("guard redirects must not push history entries");
        }

        fn replace(&self, path: AppPath) {
            self.calls.borrow_mut().push(path);
        }
    }

    async fn some_session() -> Session {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store.restore().await;
        store.login(LoginRequest::new("a@b.com", "x")).await.unwrap()
    }

    #[tokio::test]
    async fn loading_never_navigates() {
        let session = some_session().await;
        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new();

        assert_eq!(guard.observe(true, None, &navigator), GuardDecision::Loading);
        assert_eq!(guard.observe(true, Some(&session), &navigator), GuardDecision::Loading);
        assert!(navigator.calls.borrow().is_empty());
    }

    #[test]
    fn signed_out_redirects_exactly_once() {
        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new();

        let decision = guard.observe(false, None, &navigator);
        guard.observe(false, None, &navigator);

        assert_eq!(decision, GuardDecision::Redirect(AppPath::Landing));
        assert_eq!(*navigator.calls.borrow(), vec![AppPath::Landing]);
    }

    #[tokio::test]
    async fn logout_while_visible_redirects_promptly() {
        let session = some_session().await;
        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new();

        assert_eq!(guard.observe(true, None, &navigator), GuardDecision::Loading);
        assert_eq!(guard.observe(false, Some(&session), &navigator), GuardDecision::Render);
        assert!(navigator.calls.borrow().is_empty());

        guard.observe(false, None, &navigator);
        assert_eq!(*navigator.calls.borrow(), vec![AppPath::Landing]);
    }

    #[test]
    fn decision_table() {
        assert_eq!(evaluate(true, false), GuardDecision::Loading);
        assert_eq!(evaluate(true, true), GuardDecision::Loading);
        assert_eq!(evaluate(false, true), GuardDecision::Render);
        assert_eq!(evaluate(false, false), GuardDecision::Redirect(AppPath::Landing));
    }
}
