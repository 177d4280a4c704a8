//! Sign-in and registration form handling.

use super::error::{SessionError, ValidationError};
use super::models::{LoginRequest, Session};
use super::store::SessionStore;
use crate::backend::navigation::{AppPath, Navigator};
use crate::backend::notify::{Notification, Notifier};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Connexion",
            AuthMode::Register => "Inscription",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Se connecter",
            AuthMode::Register => "S'inscrire",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Pas encore de compte ? S'inscrire",
            AuthMode::Register => "Déjà un compte ? Se connecter",
        }
    }

    fn success_title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Connexion réussie !",
            AuthMode::Register => "Inscription réussie !",
        }
    }
}

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub organization: String,
}

impl AuthForm {
    /// Profile fields are only sent when registering.
    pub fn to_request(&self, mode: AuthMode) -> LoginRequest {
        let request = LoginRequest::new(self.email.clone(), self.password.clone());
        match mode {
            AuthMode::SignIn => request,
            AuthMode::Register => {
                request.with_profile(self.display_name.clone(), self.organization.clone())
            }
        }
    }
}

fn validate(mode: AuthMode, request: &LoginRequest) -> Result<(), ValidationError> {
    let missing = request.missing_credentials();
    if !missing.is_empty() {
        return Err(ValidationError::MissingCredentials(missing));
    }
    if mode == AuthMode::Register {
        let missing = request.missing_profile();
        if !missing.is_empty() {
            return Err(ValidationError::MissingProfile(missing));
        }
    }
    Ok(())
}

fn validation_notice(error: &ValidationError) -> Notification {
    let description = match error {
        ValidationError::MissingCredentials(_) => "Veuillez remplir tous les champs requis",
        ValidationError::MissingProfile(_) => "Veuillez remplir tous les champs pour l'inscription",
    };
    Notification::error("Erreur", description)
}

/// Handles a form submission end to end.
///
/// Returns the new session when the user got signed in; validation problems
/// are reported through `notifier` and leave the store untouched.
pub async fn submit(
    store: &SessionStore,
    notifier: &impl Notifier,
    navigator: &impl Navigator,
    mode: AuthMode,
    form: &AuthForm,
) -> Option<Session> {
    let request = form.to_request(mode);
    if let Err(e) = validate(mode, &request) {
        notifier.notify(validation_notice(&e));
        return None;
    }

    match store.login(request).await {
        Ok(session) => {
            notifier.notify(Notification::info(
                mode.success_title(),
                format!("Bienvenue {} dans ECOSPECHE", session.display_name()),
            ));
            navigator.navigate(AppPath::Dashboard);
            Some(session)
        }
        Err(SessionError::Validation(e)) => {
            notifier.notify(validation_notice(&e));
            None
        }
        Err(e) => {
            warn!("Login rejected: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::notify::Variant;
    use crate::backend::session::models::DEFAULT_DISPLAY_NAME;
    use crate::backend::session::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Default)]
    struct Recorder {
        notifications: RefCell<Vec<Notification>>,
        paths: RefCell<Vec<AppPath>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }
    }

    impl Navigator for Recorder {
        fn navigate(&self, path: AppPath) {
            self.paths.borrow_mut().push(path);
        }
    }

    async fn ready_store() -> SessionStore {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store.restore().await;
        store
    }

    fn form(email: &str, password: &str, name: &str, organization: &str) -> AuthForm {
        AuthForm {
            email: email.to_string(),
            password: password.to_string(),
            display_name: name.to_string(),
            organization: organization.to_string(),
        }
    }

    #[tokio::test]
    async fn missing_password_notifies_and_stays_signed_out() {
        let store = ready_store().await;
        let recorder = Recorder::default();

        let fields = form("a@b.com", "", "", "");
        let result = submit(&store, &recorder, &recorder, AuthMode::SignIn, &fields).await;

        assert!(result.is_none());
        assert!(store.session().is_none());
        assert!(recorder.paths.borrow().is_empty());
        let notifications = recorder.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].variant, Variant::Destructive);
        assert_eq!(
            notifications[0].description,
            "Veuillez remplir tous les champs requis"
        );
    }

    #[tokio::test]
    async fn registration_requires_profile() {
        let store = ready_store().await;
        let recorder = Recorder::default();

        let fields = form("a@b.com", "x", "Anne", "");
        let result = submit(&store, &recorder, &recorder, AuthMode::Register, &fields).await;

        assert!(result.is_none());
        assert!(store.session().is_none());
        assert_eq!(
            recorder.notifications.borrow()[0].description,
            "Veuillez remplir tous les champs pour l'inscription"
        );
    }

    #[tokio::test]
    async fn sign_in_welcomes_and_opens_dashboard() {
        let store = ready_store().await;
        let recorder = Recorder::default();

        // Profile fields left over from the register tab are ignored on sign-in.
        let fields = form("a@b.com", "x", "Stale", "Stale");
        let session = submit(&store, &recorder, &recorder, AuthMode::SignIn, &fields)
            .await
            .unwrap();

        assert_eq!(session.display_name(), DEFAULT_DISPLAY_NAME);
        assert_eq!(*recorder.paths.borrow(), vec![AppPath::Dashboard]);
        let notifications = recorder.notifications.borrow();
        assert_eq!(notifications[0].title, "Connexion réussie !");
        assert_eq!(
            notifications[0].description,
            "Bienvenue Utilisateur dans ECOSPECHE"
        );
        assert_eq!(notifications[0].variant, Variant::Default);
    }

    #[tokio::test]
    async fn registration_keeps_profile() {
        let store = ready_store().await;
        let recorder = Recorder::default();

        let fields = form("a@b.com", "x", "Anne", "Neptune Pêche");
        let session = submit(&store, &recorder, &recorder, AuthMode::Register, &fields)
            .await
            .unwrap();

        assert_eq!(session.display_name(), "Anne");
        assert_eq!(session.organization(), "Neptune Pêche");
        assert_eq!(recorder.notifications.borrow()[0].title, "Inscription réussie !");
    }

    #[test]
    fn mode_toggles_back_and_forth() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::SignIn.toggled().toggled(), AuthMode::SignIn);
    }
}
