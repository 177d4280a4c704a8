use crate::backend::navigation::AppPath;
use crate::frontend::components::layout::Protected;
use crate::frontend::pages::{
    Certification, Dashboard, Landing, References, SuiviControle, Tracabilite,
};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    /// Public landing page with the sign-in modal.
    #[route("/")]
    Landing {},
    /// Everything below requires a session.
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/references")]
        References {},
        #[route("/suivi-controle")]
        SuiviControle {},
        #[route("/tracabilite")]
        Tracabilite {},
        #[route("/certification")]
        Certification {},
}

impl Route {
    pub fn app_path(&self) -> AppPath {
        match self {
            Route::Landing {} => AppPath::Landing,
            Route::Dashboard {} => AppPath::Dashboard,
            Route::References {} => AppPath::References,
            Route::SuiviControle {} => AppPath::SuiviControle,
            Route::Tracabilite {} => AppPath::Tracabilite,
            Route::Certification {} => AppPath::Certification,
        }
    }
}

impl From<AppPath> for Route {
    fn from(path: AppPath) -> Self {
        match path {
            AppPath::Landing => Route::Landing {},
            AppPath::Dashboard => Route::Dashboard {},
            AppPath::References => Route::References {},
            AppPath::SuiviControle => Route::SuiviControle {},
            AppPath::Tracabilite => Route::Tracabilite {},
            AppPath::Certification => Route::Certification {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_their_app_path() {
        for path in AppPath::ALL {
            let route = Route::from(path);
            assert_eq!(route.app_path(), path);
            assert_eq!(route.to_string(), path.as_str());
        }
    }
}
