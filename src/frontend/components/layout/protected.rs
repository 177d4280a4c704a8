use crate::backend::guard::{GuardDecision, RouteGuard, evaluate};
use crate::backend::utils::route::Route;
use crate::frontend::components::common::Spinner;
use crate::frontend::components::layout::Navigation;
use crate::frontend::services::{AuthState, RouterNavigator};
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator};
use std::cell::RefCell;
use std::rc::Rc;

/// Layout wrapping every page that needs a session.
#[component]
pub fn Protected() -> Element {
    let auth = use_context::<AuthState>();
    let nav = navigator();
    let guard = use_hook(|| Rc::new(RefCell::new(RouteGuard::new())));

    // Re-runs whenever the session or the loading flag changes.
    use_effect(move || {
        let is_loading = *auth.is_loading.read();
        let session = auth.session.read().clone();
        guard
            .borrow_mut()
            .observe(is_loading, session.as_ref(), &RouterNavigator::new(nav));
    });

    match evaluate(*auth.is_loading.read(), auth.session.read().is_some()) {
        GuardDecision::Loading => rsx! { Spinner {} },
        GuardDecision::Redirect(_) => rsx! {},
        GuardDecision::Render => rsx! {
            div { class: "page",
                Navigation {}
                main { class: "page-main", Outlet::<Route> {} }
            }
        },
    }
}
