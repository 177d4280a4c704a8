use crate::backend::navigation::{NAV_ITEMS, active_item, identity, sign_out};
use crate::backend::utils::route::Route;
use crate::frontend::services::{AuthState, RouterNavigator};
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

/// Top bar of the protected pages. Renders nothing when signed out.
#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let auth = use_context::<AuthState>();

    let Some(identity) = identity(auth.session.read().as_ref()) else {
        return rsx! {};
    };
    let active = active_item(&route.to_string()).map(|item| item.path);

    rsx! {
        nav { class: "navigation glass-effect nav-animate",
            div { class: "navigation-inner",
                div { class: "navigation-left",
                    div {
                        class: "brand",
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        span { class: "brand-icon", "🚢" }
                        span { class: "brand-name text-gradient", "ECOSPECHE" }
                    }

                    ul { class: "nav-items",
                        for item in NAV_ITEMS.iter() {
                            li {
                                key: "{item.path}",
                                class: if active == Some(item.path) {
                                    "nav-item active"
                                } else {
                                    "nav-item"
                                },
                                onclick: move |_| { nav.push(Route::from(item.path)); },
                                span { class: "nav-icon", "{item.icon}" }
                                span { class: "nav-text", "{item.label}" }
                            }
                        }
                    }
                }

                div { class: "navigation-right",
                    div { class: "identity",
                        p { class: "identity-name", "{identity.display_name}" }
                        p { class: "identity-org", "{identity.organization}" }
                    }
                    button {
                        class: "btn-outline btn-small",
                        onclick: move |_| {
                            let store = auth.store();
                            spawn(async move {
                                sign_out(&store, &RouterNavigator::new(nav)).await;
                            });
                        },
                        "⎋ Déconnexion"
                    }
                }
            }
        }
    }
}
