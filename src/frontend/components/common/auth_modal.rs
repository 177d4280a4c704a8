use crate::backend::session::auth::submit;
use crate::backend::session::{AuthForm, AuthMode};
use crate::frontend::services::{AuthState, RouterNavigator, use_toaster};
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Sign-in / registration dialog opened from the landing page.
#[component]
pub fn AuthModal(open: Signal<bool>) -> Element {
    let auth = use_context::<AuthState>();
    let toaster = use_toaster();
    let nav = navigator();

    let mut mode = use_signal(AuthMode::default);
    let mut form = use_signal(AuthForm::default);
    let mut submitting = use_signal(|| false);

    if !open() {
        return rsx! {};
    }

    let current = mode();
    let (title, submit_label, switch_prompt) =
        (current.title(), current.submit_label(), current.switch_prompt());

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let store = auth.store();
        let fields = form.read().clone();
        let mut open = open;
        spawn(async move {
            let navigator = RouterNavigator::new(nav);
            if submit(&store, &toaster, &navigator, current, &fields).await.is_some() {
                form.set(AuthForm::default());
                open.set(false);
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                let mut open = open;
                open.set(false);
            },
            div {
                class: "modal glass-effect fade-in",
                onclick: move |e| e.stop_propagation(),
                h2 { class: "modal-title text-gradient", "🚢 {title}" }

                form { class: "auth-form", onsubmit: on_submit,
                    if current == AuthMode::Register {
                        div { class: "field",
                            label { r#for: "name", "👤 Nom complet" }
                            input {
                                id: "name",
                                r#type: "text",
                                placeholder: "Votre nom complet",
                                value: "{form.read().display_name}",
                                oninput: move |e| form.write().display_name = e.value(),
                            }
                        }
                        div { class: "field",
                            label { r#for: "company", "🚢 Entreprise maritime" }
                            input {
                                id: "company",
                                r#type: "text",
                                placeholder: "Nom de votre entreprise",
                                value: "{form.read().organization}",
                                oninput: move |e| form.write().organization = e.value(),
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: "email", "✉ Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "votre@email.com",
                            value: "{form.read().email}",
                            oninput: move |e| form.write().email = e.value(),
                        }
                    }
                    div { class: "field",
                        label { r#for: "password", "🔒 Mot de passe" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{form.read().password}",
                            oninput: move |e| form.write().password = e.value(),
                        }
                    }

                    button {
                        class: "btn-ocean btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        "{submit_label}"
                    }

                    div { class: "auth-switch",
                        button {
                            r#type: "button",
                            class: "link-button",
                            onclick: move |_| mode.set(current.toggled()),
                            "{switch_prompt}"
                        }
                    }
                }
            }
        }
    }
}
