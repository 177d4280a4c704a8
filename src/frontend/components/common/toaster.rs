use crate::frontend::services::use_toaster;
use dioxus::prelude::*;

#[component]
pub fn ToastViewport() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.toasts.read().clone();

    rsx! {
        div { class: "toast-viewport",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.notification.variant.css_class(),
                    div { class: "toast-body",
                        p { class: "toast-title", "{toast.notification.title}" }
                        if !toast.notification.description.is_empty() {
                            p { class: "toast-description", "{toast.notification.description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        title: "Fermer",
                        onclick: move |_| toaster.dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}
