use dioxus::prelude::*;

/// Full-screen loading indicator shown while the session is restored.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-screen",
            div { class: "spinner" }
        }
    }
}
