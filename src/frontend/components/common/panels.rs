//! Building blocks shared by the dashboard pages.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TabSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[component]
pub fn TabBar(tabs: Vec<TabSpec>, mut active: Signal<&'static str>) -> Element {
    rsx! {
        div { class: "tab-list",
            for tab in tabs {
                button {
                    key: "{tab.key}",
                    class: if active() == tab.key { "tab-trigger active" } else { "tab-trigger" },
                    onclick: move |_| active.set(tab.key),
                    span { class: "tab-icon", "{tab.icon}" }
                    "{tab.label}"
                }
            }
        }
    }
}

/// Banner at the top of each dashboard page.
#[component]
pub fn PageHeader(title: String, subtitle: String, icon: String) -> Element {
    rsx! {
        div { class: "card-maritime page-header fade-in",
            div {
                h1 { class: "text-gradient", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            span { class: "page-icon", "{icon}" }
        }
    }
}

/// Titled card with an optional "add" button in the header.
#[component]
pub fn CardList(
    title: String,
    add_label: Option<String>,
    on_add: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "card-maritime card-list",
            div { class: "card-list-header",
                h3 { "{title}" }
                if let (Some(label), Some(handler)) = (add_label, on_add) {
                    button {
                        class: "btn-ocean btn-small",
                        onclick: move |_| handler.call(()),
                        "＋ {label}"
                    }
                }
            }
            div { class: "card-list-items", {children} }
        }
    }
}

/// Table with a trailing "Actions" column; rows come in as children.
#[component]
pub fn DataTable(headers: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        div { class: "table-wrapper",
            table { class: "data-table",
                thead {
                    tr {
                        for header in headers {
                            th { key: "{header}", scope: "col", "{header}" }
                        }
                        th { scope: "col", class: "align-right", "Actions" }
                    }
                }
                tbody { {children} }
            }
        }
    }
}
