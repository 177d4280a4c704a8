use crate::backend::notify::{Notifier, not_implemented};
use crate::frontend::components::common::{CardList, PageHeader, TabBar, TabSpec};
use crate::frontend::services::use_toaster;
use dioxus::prelude::*;

struct Landing {
    vessel: &'static str,
    trip: &'static str,
    date: &'static str,
    quantity: &'static str,
}

struct TracedCatch {
    trace_id: &'static str,
    species: &'static str,
    quantity: &'static str,
    operator: &'static str,
}

struct OperatorStock {
    operator: &'static str,
    species: &'static str,
    stock: &'static str,
}

struct Sale {
    operator: &'static str,
    lot: &'static str,
    destination: &'static str,
    status: &'static str,
}

const LANDINGS: [Landing; 2] = [
    Landing {
        vessel: "Neptune Explorer",
        trip: "MAR-0724-A",
        date: "2024-07-23",
        quantity: "5 tonnes",
    },
    Landing {
        vessel: "Sea Harmony",
        trip: "MAR-0724-B",
        date: "2024-07-22",
        quantity: "3.5 tonnes",
    },
];

const CATCHES: [TracedCatch; 2] = [
    TracedCatch {
        trace_id: "NEX-M0724A-THO",
        species: "Thon Rouge",
        quantity: "2 tonnes",
        operator: "Opérateur A",
    },
    TracedCatch {
        trace_id: "SHA-M0724B-SAR",
        species: "Sardine",
        quantity: "1.5 tonnes",
        operator: "Opérateur B",
    },
];

const STOCKS: [OperatorStock; 2] = [
    OperatorStock {
        operator: "Opérateur A",
        species: "Thon Rouge",
        stock: "1.8 tonnes",
    },
    OperatorStock {
        operator: "Opérateur B",
        species: "Sardine",
        stock: "1.2 tonnes",
    },
];

const SALES: [Sale; 2] = [
    Sale {
        operator: "Opérateur A",
        lot: "Lot THO-A-001",
        destination: "Client X",
        status: "Livré",
    },
    Sale {
        operator: "Opérateur B",
        lot: "Lot SAR-B-001",
        destination: "Client Y",
        status: "En transit",
    },
];

const TABS: [TabSpec; 4] = [
    TabSpec {
        key: "debarquements",
        label: "Débarquements",
        icon: "⚓",
    },
    TabSpec {
        key: "affectation",
        label: "Affectation & Traçage",
        icon: "📦",
    },
    TabSpec {
        key: "stocks",
        label: "Stocks Opérateurs",
        icon: "📊",
    },
    TabSpec {
        key: "commercialisation",
        label: "Commercialisation",
        icon: "🛒",
    },
];

#[component]
pub fn Tracabilite() -> Element {
    let toaster = use_toaster();
    let active = use_signal(|| "debarquements");
    let stub = move |action: &'static str, item: Option<&'static str>| {
        toaster.notify(not_implemented(action, item));
    };

    rsx! {
        document::Title { "Traçabilité - ECOSPECHE" }

        PageHeader {
            title: "Traçabilité des Captures",
            subtitle: "De la capture à la commercialisation",
            icon: "🛡",
        }

        TabBar { tabs: TABS.to_vec(), active }

        {match active() {
            "affectation" => rsx! {
                CardList {
                    title: "Enregistrement et affectation des captures",
                    add_label: "Attribuer un numéro",
                    on_add: move |_| stub("Attribuer un numéro de traçage", None),
                    for catch in CATCHES.iter() {
                        div { key: "{catch.trace_id}", class: "list-row",
                            div {
                                p { class: "cell-strong", "ID: {catch.trace_id}" }
                                p { class: "muted", "{catch.species} ({catch.quantity}) - Assigné à: {catch.operator}" }
                            }
                            button {
                                class: "btn-outline btn-small",
                                onclick: {
                                    let trace_id = catch.trace_id;
                                    move |_| stub("Voir détails", Some(trace_id))
                                },
                                "▦ Traçer"
                            }
                        }
                    }
                }
            },
            "stocks" => rsx! {
                CardList { title: "Suivi des stocks des opérateurs",
                    for stock in STOCKS.iter() {
                        div { key: "{stock.operator}", class: "list-row",
                            div {
                                p { class: "cell-strong", "Opérateur: {stock.operator}" }
                                p { class: "muted", "{stock.species}" }
                            }
                            p { class: "row-figure tone-green", "{stock.stock}" }
                        }
                    }
                }
            },
            "commercialisation" => rsx! {
                CardList { title: "Suivi de la commercialisation",
                    for sale in SALES.iter() {
                        div { key: "{sale.lot}", class: "list-row list-row-stacked",
                            p { class: "cell-strong", "Lot: {sale.lot} (Opérateur: {sale.operator})" }
                            p { class: "muted",
                                "Destination: {sale.destination} - Statut: "
                                span { class: "row-status", "{sale.status}" }
                            }
                        }
                    }
                }
            },
            _ => rsx! {
                CardList {
                    title: "Gestion des débarquements",
                    add_label: "Nouveau débarquement",
                    on_add: move |_| stub("Enregistrer un débarquement", None),
                    for landing in LANDINGS.iter() {
                        div { key: "{landing.trip}", class: "list-row list-row-stacked",
                            p { class: "cell-strong", "{landing.vessel} - Marée {landing.trip}" }
                            p { class: "muted", "Date: {landing.date} - Quantité: {landing.quantity}" }
                        }
                    }
                }
            },
        }}
    }
}
