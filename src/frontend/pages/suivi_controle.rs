use crate::backend::notify::{Notifier, not_implemented};
use crate::frontend::components::common::{CardList, PageHeader, TabBar, TabSpec};
use crate::frontend::services::use_toaster;
use dioxus::prelude::*;

struct Patrol {
    mission: &'static str,
    zone: &'static str,
    status: &'static str,
}

struct Inspection {
    vessel: &'static str,
    date: &'static str,
    outcome: &'static str,
}

struct Catch {
    vessel: &'static str,
    species: &'static str,
    quantity: &'static str,
    date: &'static str,
}

struct Validation {
    operation: &'static str,
    authority: &'static str,
    status: &'static str,
}

const PATROLS: [Patrol; 2] = [
    Patrol {
        mission: "PAT-001",
        zone: "Atlantique Nord-Est",
        status: "Terminée",
    },
    Patrol {
        mission: "PAT-002",
        zone: "Méditerranée",
        status: "En cours",
    },
];

const SEA_INSPECTIONS: [Inspection; 2] = [
    Inspection {
        vessel: "Salty Dog",
        date: "2024-07-21",
        outcome: "Conforme",
    },
    Inspection {
        vessel: "Wanderer",
        date: "2024-07-24",
        outcome: "Non-conformité mineure",
    },
];

const SEA_CATCHES: [Catch; 1] = [Catch {
    vessel: "Salty Dog",
    species: "Thon",
    quantity: "2 tonnes",
    date: "2024-07-21",
}];

const DOCK_INSPECTIONS: [Inspection; 1] = [Inspection {
    vessel: "Neptune Explorer",
    date: "2024-07-19",
    outcome: "Conforme",
}];

const LANDINGS: [Catch; 1] = [Catch {
    vessel: "Neptune Explorer",
    species: "Thon",
    quantity: "5 tonnes",
    date: "2024-07-19",
}];

const VALIDATIONS: [Validation; 2] = [
    Validation {
        operation: "PAT-001",
        authority: "Direction des Pêches",
        status: "Validé",
    },
    Validation {
        operation: "INSP-Q-005",
        authority: "Garde Côtière",
        status: "En attente de validation",
    },
];

const TABS: [TabSpec; 3] = [
    TabSpec {
        key: "surveillance",
        label: "Surveillance",
        icon: "👁",
    },
    TabSpec {
        key: "controles",
        label: "Contrôles",
        icon: "✅",
    },
    TabSpec {
        key: "certification",
        label: "Certification",
        icon: "🏅",
    },
];

#[component]
pub fn SuiviControle() -> Element {
    let toaster = use_toaster();
    let active = use_signal(|| "surveillance");
    let stub = move |action: &'static str, item: Option<&'static str>| {
        toaster.notify(not_implemented(action, item));
    };

    rsx! {
        document::Title { "Suivi et Contrôle - ECOSPECHE" }

        PageHeader {
            title: "Suivi et Contrôles",
            subtitle: "Gestion des opérations de surveillance, inspections et certifications",
            icon: "📈",
        }

        TabBar { tabs: TABS.to_vec(), active }

        {match active() {
            "controles" => rsx! {
                div { class: "panel-grid",
                    CardList {
                        title: "Inspections en mer",
                        add_label: "Nouvelle inspection",
                        on_add: move |_| stub("Enregistrer une inspection en mer", None),
                        for inspection in SEA_INSPECTIONS.iter() {
                            div { key: "{inspection.vessel}", class: "list-row",
                                div {
                                    p { class: "cell-strong", "{inspection.vessel}" }
                                    p { class: "muted", "{inspection.date}" }
                                }
                                span { class: "row-status", "{inspection.outcome}" }
                            }
                        }
                    }
                    CardList {
                        title: "Captures en mer",
                        add_label: "Nouvelle capture",
                        on_add: move |_| stub("Enregistrer une capture en mer", None),
                        for catch in SEA_CATCHES.iter() {
                            div { key: "{catch.vessel}", class: "list-row list-row-stacked",
                                p { class: "cell-strong", "{catch.vessel}" }
                                p { class: "muted", "{catch.species} - {catch.quantity} ({catch.date})" }
                            }
                        }
                    }
                    CardList {
                        title: "Inspections à quai",
                        add_label: "Nouvelle inspection",
                        on_add: move |_| stub("Enregistrer une inspection à quai", None),
                        for inspection in DOCK_INSPECTIONS.iter() {
                            div { key: "{inspection.vessel}", class: "list-row",
                                div {
                                    p { class: "cell-strong", "{inspection.vessel}" }
                                    p { class: "muted", "{inspection.date}" }
                                }
                                span { class: "row-status", "{inspection.outcome}" }
                            }
                        }
                    }
                    CardList {
                        title: "Débarquements",
                        add_label: "Nouveau débarquement",
                        on_add: move |_| stub("Enregistrer un débarquement", None),
                        for landing in LANDINGS.iter() {
                            div { key: "{landing.vessel}", class: "list-row list-row-stacked",
                                p { class: "cell-strong", "{landing.vessel}" }
                                p { class: "muted", "{landing.species} - {landing.quantity} ({landing.date})" }
                            }
                        }
                    }
                }
            },
            "certification" => rsx! {
                CardList {
                    title: "Validation des opérations par une autorité désignée",
                    add_label: "Soumettre pour validation",
                    on_add: move |_| stub("Soumettre une opération", None),
                    for validation in VALIDATIONS.iter() {
                        div { key: "{validation.operation}", class: "list-row",
                            div {
                                p { class: "cell-strong", "{validation.operation}" }
                                p { class: "muted", "Autorité: {validation.authority}" }
                            }
                            div {
                                span {
                                    class: if validation.status == "Validé" {
                                        "row-status tone-green"
                                    } else {
                                        "row-status tone-orange"
                                    },
                                    "{validation.status}"
                                }
                                button {
                                    class: "btn-outline btn-small",
                                    onclick: {
                                        let operation = validation.operation;
                                        move |_| stub("Valider l'opération", Some(operation))
                                    },
                                    "Valider"
                                }
                            }
                        }
                    }
                }
            },
            _ => rsx! {
                div { class: "panel-grid",
                    CardList {
                        title: "Enregistrement des patrouilles",
                        add_label: "Nouvelle patrouille",
                        on_add: move |_| stub("Enregistrer une nouvelle patrouille", None),
                        for patrol in PATROLS.iter() {
                            div { key: "{patrol.mission}", class: "list-row",
                                div {
                                    p { class: "cell-strong", "{patrol.mission}" }
                                    p { class: "muted", "{patrol.zone}" }
                                }
                                span { class: "row-status", "{patrol.status}" }
                            }
                        }
                    }
                    CardList { title: "Suivi des résultats de patrouilles",
                        for patrol in PATROLS.iter() {
                            div { key: "{patrol.mission}", class: "list-row",
                                div {
                                    p { class: "cell-strong", "{patrol.mission}" }
                                    p { class: "muted", "{patrol.status}" }
                                }
                                button {
                                    class: "btn-outline btn-small",
                                    onclick: {
                                        let mission = patrol.mission;
                                        move |_| stub("Voir les résultats", Some(mission))
                                    },
                                    "Résultats"
                                }
                            }
                        }
                    }
                }
            },
        }}
    }
}
