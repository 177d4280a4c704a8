use crate::backend::notify::{Notifier, not_implemented};
use crate::frontend::components::common::{CardList, PageHeader, TabBar, TabSpec};
use crate::frontend::services::use_toaster;
use dioxus::prelude::*;

struct Request {
    lot: &'static str,
    operator: &'static str,
    date: &'static str,
    status: &'static str,
}

struct Verification {
    lot: &'static str,
    status: &'static str,
    notes: &'static str,
}

struct StockDebit {
    operator: &'static str,
    species: &'static str,
    amount: &'static str,
    reason: &'static str,
}

struct ArchivedCertificate {
    certificate: &'static str,
    lot: &'static str,
    date: &'static str,
}

const REQUESTS: [Request; 2] = [
    Request {
        lot: "Lot THO-A-001",
        operator: "Opérateur A",
        date: "2024-07-20",
        status: "En vérification",
    },
    Request {
        lot: "Lot SAR-B-001",
        operator: "Opérateur B",
        date: "2024-07-22",
        status: "Soumis",
    },
];

const VERIFICATIONS: [Verification; 1] = [Verification {
    lot: "Lot THO-A-001",
    status: "Vérification stocks OK",
    notes: "Débit de 200kg appliqué",
}];

const DEBITS: [StockDebit; 1] = [StockDebit {
    operator: "Opérateur A",
    species: "Thon Rouge",
    amount: "200 kg",
    reason: "Certificat #C001",
}];

const ARCHIVES: [ArchivedCertificate; 2] = [
    ArchivedCertificate {
        certificate: "CERT-2024-07-001",
        lot: "Lot MER-C-050",
        date: "2024-07-15",
    },
    ArchivedCertificate {
        certificate: "CERT-2024-07-002",
        lot: "Lot BAR-D-032",
        date: "2024-07-18",
    },
];

const TABS: [TabSpec; 4] = [
    TabSpec {
        key: "demandes",
        label: "Soumission",
        icon: "📄",
    },
    TabSpec {
        key: "verification",
        label: "Vérification",
        icon: "☑",
    },
    TabSpec {
        key: "debits",
        label: "Débit des Stocks",
        icon: "📊",
    },
    TabSpec {
        key: "archivage",
        label: "Archivage",
        icon: "🗃",
    },
];

#[component]
pub fn Certification() -> Element {
    let toaster = use_toaster();
    let active = use_signal(|| "demandes");
    let stub = move |action: &'static str, item: Option<&'static str>| {
        toaster.notify(not_implemented(action, item));
    };

    rsx! {
        document::Title { "Certification des Captures - ECOSPECHE" }

        PageHeader {
            title: "Certification des Captures",
            subtitle: "Processus de soumission, vérification et archivage",
            icon: "🏅",
        }

        TabBar { tabs: TABS.to_vec(), active }

        {match active() {
            "verification" => rsx! {
                CardList {
                    title: "Vérification des captures",
                    add_label: "Vérifier une capture",
                    on_add: move |_| stub("Lancer une vérification", None),
                    for verification in VERIFICATIONS.iter() {
                        div { key: "{verification.lot}", class: "list-row list-row-stacked",
                            p { class: "cell-strong", "Lot: {verification.lot}" }
                            p { class: "muted",
                                "Statut: "
                                span { class: "row-status tone-green", "{verification.status}" }
                            }
                            p { class: "fine-print", "Note: {verification.notes}" }
                        }
                    }
                }
            },
            "debits" => rsx! {
                CardList { title: "Débit des stocks d'opérateurs",
                    for debit in DEBITS.iter() {
                        div { key: "{debit.reason}", class: "list-row",
                            div {
                                p { class: "cell-strong", "Opérateur: {debit.operator} ({debit.species})" }
                                p { class: "muted", "Motif: {debit.reason}" }
                            }
                            p { class: "row-figure tone-orange", "-{debit.amount}" }
                        }
                    }
                }
            },
            "archivage" => rsx! {
                CardList { title: "Archivage des certificats de capture",
                    for archive in ARCHIVES.iter() {
                        div { key: "{archive.certificate}", class: "list-row",
                            div {
                                p { class: "cell-strong", "{archive.certificate}" }
                                p { class: "muted", "Lot: {archive.lot} - Date: {archive.date}" }
                            }
                            button {
                                class: "btn-outline btn-small",
                                onclick: {
                                    let certificate = archive.certificate;
                                    move |_| stub("Télécharger", Some(certificate))
                                },
                                "⬇ Télécharger"
                            }
                        }
                    }
                }
            },
            _ => rsx! {
                CardList {
                    title: "Soumission des demandes de certification",
                    add_label: "Nouvelle Demande",
                    on_add: move |_| stub("Soumettre une nouvelle demande", None),
                    for request in REQUESTS.iter() {
                        div { key: "{request.lot}", class: "list-row",
                            div {
                                p { class: "cell-strong", "Lot: {request.lot}" }
                                p { class: "muted", "Opérateur: {request.operator} - Date: {request.date}" }
                            }
                            span { class: "row-status", "{request.status}" }
                        }
                    }
                }
            },
        }}
    }
}
