use crate::backend::notify::{Notifier, not_implemented};
use crate::frontend::components::common::{DataTable, PageHeader, TabBar, TabSpec};
use crate::frontend::services::use_toaster;
use dioxus::prelude::*;

struct Vessel {
    name: &'static str,
    kind: &'static str,
    status: &'static str,
}

struct Licence {
    vessel: &'static str,
    number: &'static str,
    expires: &'static str,
}

struct SurveillanceUnit {
    name: &'static str,
    zone: &'static str,
}

struct Species {
    name: &'static str,
    scientific_name: &'static str,
    status: &'static str,
}

/// A capture reported at a position, shown on the map tab.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CaptureZone {
    lat: f64,
    lon: f64,
    species: &'static str,
    quantity: &'static str,
}

const VESSELS: [Vessel; 3] = [
    Vessel {
        name: "Neptune Explorer",
        kind: "Thonier",
        status: "Actif",
    },
    Vessel {
        name: "Ocean Guardian",
        kind: "Chalutier",
        status: "En maintenance",
    },
    Vessel {
        name: "Sea Harmony",
        kind: "Sardinier",
        status: "Actif",
    },
];

const LICENCES: [Licence; 2] = [
    Licence {
        vessel: "Neptune Explorer",
        number: "LIC-ATL-001",
        expires: "2025-12-31",
    },
    Licence {
        vessel: "Sea Harmony",
        number: "LIC-MED-005",
        expires: "2024-08-15",
    },
];

const UNITS: [SurveillanceUnit; 2] = [
    SurveillanceUnit {
        name: "Unité Delta",
        zone: "Atlantique Nord-Est",
    },
    SurveillanceUnit {
        name: "Unité Gamma",
        zone: "Méditerranée",
    },
];

const SPECIES: [Species; 2] = [
    Species {
        name: "Thon rouge",
        scientific_name: "Thunnus thynnus",
        status: "Réglementé",
    },
    Species {
        name: "Sardine",
        scientific_name: "Sardina pilchardus",
        status: "Autorisé",
    },
];

const CAPTURE_ZONES: [CaptureZone; 4] = [
    CaptureZone {
        lat: 14.7336,
        lon: -17.4583,
        species: "Thon rouge",
        quantity: "1.2 tonnes",
    },
    CaptureZone {
        lat: 14.4974,
        lon: -17.0378,
        species: "Sardinelle",
        quantity: "3 tonnes",
    },
    CaptureZone {
        lat: 16.0333,
        lon: -16.5000,
        species: "Mérou",
        quantity: "800 kg",
    },
    CaptureZone {
        lat: 12.5667,
        lon: -16.7667,
        species: "Crevette",
        quantity: "500 kg",
    },
];

const TABS: [TabSpec; 5] = [
    TabSpec {
        key: "navires",
        label: "Navires",
        icon: "🚢",
    },
    TabSpec {
        key: "licences",
        label: "Licences",
        icon: "📄",
    },
    TabSpec {
        key: "unites",
        label: "Unités de surveillance",
        icon: "⚓",
    },
    TabSpec {
        key: "especes",
        label: "Espèces",
        icon: "🐟",
    },
    TabSpec {
        key: "zones",
        label: "Zones de Capture",
        icon: "📍",
    },
];

/// Degrees of padding around the outermost markers.
const MAP_MARGIN: f64 = 0.5;

/// OpenStreetMap embed URL framing every zone.
fn map_embed_url(zones: &[CaptureZone]) -> Option<String> {
    let first = zones.first()?;
    let (mut min_lat, mut max_lat, mut min_lon, mut max_lon) =
        (first.lat, first.lat, first.lon, first.lon);
    for zone in zones {
        min_lat = min_lat.min(zone.lat);
        max_lat = max_lat.max(zone.lat);
        min_lon = min_lon.min(zone.lon);
        max_lon = max_lon.max(zone.lon);
    }
    Some(format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.4},{:.4},{:.4},{:.4}&layer=mapnik",
        min_lon - MAP_MARGIN,
        min_lat - MAP_MARGIN,
        max_lon + MAP_MARGIN,
        max_lat + MAP_MARGIN,
    ))
}

#[component]
pub fn References() -> Element {
    let toaster = use_toaster();
    let active = use_signal(|| "navires");
    let stub = move |action: &'static str, item: Option<&'static str>| {
        toaster.notify(not_implemented(action, item));
    };

    rsx! {
        document::Title { "Références - ECOSPECHE" }

        PageHeader {
            title: "Base de Références",
            subtitle: "Gestion des navires, licences, unités, espèces et zones de capture",
            icon: "🗄",
        }

        TabBar { tabs: TABS.to_vec(), active }

        div { class: "card-maritime tab-panel",
            {match active() {
                "licences" => rsx! {
                    h2 { "Liste et historique des licences" }
                    DataTable { headers: vec!["Navire", "N° Licence", "Expiration"],
                        for licence in LICENCES.iter() {
                            tr { key: "{licence.number}",
                                td { class: "cell-strong", "{licence.vessel}" }
                                td { "{licence.number}" }
                                td { "{licence.expires}" }
                                td { class: "align-right",
                                    button {
                                        class: "btn-ghost btn-small",
                                        onclick: {
                                            let number = licence.number;
                                            move |_| stub("Voir l'historique", Some(number))
                                        },
                                        "Historique"
                                    }
                                }
                            }
                        }
                    }
                },
                "unites" => rsx! {
                    h2 { "Liste des unités de surveillance" }
                    DataTable { headers: vec!["Nom de l'unité", "Zone de couverture"],
                        for unit in UNITS.iter() {
                            tr { key: "{unit.name}",
                                td { class: "cell-strong", "{unit.name}" }
                                td { "{unit.zone}" }
                                td { class: "align-right",
                                    button {
                                        class: "btn-ghost btn-small",
                                        onclick: {
                                            let name = unit.name;
                                            move |_| stub("Voir les affectations", Some(name))
                                        },
                                        "Affectations"
                                    }
                                }
                            }
                        }
                    }
                },
                "especes" => rsx! {
                    h2 { "Liste des espèces usuelles" }
                    DataTable { headers: vec!["Nom commun", "Nom scientifique", "Statut"],
                        for species in SPECIES.iter() {
                            tr { key: "{species.name}",
                                td { class: "cell-strong", "{species.name}" }
                                td { class: "italic", "{species.scientific_name}" }
                                td { "{species.status}" }
                                td { class: "align-right",
                                    button {
                                        class: "btn-ghost btn-small",
                                        onclick: {
                                            let name = species.name;
                                            move |_| stub("Consulter la fiche", Some(name))
                                        },
                                        "Fiche"
                                    }
                                }
                            }
                        }
                    }
                },
                "zones" => rsx! {
                    h2 { "Carte des Zones de Capture" }
                    div { class: "map-frame",
                        if let Some(url) = map_embed_url(&CAPTURE_ZONES) {
                            iframe { class: "map-embed", src: "{url}", title: "Zones de capture" }
                        }
                    }
                    ul { class: "marker-list",
                        for zone in CAPTURE_ZONES.iter() {
                            li { key: "{zone.species}", class: "marker",
                                h3 { "📍 {zone.species}" }
                                p { "Quantité: {zone.quantity}" }
                                p { class: "marker-coords", "Lat: {zone.lat}, Lon: {zone.lon}" }
                            }
                        }
                    }
                },
                _ => rsx! {
                    div { class: "card-list-header",
                        h2 { "Registre des navires de pêche" }
                        button {
                            class: "btn-ocean",
                            onclick: move |_| stub("Ajouter un navire", None),
                            "＋ Ajouter"
                        }
                    }
                    DataTable { headers: vec!["Nom", "Type", "Statut"],
                        for vessel in VESSELS.iter() {
                            tr { key: "{vessel.name}",
                                td { class: "cell-strong", "{vessel.name}" }
                                td { "{vessel.kind}" }
                                td { "{vessel.status}" }
                                td { class: "align-right",
                                    button {
                                        class: "btn-ghost btn-small",
                                        onclick: {
                                            let name = vessel.name;
                                            move |_| stub("Voir les détails", Some(name))
                                        },
                                        "Détails"
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
