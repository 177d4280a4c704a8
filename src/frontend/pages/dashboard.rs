use crate::backend::navigation::AppPath;
use crate::backend::utils::route::Route;
use crate::frontend::services::AuthState;
use dioxus::prelude::*;
use dioxus_router::navigator;

struct Stat {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    color: &'static str,
}

struct QuickAction {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    path: AppPath,
    color: &'static str,
}

struct Activity {
    icon: &'static str,
    action: &'static str,
    item: &'static str,
    time: &'static str,
}

const STATS: [Stat; 4] = [
    Stat {
        icon: "🐟",
        label: "Captures certifiées",
        value: "1,247",
        color: "tone-blue",
    },
    Stat {
        icon: "🛡",
        label: "Contrôles effectués",
        value: "89",
        color: "tone-green",
    },
    Stat {
        icon: "🏅",
        label: "Certifications actives",
        value: "156",
        color: "tone-purple",
    },
    Stat {
        icon: "👥",
        label: "Partenaires",
        value: "34",
        color: "tone-orange",
    },
];

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "🗄",
        title: "Références",
        description: "Consulter la base de données des espèces",
        path: AppPath::References,
        color: "gradient-blue",
    },
    QuickAction {
        icon: "📈",
        title: "Suivi et contrôle",
        description: "Monitoring des activités de pêche",
        path: AppPath::SuiviControle,
        color: "gradient-green",
    },
    QuickAction {
        icon: "🛡",
        title: "Traçabilité",
        description: "Traçage de la chaîne d'approvisionnement",
        path: AppPath::Tracabilite,
        color: "gradient-purple",
    },
    QuickAction {
        icon: "🏅",
        title: "Certification",
        description: "Certification des captures",
        path: AppPath::Certification,
        color: "gradient-orange",
    },
];

const RECENT: [Activity; 3] = [
    Activity {
        icon: "🏅",
        action: "Nouvelle certification",
        item: "Thon rouge - Lot #TR2024-001",
        time: "Il y a 2 heures",
    },
    Activity {
        icon: "🛡",
        action: "Contrôle qualité",
        item: "Sardines - Zone Atlantique Nord",
        time: "Il y a 4 heures",
    },
    Activity {
        icon: "📈",
        action: "Mise à jour traçabilité",
        item: "Anchois - Bateau Neptune",
        time: "Il y a 6 heures",
    },
];

#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<AuthState>();
    let nav = navigator();

    // The guard only renders us with a session.
    let Some(session) = auth.current() else {
        return rsx! {};
    };
    let name = session.display_name();
    let organization = session.organization();

    rsx! {
        document::Title { "Dashboard - ECOSPECHE" }

        div { class: "card-maritime welcome fade-in",
            div {
                h1 { class: "text-gradient", "Bienvenue, {name} !" }
                p { class: "page-subtitle", "Tableau de bord ECOSPECHE - {organization}" }
                p { class: "welcome-tagline", "Gérez vos activités maritimes durables en toute simplicité" }
            }
            span { class: "page-icon rocking", "🚢" }
        }

        section { class: "stat-grid",
            for stat in STATS.iter() {
                div { key: "{stat.label}", class: "card-maritime stat-card",
                    div { class: "stat-head",
                        span { class: "stat-icon {stat.color}", "{stat.icon}" }
                        span { class: "stat-trend", "↗" }
                    }
                    h3 { "{stat.value}" }
                    p { "{stat.label}" }
                }
            }
        }

        section {
            h2 { class: "section-title", "Accès rapide aux fonctionnalités" }
            div { class: "quick-grid",
                for action in QUICK_ACTIONS.iter() {
                    div {
                        key: "{action.title}",
                        class: "card-maritime quick-card",
                        onclick: {
                            let path = action.path;
                            move |_| { nav.push(Route::from(path)); }
                        },
                        div { class: "quick-icon {action.color}", "{action.icon}" }
                        h3 { "{action.title}" }
                        p { "{action.description}" }
                    }
                }
            }
        }

        section { class: "card-maritime recent",
            h2 { class: "section-title", "Activité récente" }
            div { class: "recent-list",
                for activity in RECENT.iter() {
                    div { key: "{activity.item}", class: "recent-item",
                        span { class: "recent-icon", "{activity.icon}" }
                        div { class: "recent-text",
                            p { class: "recent-action", "{activity.action}" }
                            p { class: "recent-subject", "{activity.item}" }
                        }
                        span { class: "recent-time", "{activity.time}" }
                    }
                }
            }
        }
    }
}
