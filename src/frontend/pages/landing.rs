use crate::frontend::components::common::AuthModal;
use dioxus::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🗄",
        title: "Références",
        description: "Base de données complète des espèces marines et réglementations",
    },
    Feature {
        icon: "📈",
        title: "Suivi et contrôle",
        description: "Monitoring en temps réel des activités de pêche",
    },
    Feature {
        icon: "🛡",
        title: "Traçabilité",
        description: "Traçage complet de la chaîne d'approvisionnement",
    },
    Feature {
        icon: "🏅",
        title: "Certification",
        description: "Certification des captures selon les standards internationaux",
    },
];

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let mut modal_open = use_signal(|| false);

    rsx! {
        document::Title { "ECOSPECHE - Plateforme Maritime Durable" }

        div { class: "landing wave-pattern",
            div { class: "floating floating-fish", "🐟" }
            div { class: "floating floating-waves", "🌊" }
            div { class: "floating floating-anchor", "⚓" }

            header { class: "landing-header fade-in",
                div { class: "brand",
                    span { class: "brand-icon", "🚢" }
                    span { class: "brand-name text-gradient", "ECOSPECHE" }
                }
                button {
                    class: "btn-ocean",
                    onclick: move |_| modal_open.set(true),
                    "S'inscrire"
                }
            }

            main { class: "landing-main",
                section { class: "hero fade-in",
                    div { class: "hero-logo glass-effect",
                        span { "🚢" }
                        span { class: "hero-badge", "🐟" }
                    }
                    h1 { class: "hero-title text-gradient", "ECOSPECHE" }
                    p { class: "hero-text",
                        "Plateforme innovante pour la gestion durable des ressources maritimes. "
                        "Traçabilité complète, contrôle qualité et certification des captures "
                        "pour un océan préservé."
                    }
                    div { class: "hero-actions",
                        button {
                            class: "btn-ocean btn-large",
                            onclick: move |_| modal_open.set(true),
                            "Rejoindre ECOSPECHE"
                        }
                        span { class: "hero-certified", "🛡 Certifié ISO 14001" }
                    }
                }

                section { class: "feature-grid",
                    for feature in FEATURES.iter() {
                        div { key: "{feature.title}", class: "card-maritime feature-card",
                            div { class: "feature-icon", "{feature.icon}" }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }

                section { class: "card-maritime mission",
                    h2 { class: "text-gradient", "Notre Mission" }
                    div { class: "mission-grid",
                        div {
                            p {
                                "ECOSPECHE révolutionne l'industrie maritime en offrant une plateforme "
                                "complète de gestion durable des ressources océaniques. Notre technologie "
                                "avancée permet un suivi en temps réel, une traçabilité transparente et "
                                "une certification rigoureuse."
                            }
                            p {
                                "Ensemble, construisons un avenir où la pêche responsable et la préservation "
                                "marine vont de pair pour les générations futures."
                            }
                        }
                        img {
                            class: "mission-image",
                            alt: "Pêche durable en mer",
                            src: "https://images.unsplash.com/photo-1628213524301-2662fc2de56e",
                        }
                    }
                }
            }

            footer { class: "landing-footer glass-effect",
                div { class: "brand",
                    span { class: "brand-icon", "🚢" }
                    span { class: "brand-name text-gradient", "ECOSPECHE" }
                }
                div { class: "footer-meta",
                    span { "© 2024 ECOSPECHE. Tous droits réservés." }
                    span { "🛡 Plateforme sécurisée" }
                }
            }

            AuthModal { open: modal_open }
        }
    }
}
