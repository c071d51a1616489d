use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

struct Service {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    features: [&'static str; 3],
}

const SERVICES: &[Service] = &[
    Service {
        title: "Marketing d'influence",
        description: "Accompagnement ponctuel ou annuel avec nos équipes de gestion de projet et planning stratégique pour des campagnes créatives.",
        icon: "/assets/baff.png",
        features: ["Campagnes créatives", "Planning stratégique", "Gestion de projet"],
    },
    Service {
        title: "Brand Content",
        description: "Accompagnement dans vos productions de contenus photos et vidéos pour renforcer votre identité de marque.",
        icon: "/assets/medal.png",
        features: ["Production photo", "Production vidéo", "Identité de marque"],
    },
    Service {
        title: "Organisation d'événement",
        description: "Organisation complète d'événements, gestion logistique, coordination des prestataires et mise en place d'expériences mémorables.",
        icon: "/assets/calendar.png",
        features: ["Gestion logistique", "Coordination prestataires", "Expériences mémorables"],
    },
    Service {
        title: "Expérience de marque",
        description: "Organisation d'événements locaux, set design, recherche de prestataires et logistique pour des événements impactants.",
        icon: "/assets/target.png",
        features: ["Set design", "Événements locaux", "Recherche prestataires"],
    },
    Service {
        title: "Stratégie et formations",
        description: "Accompagnement dans vos réflexions stratégiques et création de guidelines locales Influence/Social Média.",
        icon: "/assets/key.png",
        features: ["Réflexions stratégiques", "Guidelines locales", "Formations"],
    },
    Service {
        title: "Développement Web",
        description: "Création de sites web modernes, applications web et solutions digitales sur mesure pour votre entreprise.",
        icon: "/assets/dev.png",
        features: ["Sites web modernes", "Applications web", "Solutions sur mesure"],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="services-inner">
                <Reveal class={classes!("services-intro")}>
                    <span class="services-tab">{"Nos Services"}</span>
                    <h2>{"Un accompagnement 360° pour votre marque"}</h2>
                    <p>
                        {"De la stratégie d'influence à l'événementiel premium, chaque expertise est pensée pour transformer vos idées en succès digitaux."}
                    </p>
                    <a
                        href={format!("mailto:{}", config::CONTACT_EMAIL)}
                        class="services-cta"
                    >
                        {"DEMANDER UN DEVIS"}
                        <span class="cta-arrow">{"↗"}</span>
                    </a>
                </Reveal>

                <div class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| {
                            html! {
                                <Reveal
                                    key={service.title}
                                    class={classes!("service-card")}
                                    delay_ms={(index as u32) * 100}
                                >
                                    <div class="service-head">
                                        <img src={service.icon} alt={service.title} />
                                        <h3>{service.title}</h3>
                                    </div>
                                    <p>{service.description}</p>
                                    <ul>
                                        {
                                            service.features.iter().map(|feature| {
                                                html! { <li key={*feature}>{*feature}</li> }
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .services {
                    padding: 5rem 1.5rem;
                    background: #faf5ff;
                }

                .services-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .services-intro {
                    max-width: 40rem;
                    margin-bottom: 3rem;
                }

                .services-tab {
                    display: inline-block;
                    background: rgba(124, 58, 237, 0.1);
                    color: #6a0dad;
                    font-size: 0.85rem;
                    font-weight: 600;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1.2rem;
                }

                .services-intro h2 {
                    font-size: clamp(1.8rem, 4vw, 2.6rem);
                    font-weight: 800;
                    color: #111827;
                    margin: 0 0 1rem;
                }

                .services-intro p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin: 0 0 1.8rem;
                }

                .services-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: black;
                    color: white;
                    text-decoration: none;
                    border-radius: 9999px;
                    padding: 0.8rem 1.6rem;
                    font-size: 0.85rem;
                    font-weight: 600;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                @media (min-width: 640px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .service-card {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                }

                .service-card:hover {
                    box-shadow: 0 16px 40px rgba(106, 13, 173, 0.12);
                    transform: translateY(-4px);
                }

                .service-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .service-head img {
                    width: 3rem;
                    height: 3rem;
                    object-fit: contain;
                }

                .service-head h3 {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0;
                }

                .service-card p {
                    color: #4b5563;
                    font-size: 0.95rem;
                    line-height: 1.6;
                    margin: 0 0 1rem;
                }

                .service-card ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .service-card li {
                    background: #f3e8ff;
                    color: #6a0dad;
                    font-size: 0.78rem;
                    font-weight: 500;
                    padding: 0.25rem 0.7rem;
                    border-radius: 9999px;
                }
                "#}
            </style>
        </section>
    }
}
