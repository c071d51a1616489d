use yew::prelude::*;

use crate::components::client_only::ClientOnly;
use crate::components::reveal::Reveal;
use crate::components::ribbon_text::RibbonText;
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    let ribbon_fallback = html! {
        <span class="ribbon-fallback">{"Cliq Events"}</span>
    };

    html! {
        <section class="hero">
            <div class="hero-inner">
                <Reveal class={classes!("hero-copy")}>
                    <span class="hero-badge">{"Agence 360° · Alger"}</span>
                    <h1>
                        {"L'agence qui fait "}
                        <span class="hero-accent">{"Cliq"}</span>
                        {" entre vos idées et votre audience"}
                    </h1>
                    <p>{config::SITE_DESCRIPTION}</p>
                    <div class="hero-actions">
                        <a href="#services" class="hero-button primary">
                            {"Découvrir nos services"}
                        </a>
                        <a
                            href={format!("mailto:{}", config::CONTACT_EMAIL)}
                            class="hero-button secondary"
                        >
                            {"Demander un devis"}
                        </a>
                    </div>
                </Reveal>

                <div class="hero-ribbon">
                    <ClientOnly fallback={ribbon_fallback}>
                        <RibbonText text="Cliq Events" />
                    </ClientOnly>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(160deg, #faf5ff 0%, #ffffff 45%, #f3e8ff 100%);
                    padding: 7rem 1.5rem 4rem;
                }

                .hero-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    width: 100%;
                }

                .hero-copy {
                    max-width: 46rem;
                }

                .hero-badge {
                    display: inline-block;
                    background: rgba(124, 58, 237, 0.1);
                    color: #6a0dad;
                    font-size: 0.85rem;
                    font-weight: 600;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1.5rem;
                }

                .hero h1 {
                    font-size: clamp(2.4rem, 6vw, 4.2rem);
                    font-weight: 800;
                    line-height: 1.1;
                    color: #111827;
                    margin: 0 0 1.5rem;
                }

                .hero-accent {
                    background: linear-gradient(90deg, #7c3aed, #d946ef);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .hero-copy p {
                    font-size: 1.15rem;
                    line-height: 1.7;
                    color: #4b5563;
                    margin: 0 0 2.2rem;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-button {
                    text-decoration: none;
                    font-weight: 600;
                    padding: 0.85rem 1.8rem;
                    border-radius: 9999px;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .hero-button:hover {
                    transform: translateY(-2px);
                }

                .hero-button.primary {
                    background: linear-gradient(135deg, #7c3aed, #6a0dad);
                    color: white;
                    box-shadow: 0 8px 24px rgba(106, 13, 173, 0.25);
                }

                .hero-button.secondary {
                    background: white;
                    color: #6a0dad;
                    border: 2px solid #7c3aed;
                }

                .hero-ribbon {
                    margin-top: 4rem;
                }

                .ribbon-fallback {
                    display: block;
                    text-align: center;
                    font-size: 3rem;
                    font-weight: 800;
                    color: #7c3aed;
                    opacity: 0.3;
                }
                "#}
            </style>
        </section>
    }
}
