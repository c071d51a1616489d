use yew::prelude::*;

use crate::browser;
use crate::components::client_logos::ClientLogos;
use crate::config;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::instagram_banner::InstagramBanner;
use crate::components::services::Services;
use crate::components::showcase::{MediaSide, ShowcaseSection};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            browser::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <Header />
            <Hero />
            <ClientLogos />
            <Services />

            <ShowcaseSection
                id="qui-sommes-nous"
                tab="Qui Sommes-Nous"
                heading="Une Équipe Passionnée au Service de Votre Vision"
                copy="Chez Cliq, nous sommes une équipe de créatifs et de stratèges passionnés, dédiés à transformer vos idées en réalité. Notre expertise couvre tous les aspects du marketing digital et de la communication."
                bullets={vec![
                    AttrValue::from("Marketing d'influence"),
                    AttrValue::from("Social Media & Brand Content"),
                    AttrValue::from("Événements & Développement Web"),
                ]}
                cta="DEMANDER UN DEVIS"
                cta_href={format!("mailto:{}", config::CONTACT_EMAIL)}
                video_src="https://player.vimeo.com/video/1126659044?badge=0&autopause=0&player_id=0&app_id=58479&autoplay=1&muted=1&loop=1"
                video_title="À propos de Cliq"
                media_side={MediaSide::Left}
                video_aspect="56.25%"
            />

            <ShowcaseSection
                id="chez-cliq"
                tab="Chez Cliq"
                heading="L'Esprit Cliq : Créativité, Innovation & Passion"
                copy="Découvrez l'univers unique de Cliq, où chaque projet est une nouvelle aventure créative. Notre équipe passionnée transforme vos idées en expériences digitales exceptionnelles."
                bullets={vec![
                    AttrValue::from("Équipe créative passionnée"),
                    AttrValue::from("Innovation constante"),
                    AttrValue::from("Approche personnalisée"),
                    AttrValue::from("Excellence dans chaque détail"),
                ]}
                cta="DÉCOUVRIR NOTRE ÉQUIPE"
                cta_href="#qui-sommes-nous"
                video_src="https://player.vimeo.com/video/1126504474?badge=0&autopause=0&autoplay=1&loop=1&player_id=0&app_id=58479"
                video_title="Chez Cliq - Behind the Scenes"
                media_side={MediaSide::Right}
            />

            <ShowcaseSection
                id="nos-realisations"
                tab="Nos Réalisations"
                heading="Une Agence Créative au Service de Votre Vision"
                copy="Chez Cliq, nous transformons vos concepts en contenus visuels exceptionnels. Notre approche créative et notre expertise technique nous permettent de créer des vidéos qui marquent les esprits et génèrent des résultats concrets."
                bullets={vec![
                    AttrValue::from("Production vidéo professionnelle"),
                    AttrValue::from("Stratégie créative sur mesure"),
                    AttrValue::from("Équipe d'experts dédiés"),
                ]}
                cta="DÉCOUVRIR NOS SERVICES"
                cta_href="#services"
                video_src="https://player.vimeo.com/video/1126662727?badge=0&autopause=0&player_id=0&app_id=58479&autoplay=1&loop=1"
                video_title="IMG_2599"
                media_side={MediaSide::Left}
            />

            <InstagramBanner />
            <Footer />

            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    background: white;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .reveal.is-visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        transition: none;
                        transform: none;
                    }
                }
                "#}
            </style>
        </main>
    }
}
