use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

#[function_component(InstagramBanner)]
pub fn instagram_banner() -> Html {
    html! {
        <section class="ig-banner">
            <div class="ig-inner">
                <Reveal class={classes!("ig-copy")}>
                    <h2 class="ig-title">{"Suivez-nous sur Instagram"}</h2>
                    <div class="ig-subtitle">
                        <span class="ig-line"></span>
                        <span>{"pour découvrir nos créations"}</span>
                        <span class="ig-line"></span>
                    </div>
                    <div class="ig-dots">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Reveal>

                <Reveal class={classes!("ig-preview")} delay_ms={200}>
                    <a
                        href={config::INSTAGRAM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="ig-badge"
                        aria-label="Instagram Cliq Events"
                    >
                        <img src="/assets/logo-without-bg.png" alt="Cliq Logo" />
                        <span class="ig-at">{"@"}</span>
                    </a>
                    <img
                        src="/assets/cliq-ig.png"
                        alt="Aperçu du compte Instagram de Cliq Events"
                        class="ig-screenshot"
                        loading="lazy"
                    />
                </Reveal>
            </div>

            <style>
                {r#"
                .ig-banner {
                    padding: 5rem 1.5rem 0;
                    background: linear-gradient(135deg, #faf5ff, #ffffff 50%, #faf5ff);
                    overflow: hidden;
                }

                .ig-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .ig-title {
                    font-size: clamp(2.2rem, 6vw, 4.5rem);
                    font-weight: 900;
                    letter-spacing: -0.02em;
                    background: linear-gradient(90deg, #9333ea, #7e22ce, #6b21a8);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    margin: 0 0 1rem;
                }

                .ig-subtitle {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.8rem;
                    color: #9333ea;
                    font-weight: 700;
                    font-size: clamp(1.1rem, 3vw, 1.8rem);
                }

                .ig-line {
                    height: 1px;
                    width: 3.5rem;
                    background: linear-gradient(90deg, transparent, #a855f7, transparent);
                }

                .ig-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }

                .ig-dots span {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #a855f7;
                    animation: ig-pulse 1.6s ease-in-out infinite;
                }

                .ig-dots span:nth-child(2) { animation-delay: 0.2s; }
                .ig-dots span:nth-child(3) { animation-delay: 0.4s; }

                @media (prefers-reduced-motion: reduce) {
                    .ig-dots span { animation: none; }
                }

                @keyframes ig-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.3; }
                }

                .ig-preview {
                    position: relative;
                    margin-top: 3rem;
                }

                .ig-badge {
                    position: absolute;
                    top: -1.5rem;
                    right: 10%;
                    width: 3.5rem;
                    height: 3.5rem;
                    background: linear-gradient(135deg, #f3e8ff, #e9d5ff);
                    border-radius: 0.8rem;
                    padding: 0.5rem;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.15);
                    transform: rotate(-12deg);
                    transition: transform 0.3s ease;
                }

                .ig-badge:hover {
                    transform: rotate(0deg);
                }

                .ig-badge img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }

                .ig-at {
                    position: absolute;
                    top: -0.4rem;
                    right: -0.4rem;
                    width: 1.3rem;
                    height: 1.3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(90deg, #ec4899, #a855f7);
                    border-radius: 9999px;
                    color: white;
                    font-size: 0.8rem;
                    font-weight: 700;
                }

                .ig-screenshot {
                    width: 100%;
                    max-width: 48rem;
                    border-radius: 1rem 1rem 0 0;
                    box-shadow: 0 -12px 48px rgba(106, 13, 173, 0.18);
                }
                "#}
            </style>
        </section>
    }
}
