use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let services = [
        "Marketing d'influence",
        "Social Media",
        "Brand Content",
        "Événementiel",
        "Développement Web",
    ];

    let social_links = [
        ("Facebook", config::FACEBOOK_URL),
        ("Instagram", config::INSTAGRAM_URL),
        ("LinkedIn", config::LINKEDIN_URL),
        ("Twitter", config::TWITTER_URL),
    ];

    html! {
        <footer id="footer" class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <img src="/assets/logo-without-bg.png" alt="Cliq Logo" />
                            <span>{"Cliq"}</span>
                        </div>
                        <p>
                            {"Agence 360° spécialisée en marketing d'influence, communication et branding premium."}
                        </p>
                        <div class="footer-contact">
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                {config::CONTACT_EMAIL}
                            </a>
                            <a href={format!("tel:{}", config::CONTACT_PHONE)}>
                                {config::CONTACT_PHONE_DISPLAY}
                            </a>
                            <span>{config::CONTACT_CITY}</span>
                        </div>
                    </div>

                    <div class="footer-column">
                        <h3>{"Services"}</h3>
                        <ul>
                            {
                                services.iter().map(|service| {
                                    html! {
                                        <li key={*service}>
                                            <a href="#services">{*service}</a>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3>{"Suivez-nous"}</h3>
                        <div class="footer-social">
                            {
                                social_links.iter().map(|(name, href)| {
                                    html! {
                                        <a
                                            key={*name}
                                            href={*href}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label={*name}
                                        >
                                            {*name}
                                        </a>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{"© 2025 Cliq Events. Tous droits réservés."}</p>
                    <div class="footer-legal">
                        <a href="#">{"Mentions légales"}</a>
                        <a href="#">{"Politique de confidentialité"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: linear-gradient(135deg, #6a0dad, #4c1d95);
                    color: white;
                }

                .footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem 2rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    margin-bottom: 3rem;
                }

                @media (min-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 2fr 1fr 1fr;
                    }
                }

                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.8rem;
                    margin-bottom: 1.2rem;
                }

                .footer-logo img {
                    width: 2.5rem;
                    height: 2.5rem;
                    object-fit: contain;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 0.5rem;
                    padding: 0.3rem;
                }

                .footer-logo span {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .footer-brand p {
                    color: rgba(255, 255, 255, 0.9);
                    line-height: 1.7;
                    max-width: 24rem;
                    margin: 0 0 1.5rem;
                }

                .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 0.7rem;
                    font-size: 0.9rem;
                }

                .footer-contact a,
                .footer-contact span {
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                }

                .footer-contact a:hover {
                    color: white;
                }

                .footer-column h3 {
                    font-size: 1.1rem;
                    font-weight: 600;
                    margin: 0 0 1.2rem;
                }

                .footer-column ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.7rem;
                }

                .footer-column li a {
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                    font-size: 0.9rem;
                }

                .footer-column li a:hover {
                    color: white;
                }

                .footer-social {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.6rem;
                }

                .footer-social a {
                    background: rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                    font-size: 0.85rem;
                    padding: 0.45rem 0.9rem;
                    border-radius: 0.5rem;
                    transition: background 0.2s ease;
                }

                .footer-social a:hover {
                    background: rgba(255, 255, 255, 0.2);
                    color: white;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    padding-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                @media (min-width: 640px) {
                    .footer-bottom {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }

                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-legal a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }

                .footer-legal a:hover {
                    color: white;
                }
                "#}
            </style>
        </footer>
    }
}
