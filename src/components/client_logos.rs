use yew::prelude::*;

use crate::browser;

#[function_component(ClientLogos)]
pub fn client_logos() -> Html {
    let logos: Vec<u32> = (1..=8).collect();
    let animate = !browser::prefers_reduced_motion();

    // The strip is duplicated so the marquee loops without a visible seam.
    let strip = |keys: &str| -> Html {
        html! {
            <div class="logos-track" aria-hidden={(keys == "copy").then(|| "true")}>
                {
                    logos.iter().map(|index| {
                        html! {
                            <img
                                key={format!("{}-{}", keys, index)}
                                src={format!("/assets/clients/client-{}.png", index)}
                                alt={format!("Client {}", index)}
                                class="logo-item"
                                loading="lazy"
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    };

    html! {
        <section class="client-logos">
            <p class="logos-title">{"Ils nous font confiance"}</p>
            <div class={classes!("logos-marquee", animate.then(|| "animated"))}>
                { strip("main") }
                { strip("copy") }
            </div>

            <style>
                {r#"
                .client-logos {
                    padding: 3rem 0;
                    background: white;
                    overflow: hidden;
                }

                .logos-title {
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.9rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin: 0 0 2rem;
                }

                .logos-marquee {
                    display: flex;
                    width: max-content;
                }

                .logos-track {
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                    padding: 0 2rem;
                }

                .logos-marquee.animated {
                    animation: logos-scroll 28s linear infinite;
                }

                .logo-item {
                    height: 2.5rem;
                    object-fit: contain;
                    filter: grayscale(1);
                    opacity: 0.6;
                    transition: opacity 0.2s ease, filter 0.2s ease;
                }

                .logo-item:hover {
                    filter: none;
                    opacity: 1;
                }

                @keyframes logos-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </section>
    }
}
