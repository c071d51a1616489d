use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::video_player::VideoPlayer;

/// Which column the video occupies on wide screens.
#[derive(Clone, Copy, PartialEq)]
pub enum MediaSide {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseSectionProps {
    /// Anchor id the header links to.
    pub id: AttrValue,
    /// Small label on the card tab, e.g. "Qui Sommes-Nous".
    pub tab: AttrValue,
    pub heading: AttrValue,
    pub copy: AttrValue,
    pub bullets: Vec<AttrValue>,
    pub cta: AttrValue,
    pub cta_href: AttrValue,
    pub video_src: AttrValue,
    pub video_title: AttrValue,
    #[prop_or(MediaSide::Left)]
    pub media_side: MediaSide,
    #[prop_or(AttrValue::Static("75%"))]
    pub video_aspect: AttrValue,
}

/// Two-column section: a purple speech-bubble card next to a deferred
/// video embed. The three home-page variants of this layout differ only
/// in copy and orientation, so they all render through here.
#[function_component(ShowcaseSection)]
pub fn showcase_section(props: &ShowcaseSectionProps) -> Html {
    let (card_order, media_order) = match props.media_side {
        MediaSide::Left => ("order-2", "order-1"),
        MediaSide::Right => ("order-1", "order-2"),
    };
    let tail_side = match props.media_side {
        MediaSide::Left => "tail-left",
        MediaSide::Right => "tail-right",
    };

    html! {
        <section id={props.id.clone()} class="showcase">
            <div class="showcase-grid">
                <Reveal class={classes!("showcase-card-wrap", card_order)}>
                    <div class={classes!("showcase-card", tail_side)}>
                        <div class="showcase-tab">{props.tab.clone()}</div>

                        <h2>{props.heading.clone()}</h2>
                        <p>{props.copy.clone()}</p>

                        <div class="showcase-bullets">
                            {
                                props.bullets.iter().map(|bullet| {
                                    html! {
                                        <div class="showcase-bullet" key={bullet.as_str()}>
                                            <span class="bullet-dot"></span>
                                            <span>{bullet.clone()}</span>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="showcase-footer">
                            <span class="showcase-pill">{"Cliq"}</span>
                            <a href={props.cta_href.clone()} class="showcase-cta">
                                {props.cta.clone()}
                                <span class="cta-arrow">{"↗"}</span>
                            </a>
                        </div>
                    </div>
                </Reveal>

                <Reveal class={classes!("showcase-media", media_order)} delay_ms={150}>
                    <div class="showcase-video-frame">
                        <VideoPlayer
                            src={props.video_src.clone()}
                            title={props.video_title.clone()}
                            aspect={props.video_aspect.clone()}
                        />
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .showcase {
                    padding: 5rem 1.5rem;
                    background: white;
                    position: relative;
                    overflow: hidden;
                }

                .showcase-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                @media (min-width: 1024px) {
                    .showcase-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }

                    .order-1 { order: 1; }
                    .order-2 { order: 2; }
                }

                .showcase-card {
                    position: relative;
                    background: linear-gradient(135deg, #9333ea, #7e22ce);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 24px 48px rgba(106, 13, 173, 0.25);
                    color: white;
                }

                .showcase-card.tail-left::before,
                .showcase-card.tail-right::before {
                    content: "";
                    position: absolute;
                    top: 2rem;
                    border-top: 20px solid transparent;
                    border-bottom: 20px solid transparent;
                }

                .showcase-card.tail-left::before {
                    left: -1rem;
                    border-right: 20px solid #9333ea;
                }

                .showcase-card.tail-right::before {
                    right: -1rem;
                    border-left: 20px solid #9333ea;
                }

                .showcase-tab {
                    position: absolute;
                    top: -0.75rem;
                    left: 1.5rem;
                    background: #a855f7;
                    border-radius: 9999px;
                    padding: 0.4rem 1rem;
                    font-size: 0.85rem;
                    font-weight: 500;
                }

                .showcase-card h2 {
                    font-size: clamp(1.5rem, 3vw, 1.9rem);
                    font-weight: 700;
                    line-height: 1.25;
                    margin: 1rem 0 1.2rem;
                }

                .showcase-card p {
                    color: #e9d5ff;
                    line-height: 1.7;
                    margin: 0 0 1.5rem;
                }

                .showcase-bullets {
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                }

                .showcase-bullet {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #e9d5ff;
                }

                .bullet-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    background: #d8b4fe;
                    border-radius: 9999px;
                    flex-shrink: 0;
                }

                .showcase-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-top: 2rem;
                }

                .showcase-pill {
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    padding: 0.25rem 0.8rem;
                    font-size: 0.85rem;
                }

                .showcase-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: black;
                    color: white;
                    text-decoration: none;
                    border-radius: 9999px;
                    padding: 0.7rem 1.4rem;
                    font-size: 0.85rem;
                    font-weight: 600;
                    transition: background 0.2s ease;
                }

                .showcase-cta:hover {
                    background: #1f2937;
                }

                .showcase-video-frame {
                    border: 4px solid #a855f7;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.15);
                }
                "#}
            </style>
        </section>
    }
}
