use yew::prelude::*;

use crate::browser;

#[derive(Properties, PartialEq)]
pub struct RibbonTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("#8B5CF6"))]
    pub stroke_color: AttrValue,
    #[prop_or(AttrValue::Static("#FFFFFF"))]
    pub fill_color: AttrValue,
    /// Total draw duration in seconds.
    #[prop_or(4)]
    pub duration_secs: u32,
}

const RIBBON_PATH: &str =
    "M 30 80 Q 100 20 200 70 Q 300 120 400 30 Q 500 0 600 50 Q 700 90 800 30 Q 900 0 1000 40";

/// Decorative ribbon that draws itself across the hero. The stroke-draw
/// effect is a dash-offset keyframe animation; with reduced motion the
/// ribbon renders fully drawn.
#[function_component(RibbonText)]
pub fn ribbon_text(props: &RibbonTextProps) -> Html {
    let animate = !browser::prefers_reduced_motion();
    let draw_secs = props.duration_secs as f64 * 0.6;

    html! {
        <div class={classes!("ribbon-text", props.class.clone())}>
            <svg
                viewBox="0 0 1030 150"
                style={format!("--ribbon-draw: {}s;", draw_secs)}
                class={classes!("ribbon-svg", animate.then(|| "animated"))}
            >
                <path
                    d={RIBBON_PATH}
                    fill="none"
                    stroke="rgba(0,0,0,0.4)"
                    stroke-width="24"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="ribbon-stroke"
                />
                <path
                    d={RIBBON_PATH}
                    fill="none"
                    stroke={props.stroke_color.clone()}
                    stroke-width="20"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="ribbon-stroke"
                />
                <path
                    d={RIBBON_PATH}
                    fill="none"
                    stroke="rgba(255,255,255,0.8)"
                    stroke-width="4"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="ribbon-stroke ribbon-highlight"
                />
                <text
                    x="515"
                    y="82"
                    text-anchor="middle"
                    fill={props.fill_color.clone()}
                    class="ribbon-label"
                >
                    {props.text.clone()}
                </text>
            </svg>

            <style>
                {r#"
                .ribbon-text {
                    width: 100%;
                    filter: drop-shadow(0 8px 24px rgba(0, 0, 0, 0.2));
                }

                .ribbon-svg {
                    width: 100%;
                    height: auto;
                    overflow: visible;
                }

                .ribbon-stroke {
                    stroke-dasharray: 2200;
                    stroke-dashoffset: 0;
                }

                .ribbon-svg.animated .ribbon-stroke {
                    stroke-dashoffset: 2200;
                    animation: ribbon-draw var(--ribbon-draw, 2.4s) ease-in-out forwards;
                }

                .ribbon-svg.animated .ribbon-highlight {
                    animation-delay: 0.1s;
                }

                .ribbon-label {
                    font-size: 2.4rem;
                    font-weight: 800;
                    letter-spacing: 0.08em;
                }

                @keyframes ribbon-draw {
                    to {
                        stroke-dashoffset: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
