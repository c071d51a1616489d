use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_intersection_observer::use_intersection_observer;
use crate::viewport::{GateCommand, ObserverOptions, SettleGate};

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    /// Embed URL of the player iframe.
    pub src: AttrValue,
    /// Accessible description of the video.
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Padding-top percentage that fixes the aspect ratio, so the
    /// placeholder and the loaded player occupy identical footprints.
    #[prop_or(AttrValue::Static("75%"))]
    pub aspect: AttrValue,
}

/// Video embed that defers its iframe until the section is near-visible.
///
/// A fixed-ratio placeholder renders immediately; once the region has
/// been seen and the settle delay ran out, the real player swaps in with
/// the same geometry, so nothing shifts. Navigating away while the delay
/// is pending cancels the load.
#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let viewport = use_intersection_observer(ObserverOptions {
        threshold: 0.05,
        root_margin: "50px".to_string(),
        trigger_once: true,
    });

    let gate = use_mut_ref(SettleGate::new);
    let should_load = use_state(|| false);

    {
        let gate = gate.clone();
        let should_load = should_load.clone();
        use_effect_with_deps(
            move |&(mounted, intersected)| {
                let command = {
                    let mut gate = gate.borrow_mut();
                    let on_mount = if mounted { gate.on_mounted() } else { None };
                    let on_visible = if intersected { gate.on_intersected() } else { None };
                    on_mount.or(on_visible)
                };

                let pending = match command {
                    Some(GateCommand::StartSettle(delay_ms)) => {
                        let gate = gate.clone();
                        let should_load = should_load.clone();
                        Some(Timeout::new(delay_ms, move || {
                            let mut gate = gate.borrow_mut();
                            gate.on_settle_elapsed();
                            if gate.should_load() {
                                should_load.set(true);
                            }
                        }))
                    }
                    _ => None,
                };

                move || {
                    // Dropping a pending Timeout cancels it; the gate is
                    // told so a late callback could never commit a load.
                    if pending.is_some() {
                        gate.borrow_mut().on_teardown();
                    }
                    drop(pending);
                }
            },
            (viewport.is_mounted, viewport.has_intersected),
        );
    }

    let frame_style =
        "position: absolute; top: 0; left: 0; width: 100%; height: 100%; border-radius: 20px;";

    html! {
        <div
            ref={viewport.node_ref.clone()}
            class={props.class.clone()}
            style={format!("padding: {} 0 0 0; position: relative; width: 100%;", props.aspect)}
        >
            {
                if *should_load {
                    html! {
                        <iframe
                            src={props.src.clone()}
                            frameborder="0"
                            allow="autoplay; fullscreen; picture-in-picture; clipboard-write; encrypted-media; web-share"
                            referrerpolicy="strict-origin-when-cross-origin"
                            style={frame_style}
                            title={props.title.clone()}
                        />
                    }
                } else {
                    html! {
                        <div
                            class="video-placeholder"
                            style={format!("{} background-color: #f3f4f6; color: #6b7280; display: flex; align-items: center; justify-content: center;", frame_style)}
                            aria-label={props.title.clone()}
                        >
                            {"Chargement de la vidéo..."}
                        </div>
                    }
                }
            }
        </div>
    }
}
