use yew::prelude::*;

use crate::browser;
use crate::hooks::use_intersection_observer::use_intersection_observer;
use crate::viewport::ObserverOptions;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger offset applied on top of the base transition.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Fades content in the first time it scrolls into view. The `.reveal`
/// transition rules live in the home page stylesheet. When the user asked
/// for reduced motion the content is simply shown, keeping order intact
/// without animating.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let viewport = use_intersection_observer(ObserverOptions {
        threshold: 0.1,
        root_margin: "-100px".to_string(),
        trigger_once: true,
    });

    let reduced_motion = browser::prefers_reduced_motion();
    let visible = reduced_motion || viewport.has_intersected;
    let delay_ms = if reduced_motion { 0 } else { props.delay_ms };

    html! {
        <div
            ref={viewport.node_ref.clone()}
            class={classes!("reveal", visible.then(|| "is-visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
