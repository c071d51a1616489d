use yew::prelude::*;

use crate::hooks::use_is_mounted::use_is_mounted;

#[derive(Properties, PartialEq)]
pub struct ClientOnlyProps {
    #[prop_or_default]
    pub children: Children,
    /// Shown until the first client render; defaults to nothing.
    #[prop_or_default]
    pub fallback: Html,
}

/// Renders its children only after the component is mounted, so markup
/// that depends on browser APIs never appears on a first paint that
/// could disagree with it.
#[function_component(ClientOnly)]
pub fn client_only(props: &ClientOnlyProps) -> Html {
    let mounted = use_is_mounted();

    if !mounted {
        return props.fallback.clone();
    }

    html! { <>{ for props.children.iter() }</> }
}
