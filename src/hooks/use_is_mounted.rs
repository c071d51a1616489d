use yew::prelude::*;

/// Reports whether the component has gone through its first client-side
/// render. False on the very first paint, true afterwards; browser-only
/// work should wait for it.
#[hook]
pub fn use_is_mounted() -> bool {
    let mounted = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    *mounted
}
