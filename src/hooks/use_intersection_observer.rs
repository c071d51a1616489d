use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::viewport::{ObserverOptions, VisibilityLatch};

/// What the tracker reports about its bound region. Attach `node_ref` to
/// the element whose visibility matters; everything else is derived.
#[derive(Clone, PartialEq)]
pub struct IntersectionHandle {
    pub node_ref: NodeRef,
    /// Live visibility, toggling as the region scrolls in and out.
    pub is_intersecting: bool,
    /// One-way latch: has the region ever been visible.
    pub has_intersected: bool,
    /// True once the component rendered against a live document.
    pub is_mounted: bool,
}

/// Observe viewport visibility of one region.
///
/// Observation only starts after the first client render, so an
/// intersection report can never race the mount. With `trigger_once`
/// the observation is released as soon as the latch fires. A ref that
/// never binds to an element leaves the tracker inert; that is a no-op,
/// not an error.
#[hook]
pub fn use_intersection_observer(options: ObserverOptions) -> IntersectionHandle {
    let node_ref = use_node_ref();
    let is_intersecting = use_state(|| false);
    let has_intersected = use_state(|| false);
    let is_mounted = use_state(|| false);

    {
        let is_mounted = is_mounted.clone();
        use_effect_with_deps(
            move |_| {
                is_mounted.set(true);
                || ()
            },
            (),
        );
    }

    {
        let node_ref = node_ref.clone();
        let is_intersecting = is_intersecting.clone();
        let has_intersected = has_intersected.clone();
        use_effect_with_deps(
            move |(mounted, options): &(bool, ObserverOptions)| {
                let mut registration: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(Array, IntersectionObserver)>,
                )> = None;

                if *mounted {
                    if let Some(element) = node_ref.cast::<Element>() {
                        let mut latch = VisibilityLatch::new(options.trigger_once);

                        let callback = Closure::wrap(Box::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                if let Ok(entry) =
                                    entries.get(0).dyn_into::<IntersectionObserverEntry>()
                                {
                                    let newly_latched = latch.record(entry.is_intersecting());
                                    is_intersecting.set(latch.is_intersecting());
                                    if newly_latched {
                                        has_intersected.set(true);
                                    }
                                    if latch.observation_released() {
                                        observer.disconnect();
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(Array, IntersectionObserver)>);

                        let init = IntersectionObserverInit::new();
                        init.set_threshold(&JsValue::from(options.threshold));
                        init.set_root_margin(&options.root_margin);

                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &init,
                        ) {
                            observer.observe(&element);
                            registration = Some((observer, callback));
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = registration {
                        observer.disconnect();
                    }
                }
            },
            (*is_mounted, options),
        );
    }

    IntersectionHandle {
        node_ref,
        is_intersecting: *is_intersecting,
        has_intersected: *has_intersected,
        is_mounted: *is_mounted,
    }
}
