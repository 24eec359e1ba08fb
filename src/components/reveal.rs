use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::content::Region;
use crate::state::reveal::Visibility;

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live intersection watch on one region. Dropping it stops the watch, so
/// it can never outlive the element it observes.
struct RegionWatch {
    observer: IntersectionObserver,
    target: Element,
    _callback: IntersectionCallback,
}

impl RegionWatch {
    fn attach(
        region: Region,
        target: Element,
        setter: UseStateSetter<Visibility>,
    ) -> Result<Self, JsValue> {
        // The callback keeps its own copy of the state; the component only
        // hears about the single transition.
        let mut visibility = Visibility::Hidden;
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = entry.intersection_ratio();
                if visibility.observe(ratio) {
                    info!("{} revealed at ratio {:.2}", region, ratio);
                    setter.set(Visibility::Visible);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&target);
        debug!("Watching {}", region);

        Ok(Self {
            observer,
            target,
            _callback: callback,
        })
    }
}

impl Drop for RegionWatch {
    fn drop(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

/// Reveals `region` the first time enough of it scrolls into view.
///
/// The returned ref has to be attached to the region's root element. When the
/// browser cannot observe intersections the region starts out visible.
#[hook]
pub fn use_scroll_reveal(region: Region) -> (NodeRef, Visibility) {
    let node_ref = use_node_ref();
    let visibility = use_state(|| {
        let supported = intersection_observer_supported();
        if !supported {
            warn!("IntersectionObserver unavailable, showing {} immediately", region);
        }
        Visibility::initial(supported)
    });

    {
        let node_ref = node_ref.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |region| {
                let region = *region;
                let watch = if visibility.is_visible() {
                    None
                } else if let Some(target) = node_ref.cast::<Element>() {
                    match RegionWatch::attach(region, target, visibility.setter()) {
                        Ok(watch) => Some(watch),
                        Err(err) => {
                            warn!("Could not observe {}: {:?}", region, err);
                            visibility.set(Visibility::Visible);
                            None
                        }
                    }
                } else {
                    warn!("{} has no element to observe", region);
                    visibility.set(Visibility::Visible);
                    None
                };

                move || drop(watch)
            },
            region,
        );
    }

    (node_ref, *visibility)
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub region: Region,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let (node_ref, visibility) = use_scroll_reveal(props.region);

    html! {
        <@{props.region.tag()}
            id={props.region.anchor()}
            ref={node_ref}
            class={classes!("region", props.class.clone())}
            style={visibility.style()}
        >
            { for props.children.iter() }
        </@>
    }
}
