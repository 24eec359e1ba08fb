use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::config::HOVER_DURATION_MS;
use crate::content::{ServiceEntry, SERVICES};
use crate::state::presence::Presence;
use crate::state::spotlight::{overlay_text, HoverAction, HoverFocus};

/// The four service cards. Owns the single hover focus shared by all of them.
#[function_component(ServiceGrid)]
pub fn service_grid() -> Html {
    let focus = use_reducer(HoverFocus::default);

    let on_enter = {
        let dispatcher = focus.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(HoverAction::Enter(index)))
    };

    let on_leave = {
        let dispatcher = focus.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(HoverAction::Leave(index)))
    };

    html! {
        <div class="services-grid">
            {
                SERVICES.iter().enumerate().map(|(index, entry)| {
                    html! {
                        <ServiceCard
                            key={index}
                            {index}
                            entry={*entry}
                            focused={focus.is_focused(index)}
                            on_enter={on_enter.clone()}
                            on_leave={on_leave.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub index: usize,
    pub entry: ServiceEntry,
    pub focused: bool,
    pub on_enter: Callback<usize>,
    pub on_leave: Callback<usize>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let index = props.index;
    let onmouseenter = props.on_enter.reform(move |_: MouseEvent| index);
    let onmouseleave = props.on_leave.reform(move |_: MouseEvent| index);

    html! {
        <div class="service-card hover-lift" {onmouseenter} {onmouseleave}>
            <div class="service-card-body">
                <div class="service-icon">
                    <Icon icon={props.entry.icon} />
                </div>
                <h3>{props.entry.label}</h3>
            </div>
            <Overlay shown={props.focused} text={overlay_text(props.entry.label)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub shown: bool,
    pub text: AttrValue,
}

/// Fades in when shown and fades out before it is removed from the card.
#[function_component(Overlay)]
fn overlay(props: &OverlayProps) -> Html {
    let presence = use_state(Presence::default);

    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |shown| {
                let mut exit_timer = None;
                let next = if *shown { presence.show() } else { presence.hide() };
                if next != *presence {
                    presence.set(next);
                }
                if next == Presence::Exiting {
                    let settled = next.exit_elapsed();
                    let presence = presence.clone();
                    exit_timer = Some(Timeout::new(HOVER_DURATION_MS, move || {
                        presence.set(settled);
                    }));
                }
                // Dropping a pending Timeout cancels it.
                move || drop(exit_timer)
            },
            props.shown,
        );
    }

    if !presence.is_mounted() {
        return html! {};
    }

    html! {
        <div class={classes!("card-overlay", (*presence == Presence::Exiting).then(|| "exiting"))}>
            <p>{props.text.clone()}</p>
        </div>
    }
}
