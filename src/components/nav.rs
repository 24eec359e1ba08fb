use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::BRAND;
use crate::content::Region;
use crate::state::menu::MenuState;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = menu.toggled();
            debug!("Menu {}", if next.is_open() { "opened" } else { "closed" });
            menu.set(next);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a class="nav-logo" href="#">{BRAND}</a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7" />
                    </svg>
                </button>
                <ul class={menu.list_class()}>
                    {
                        Region::ALL.iter().map(|region| html! {
                            <li key={region.anchor()}>
                                <a class="nav-link" href={region.href()}>{region.label()}</a>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>
        </nav>
    }
}
