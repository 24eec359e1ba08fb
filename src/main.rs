use log::info;
use yew::prelude::*;

mod config;
mod content;
mod state {
    pub mod menu;
    pub mod presence;
    pub mod reveal;
    pub mod spotlight;
}
mod components {
    pub mod icons;
    pub mod nav;
    pub mod reveal;
    pub mod service_card;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}
