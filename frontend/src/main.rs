use yew::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod hooks;
mod presentation;
mod visibility;
mod components {
    pub mod section;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <main>
            <Home />
        </main>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
