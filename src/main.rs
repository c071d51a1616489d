use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod seo;
mod viewport;

mod hooks {
    pub mod use_intersection_observer;
    pub mod use_is_mounted;
}

mod components {
    pub mod client_logos;
    pub mod client_only;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod instagram_banner;
    pub mod reveal;
    pub mod ribbon_text;
    pub mod services;
    pub mod showcase;
    pub mod video_player;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::home::Home;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Head metadata is injected once the app is live in a document.
    use_effect_with_deps(
        move |_| {
            seo::apply();
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
