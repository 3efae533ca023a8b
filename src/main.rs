use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};

mod config;
mod scroll_spy;
mod contact {
    pub mod form;
    pub mod relay;
    pub mod whatsapp;
}
mod components {
    pub mod contact;
    pub mod footer;
    pub mod nav;
    pub mod pricing;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            warn!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Página no encontrada"}</h1>
                    <Link<Route> to={Route::Home}>
                        {"Volver al inicio"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
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
    config::log_build_config();
    yew::Renderer::<App>::new().render();
}
