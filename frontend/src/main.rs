use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod reveal;
mod styles;
mod components {
    pub mod footer;
    pub mod header;
    pub mod ui;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod projects;
    pub mod services;
}

use components::{footer::Footer, header::Header};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    projects::Projects,
    services::Services,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Jumps back to the top whenever the route changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    let css = format!("{}{}", styles::GLOBAL_CSS, reveal::style::FADE_IN_UP.css());

    html! {
        <BrowserRouter>
            <style>{css}</style>
            <ScrollToTop />
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
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
