use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod estimator;
mod components {
    pub mod booking_button;
    pub mod dashboard_preview;
    pub mod feature_cards;
    pub mod footer;
    pub mod header;
    pub mod pie_chart;
}
mod pages {
    pub mod book;
    pub mod faq;
    pub mod landing;
    pub mod pricing;
    pub mod testimonials;
}

use components::{footer::Footer, header::Header};
use pages::{book::Book, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book")]
    Book,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Book => {
            info!("Rendering Book page");
            html! { <Book /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
