use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking_button::BookingButton;
use crate::config;
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="site-header">
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/codemypixel-logo.png" alt={config::BRAND_NAME} width="32" height="32" />
                    <span>{config::BRAND_NAME}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))} onclick={close_menu}>
                    <a href="/#features" class="nav-link">{"Services"}</a>
                    <a href="/#pricing-section" class="nav-link">{"Pricing"}</a>
                    <a href="/#faq" class="nav-link">{"FAQ"}</a>
                    <Link<Route> to={Route::Book} classes="nav-link">{"Book a call"}</Link<Route>>
                    <BookingButton label="Free Consultation" />
                </div>
            </nav>
        </header>
    }
}
