use yew::prelude::*;
use log::info;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct BookingButtonProps {
    #[prop_or(AttrValue::Static("Book a Free Consultancy"))]
    pub label: AttrValue,
}

/// Opens the external booking page in a new tab. No estimate data is passed along.
#[function_component(BookingButton)]
pub fn booking_button(props: &BookingButtonProps) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let url = config::booking_url();
        info!("Opening booking page {}", url);
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                gloo_console::error!("Could not open booking page");
            }
        }
    });

    html! {
        <button class="booking-button" {onclick}>
            <span>{props.label.clone()}</span>
        </button>
    }
}
