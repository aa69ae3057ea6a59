use yew::prelude::*;

use crate::config;

#[function_component(Book)]
pub fn book() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="book-page">
            <section class="book-hero">
                <h1>{"Book a Free Consultation"}</h1>
                <p>{"Pick a 30 minute slot. We'll go through your roadmap, hiring plan and delivery options."}</p>
            </section>
            <div class="cal-embed" id={format!("cal-inline-{}", config::BOOKING_NAMESPACE)}>
                <iframe
                    src={config::booking_embed_url()}
                    title="Booking calendar"
                    style="width: 100%; height: 600px; overflow: auto; border: 0;"
                    loading="lazy"
                ></iframe>
            </div>
            <p class="book-fallback">
                {"Calendar not loading? "}
                <a href={config::booking_url()} target="_blank" rel="noopener noreferrer">{"Open the booking page"}</a>
            </p>
        </div>
    }
}
