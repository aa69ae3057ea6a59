use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-top">
                <div class="footer-brand">
                    <img src="/assets/codemypixel-logo.png" alt={config::BRAND_NAME} width="48" height="48" />
                    <h2>{"CodemyPixel"}</h2>
                    <p>{"Your imagination, our code,"}<br/>{"pixel-perfect reality"}</p>
                </div>

                <div class="footer-contact">
                    <h3>{"Get In Touch"}</h3>
                    <div class="contact-item">
                        <p class="contact-label">{"Office"}</p>
                        <p>{config::OFFICE_ADDRESS}</p>
                    </div>
                    <div class="contact-item">
                        <p class="contact-label">{"Email"}</p>
                        <a href={config::contact_mailto("Project enquiry")}>{config::CONTACT_EMAIL}</a>
                    </div>
                    <div class="contact-item">
                        <p class="contact-label">{"WhatsApp"}</p>
                        <a href={config::whatsapp_url()} target="_blank" rel="noopener noreferrer">
                            {config::WHATSAPP_DISPLAY}
                        </a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <span>{format!("©{} TEAM {} All Right Reserved", year, config::BRAND_NAME)}</span>
                <div class="social-links">
                    <span>{"Follow us"}</span>
                    <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer" aria-label="Facebook">{"Facebook"}</a>
                    <a href={config::YOUTUBE_URL} target="_blank" rel="noopener noreferrer" aria-label="YouTube">{"YouTube"}</a>
                    <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>
            </div>
        </footer>
    }
}
