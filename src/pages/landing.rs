use yew::prelude::*;

use crate::components::booking_button::BookingButton;
use crate::components::dashboard_preview::DashboardPreview;
use crate::components::feature_cards::FeatureCards;
use crate::pages::faq::FaqSection;
use crate::pages::pricing::PricingSection;
use crate::pages::testimonials::TestimonialsSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Offshore engineering teams, built like your own"}</h1>
                <p class="hero-subtitle">
                    {"Senior developers, designers and AI engineers from Bangladesh, managed end to end at a fraction of U.S. rates."}
                </p>
                <BookingButton />
            </section>

            <DashboardPreview />
            <FeatureCards />
            <TestimonialsSection />
            <PricingSection />
            <FaqSection />

            <section class="footer-cta">
                <h2>{"Ready to build your team?"}</h2>
                <p class="subtitle">{"Tell us what you're building and get a delivery plan within a week."}</p>
                <BookingButton />
            </section>

            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #37322F;
                    background: #F7F5F3;
                }

                .hero {
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                    max-width: 900px;
                    margin: 0 auto;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    color: #37322F;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #605A57;
                    margin-bottom: 2rem;
                }

                .booking-button {
                    padding: 0.75rem 2.5rem;
                    background: #37322F;
                    color: #fff;
                    border: none;
                    border-radius: 99px;
                    cursor: pointer;
                    font-size: 0.95rem;
                }

                .booking-button:hover {
                    opacity: 0.9;
                }

                .feature-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1rem;
                    max-width: 1060px;
                    margin: 3rem auto;
                    padding: 0 1rem;
                }

                .feature-card {
                    padding: 1.5rem;
                    border: 1px solid #E0DEDB;
                    border-radius: 8px;
                }

                .feature-card.highlighted {
                    background: #fff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .testimonials-section {
                    max-width: 900px;
                    margin: 4rem auto;
                    padding: 0 1rem;
                }

                .testimonial-card {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }

                .testimonial-avatar {
                    width: 160px;
                    height: 160px;
                    object-fit: cover;
                    border-radius: 8px;
                }

                .faq-section {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 3rem;
                    max-width: 1060px;
                    margin: 4rem auto;
                    padding: 0 1rem;
                }

                .faq-intro {
                    flex: 1;
                    min-width: 240px;
                }

                .faq-items {
                    flex: 2;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    border-bottom: 1px solid #E0DEDB;
                    cursor: pointer;
                    font-size: 1rem;
                    text-align: left;
                }

                .footer-cta {
                    text-align: center;
                    padding: 4rem 2rem;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }

                    .testimonial-card {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
