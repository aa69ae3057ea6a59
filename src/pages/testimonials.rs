use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    country: &'static str,
    time: &'static str,
    image: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Working with CodeMyPixel has been a game-changer. Their communication is clear, consistent, and proactive, and they truly treat your project like it's their own. The team doesn't just follow instructions, they bring creative insight, structure, and solutions that elevate the entire build. They're honest, hard-working, and deeply committed to delivering real value.",
        name: "Stephen Smith",
        country: "USA",
        time: "5 months ago",
        image: "/testimonials-avatar/stephen.png",
    },
    Testimonial {
        quote: "A great addition to any team with in-depth experience on many levels. Life Saver. Thanks again. The team comes highly recommended as I will continue working with CodeMyPixel.",
        name: "Ajani Rudisill",
        country: "USA",
        time: "10 months ago",
        image: "/testimonials-avatar/ajani.png",
    },
    Testimonial {
        quote: "CodeMyPixel was a pleasure to work with on our website development project. Their professionalism shone through in the quality of their work, and they consistently delivered on time while maintaining proactive communication. Highly recommend!",
        name: "Mathewh Iatt",
        country: "USA",
        time: "6 months ago",
        image: "/testimonials-avatar/Mathewh Iatt.png",
    },
    Testimonial {
        quote: "Amazing work done here! Exceeded expectations. The team worked very hard and put their heart into it. They tried everything to make things work and in the end it did work. Thank you so much for this order! Will work together again for sure.",
        name: "Romeo Lombardi",
        country: "Romania",
        time: "4 months ago",
        image: "/testimonials-avatar/Romeo Lombardi.png",
    },
    Testimonial {
        quote: "CodeMyPixel truly excelled with their work, demonstrating incredible professionalism and an unparalleled attention to detail that EXCEEDED all expectations. Working alongside them felt seamless thanks to their proactive communication and deep understanding of the project's nuances. Highly recommended!",
        name: "Sandeep Rudra",
        country: "Germany",
        time: "7 months ago",
        image: "/testimonials-avatar/sandeep.png",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

// Fade out, swap the testimonial, then fade back in.
fn transition_to(active: UseStateHandle<usize>, transitioning: UseStateHandle<bool>, target: usize) {
    transitioning.set(true);
    Timeout::new(config::TESTIMONIAL_FADE_OUT_MS, move || {
        active.set(target);
        Timeout::new(config::TESTIMONIAL_FADE_IN_MS, move || {
            transitioning.set(false);
        })
        .forget();
    })
    .forget();
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let active = use_state(|| 0usize);
    let transitioning = use_state(|| false);
    let len = TESTIMONIALS.len();

    {
        let active = active.clone();
        let transitioning = transitioning.clone();
        // use_interval clears itself when the section unmounts.
        use_interval(
            move || transition_to(active.clone(), transitioning.clone(), next_index(*active, len)),
            config::TESTIMONIAL_ROTATE_MS,
        );
    }

    let on_previous = {
        let active = active.clone();
        let transitioning = transitioning.clone();
        Callback::from(move |_: MouseEvent| {
            transition_to(active.clone(), transitioning.clone(), previous_index(*active, len))
        })
    };
    let on_next = {
        let active = active.clone();
        let transitioning = transitioning.clone();
        Callback::from(move |_: MouseEvent| {
            transition_to(active.clone(), transitioning.clone(), next_index(*active, len))
        })
    };

    let testimonial = &TESTIMONIALS[*active % len];
    let image_style = if *transitioning {
        "opacity: 0.6; transform: scale(0.95); transition: opacity 0.7s ease-in-out, transform 0.7s ease-in-out;"
    } else {
        "opacity: 1; transform: scale(1); transition: opacity 0.7s ease-in-out, transform 0.7s ease-in-out;"
    };
    let text_style = if *transitioning {
        "filter: blur(4px); transition: filter 0.7s ease-in-out;"
    } else {
        "filter: blur(0px); transition: filter 0.7s ease-in-out;"
    };

    html! {
        <section class="testimonials-section">
            <div class="testimonial-card">
                <img class="testimonial-avatar" src={testimonial.image} alt={testimonial.name} style={image_style} />
                <div class="testimonial-body">
                    <blockquote style={text_style}>{format!("\"{}\"", testimonial.quote)}</blockquote>
                    <div class="testimonial-author" style={text_style}>
                        <div class="author-name">{testimonial.name}</div>
                        <div class="author-meta">{format!("{} • {}", testimonial.country, testimonial.time)}</div>
                    </div>
                </div>
            </div>
            <div class="testimonial-nav">
                <button class="nav-arrow" aria-label="Previous testimonial" onclick={on_previous}>{"‹"}</button>
                <button class="nav-arrow" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
            </div>
        </section>
    }
}
