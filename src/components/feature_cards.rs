use yew::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
    highlighted: bool,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Dedicated offshore teams",
        description: "Senior engineers, designers and QA working in your tools and your sprints.",
        highlighted: true,
    },
    Feature {
        title: "AI automation and agents",
        description: "LLM integrations, workflow automation and custom agents built for production.",
        highlighted: false,
    },
    Feature {
        title: "SaaS, ERP and CRM delivery",
        description: "From first MVP to scaled platforms with CI/CD, tests and demo milestones.",
        highlighted: false,
    },
];

#[function_component(FeatureCards)]
pub fn feature_cards() -> Html {
    html! {
        <section id="features" class="feature-cards">
            { for FEATURES.iter().map(|feature| html! {
                <div class={classes!("feature-card", feature.highlighted.then(|| "highlighted"))}>
                    if feature.highlighted {
                        <div class="feature-progress"><div class="feature-progress-fill"></div></div>
                    }
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            })}
        </section>
    }
}
