use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What services do you provide?",
        answer: "Managed offshore development, AI automation and agents, SaaS, ERP CRM, low code solutions, and microservices.",
    },
    FaqEntry {
        question: "How does your pricing compare to U.S. teams?",
        answer: "Typical savings of 70 to 80% vs equivalent U.S. engineering rates, depending on scope and seniority.",
    },
    FaqEntry {
        question: "How do you ensure code quality and delivery?",
        answer: "U.S. grade processes: code reviews, CI/CD pipelines, automated tests, and scheduled demo milestones.",
    },
    FaqEntry {
        question: "Who will manage my project day to day?",
        answer: "A dedicated project manager timezone aligned plus engineering leads and QA. We handle hiring and coordination.",
    },
    FaqEntry {
        question: "How do you handle timezones and communication?",
        answer: "We align overlapping hours, provide Slack or Teams channels, weekly reports, and async updates for U.S. business hours.",
    },
    FaqEntry {
        question: "Can you work with our existing tech stack?",
        answer: "Yes. We integrate with most stacks including cloud, CI, databases, and LLMs. We adapt to your tooling and standards.",
    },
    FaqEntry {
        question: "What about IP ownership and code rights?",
        answer: "All IP and deliverables are transferred to you under the contract. Full ownership is guaranteed.",
    },
    FaqEntry {
        question: "How do you secure our data and systems?",
        answer: "Secure by default practices: encrypted transport, secrets management, access control, and optional audits and pen tests.",
    },
    FaqEntry {
        question: "Do you comply with privacy and industry standards?",
        answer: "We can implement GDPR, SOC 2, and other compliance controls as part of scope or via add on engagements.",
    },
    FaqEntry {
        question: "Can I start with a pilot or short engagement?",
        answer: "Yes. We recommend a 4 to 8 week pilot to validate fit, deliverables, and processes before scale up.",
    },
    FaqEntry {
        question: "What is your hiring and retention approach?",
        answer: "We hire senior developers and provide continuous training, competitive compensation, and client embedded workflows to reduce churn.",
    },
    FaqEntry {
        question: "How do you price projects fixed T&M or retainer?",
        answer: "We offer flexible models: fixed price for well defined scopes, T&M for evolving work, and monthly retainers for long term teams.",
    },
    FaqEntry {
        question: "Will I have direct access to engineers?",
        answer: "Yes. You will get direct channels to engineers plus a single point of contact for coordination.",
    },
    FaqEntry {
        question: "How long does onboarding take?",
        answer: "Onboarding typically takes 1 to 3 weeks for discovery, access, kickoff, and first sprint planning.",
    },
    FaqEntry {
        question: "How do you handle support and maintenance?",
        answer: "We provide SLA based support plans, bug fix windows, and optional 24/7 monitoring and incident response.",
    },
    FaqEntry {
        question: "Can you share case studies or references?",
        answer: "Absolutely. We will provide relevant case studies and client references tailored to your industry on request. Mail us at Admin@codemypixel.com",
    },
];

// Kept in the data but not shown on the page.
const HIDDEN_QUESTIONS: &[&str] = &[
    "How do you secure our data and systems?",
    "How does your pricing compare to U.S. teams?",
    "Do you comply with privacy and industry standards?",
    "How do you handle support and maintenance?",
    "How long does onboarding take?",
];

fn visible_entries() -> Vec<&'static FaqEntry> {
    FAQ_ENTRIES
        .iter()
        .filter(|e| !HIDDEN_QUESTIONS.contains(&e.question))
        .collect()
}

/// Opens `index` if closed, closes it if open. Other open items are untouched.
pub fn toggle_open(open: &[usize], index: usize) -> Vec<usize> {
    if open.contains(&index) {
        open.iter().copied().filter(|&i| i != index).collect()
    } else {
        let mut next = open.to_vec();
        next.push(index);
        next
    }
}

#[styled_component]
pub fn FaqSection() -> Html {
    let open_items = use_state(Vec::<usize>::new);
    let entries = visible_entries();

    let answer_closed = css!(
        r#"
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
        "#
    );
    let answer_open = css!(
        r#"
        max-height: 24rem;
        opacity: 1;
        overflow: hidden;
        transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
        "#
    );

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-intro">
                <h2>{"Frequently Asked Questions"}</h2>
                <p>{"Get answers to common questions about our offshore development services and processes."}</p>
                <a href={config::contact_mailto("Question about your services")} class="faq-contact">
                    {"Still curious? Email us"}
                </a>
            </div>
            <div class="faq-items">
                { for entries.into_iter().enumerate().map(|(index, entry)| {
                    let is_open = open_items.contains(&index);
                    let toggle = {
                        let open_items = open_items.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open_items.set(toggle_open(&open_items, index));
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))} key={index}>
                            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            <div class={if is_open { answer_open.clone() } else { answer_closed.clone() }}>
                                <p class="faq-answer">{entry.answer}</p>
                            </div>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_questions_are_filtered_out() {
        let visible = visible_entries();
        assert_eq!(visible.len(), FAQ_ENTRIES.len() - HIDDEN_QUESTIONS.len());
        assert!(visible.iter().all(|e| !HIDDEN_QUESTIONS.contains(&e.question)));
        assert_eq!(visible[0].question, "What services do you provide?");
    }

    #[test]
    fn toggling_allows_several_open_items() {
        let open = toggle_open(&[], 2);
        let open = toggle_open(&open, 5);
        assert_eq!(open, vec![2, 5]);

        let open = toggle_open(&open, 2);
        assert_eq!(open, vec![5]);
    }
}
