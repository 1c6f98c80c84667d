use crate::shared::icons::icon;
use leptos::prelude::*;

const FAQ: [(&str, &str); 5] = [
    (
        "What type of wood do you use?",
        "We work mainly with teak, sheesham and mango wood. Engineered wood is available on request for budget projects.",
    ),
    (
        "How long does a custom furniture order take?",
        "Most pieces take two to four weeks depending on size and finish. We confirm the timeline with the quote.",
    ),
    (
        "Do you provide installation?",
        "Yes. Delivery and installation within the city are included for doors, windows and fitted furniture.",
    ),
    (
        "Can you repair or polish old furniture?",
        "We repair joints, replace damaged parts and refinish antique and everyday furniture.",
    ),
    (
        "How do I get a price estimate?",
        "Send us a message through the contact form or add products to your quote list and we will call you back.",
    ),
];

/// Аккордеон: открытие вопроса закрывает остальные, повторный клик закрывает его
fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </div>
                <div class="faq-list">
                    {FAQ
                        .iter()
                        .enumerate()
                        .map(|(index, &(question, answer))| {
                            let expanded = move || open.get() == Some(index);
                            view! {
                                <div class="faq-item">
                                    <button
                                        class="faq-question"
                                        aria-expanded=move || expanded().to_string()
                                        on:click=move |_| open.update(|o| *o = toggle(*o, index))
                                    >
                                        <span>{question}</span>
                                        <span class="toggle-icon" class:rotated=expanded>{icon("chevron-down")}</span>
                                    </button>
                                    <div class="faq-answer" style:display={move || if expanded() { "block" } else { "none" }}>
                                        <p>{answer}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_question_open() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 4), Some(4));
        assert_eq!(toggle(Some(4), 4), None);
    }
}
