use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::content::FAQ;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub children: Children,
}

fn item_class(is_open: bool) -> Classes {
    classes!("faq-item", is_open.then_some("open"))
}

fn toggle_icon(is_open: bool) -> &'static str {
    if is_open { "−" } else { "+" }
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={item_class(*is_open)}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{toggle_icon(*is_open)}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <div class="section-title">
                    <div class="kicker">{"FAQ"}</div>
                    <h2>{"Questions fréquentes"}</h2>
                </div>
                <div class="faq-list">
                    { for FAQ.iter().map(|entry| html! {
                        <FaqItem question={entry.question}>
                            <p>{entry.answer}</p>
                        </FaqItem>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-section {
                    border-bottom: 1px solid #e2e8f0;
                    background: #fff;
                    padding: 3rem 0;
                }
                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .faq-item {
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    background: #fff;
                    padding: 1rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }
                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    border: none;
                    background: none;
                    padding: 0;
                    text-align: left;
                    cursor: pointer;
                    font: inherit;
                }
                .question-text {
                    font-weight: 600;
                    color: #0f172a;
                }
                .toggle-icon {
                    font-size: 1.25rem;
                    color: #0284c7;
                }
                .faq-answer p {
                    margin: 0.75rem 0 0;
                    color: #475569;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_item_gets_the_open_class() {
        assert!(item_class(true).contains("open"));
        assert!(!item_class(false).contains("open"));
        assert!(item_class(false).contains("faq-item"));
    }

    #[test]
    fn icon_follows_state() {
        assert_eq!(toggle_icon(false), "+");
        assert_eq!(toggle_icon(true), "−");
    }
}
