use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use log::{debug, info};

use crate::config;
use crate::contact::controller::{submit, ContactFormState};
use crate::contact::delay::DelayHandle;
use crate::contact::validation::Field;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Fired once a request has been accepted and the form reset.
    pub on_accepted: Callback<()>,
    #[prop_or_default]
    pub delay: DelayHandle,
    #[prop_or_else(config::submit_delay)]
    pub submit_delay: std::time::Duration,
}

#[derive(Properties, PartialEq)]
struct FieldErrorProps {
    message: Option<&'static str>,
}

#[function_component(FieldError)]
fn field_error(props: &FieldErrorProps) -> Html {
    match props.message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_state(ContactFormState::default);

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.update_field(field, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.update_field(Field::Message, input.value());
            form.set(next);
        })
    };

    let on_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_consent(input.checked());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let delay = props.delay.clone();
        let submit_delay = props.submit_delay;
        let on_accepted = props.on_accepted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let on_accepted = on_accepted.clone();
            let settling = submit(&mut next, delay.clone(), submit_delay, move || {
                on_accepted.emit(())
            });
            match settling {
                Some(settling) => {
                    info!("Sending quote request");
                    form.set(next);
                    let form = form.clone();
                    spawn_local(async move {
                        form.set(settling.await);
                    });
                }
                None if !next.errors.is_empty() => {
                    debug!("Quote form has {} invalid field(s)", next.errors.len());
                    form.set(next);
                }
                None => {}
            }
        })
    };

    let fields = &form.fields;

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <style>
                {r#"
                .contact-form {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                }
                @media (min-width: 640px) {
                    .contact-form { grid-template-columns: 1fr 1fr; }
                    .contact-form .wide { grid-column: span 2; }
                }
                .contact-form label {
                    display: block;
                    margin-bottom: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #334155;
                }
                .contact-form input[type="text"],
                .contact-form input[type="email"],
                .contact-form input[type="tel"],
                .contact-form textarea {
                    display: block;
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    background: #fff;
                    padding: 0.75rem 1rem;
                    color: #0f172a;
                    font: inherit;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #0ea5e9;
                    box-shadow: 0 0 0 3px #e0f2fe;
                }
                .field-error {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #e11d48;
                }
                .consent-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .submit-button {
                    width: 100%;
                    border: none;
                    border-radius: 1rem;
                    background: #0284c7;
                    padding: 0.75rem 1rem;
                    font-weight: 600;
                    color: #fff;
                    cursor: pointer;
                }
                .submit-button:hover { background: #0369a1; }
                .submit-button:disabled {
                    cursor: not-allowed;
                    opacity: 0.7;
                }
                "#}
            </style>
            <div>
                <label for="name">{"Nom*"}</label>
                <input
                    id="name"
                    name={Field::Name.input_name()}
                    type="text"
                    placeholder="Jean Dupont"
                    value={fields.value(Field::Name).to_string()}
                    oninput={on_text(Field::Name)}
                />
                <FieldError message={form.error(Field::Name)} />
            </div>
            <div>
                <label for="phone">{"Téléphone*"}</label>
                <input
                    id="phone"
                    name={Field::Phone.input_name()}
                    type="tel"
                    placeholder={config::CONTACT.phone_display}
                    value={fields.value(Field::Phone).to_string()}
                    oninput={on_text(Field::Phone)}
                />
                <FieldError message={form.error(Field::Phone)} />
            </div>
            <div>
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name={Field::Email.input_name()}
                    type="text"
                    placeholder={config::CONTACT.email}
                    value={fields.value(Field::Email).to_string()}
                    oninput={on_text(Field::Email)}
                />
                <FieldError message={form.error(Field::Email)} />
            </div>
            <div class="wide">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name={Field::Message.input_name()}
                    rows="4"
                    placeholder="Décrivez votre besoin (fuite, infiltration, diagnostic…)"
                    value={fields.value(Field::Message).to_string()}
                    oninput={on_message}
                />
            </div>
            <div class="wide consent-row">
                <input
                    id="gdpr"
                    type="checkbox"
                    required=true
                    checked={fields.consent}
                    onchange={on_consent}
                />
                <label for="gdpr">
                    {"J’accepte d’être recontacté·e et la "}
                    <a href="/confidentialite">{"politique de confidentialité"}</a>
                    {"."}
                </label>
            </div>
            <div class="wide">
                <button type="submit" class="submit-button" disabled={form.loading}>
                    {if form.loading { "Envoi…" } else { "Demander un devis" }}
                </button>
            </div>
        </form>
    }
}
