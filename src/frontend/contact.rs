use gloo_net::http::Request;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{motion::RevealOnScroll, toast::Toaster};
use crate::site::{
    catalog::{CONTACT_DETAILS, SOCIAL_LINKS},
    contact::{
        ContactForm, ContactTransport, Field, InFlight, SubmitOutcome, TransportError,
        CONTACT_ENDPOINT, CONTACT_FORM_NAME, FORM_CONTENT_TYPE, FORM_NAME_FIELD,
    },
    navigation::Section,
};

/// The hosted forms endpoint at the site root.
struct FormsEndpoint;

impl ContactTransport for FormsEndpoint {
    async fn post_form(&self, body: &str) -> Result<u16, TransportError> {
        let response = Request::post(CONTACT_ENDPOINT)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body.to_string())
            .map_err(|error| TransportError(error.to_string()))?
            .send()
            .await
            .map_err(|error| TransportError(error.to_string()))?;

        Ok(response.status())
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let refresh = use_force_update();
    let toaster = use_context::<Toaster>();

    let on_change = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |(field, value): (Field, String)| {
            form.borrow_mut().on_change(field, value);
            refresh.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(in_flight) = InFlight::begin(&form) else {
                return;
            };
            refresh.force_update();

            let refresh = refresh.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let (outcome, notice) = in_flight.deliver(&FormsEndpoint).await;

                match outcome {
                    SubmitOutcome::Sent => info!("contact form delivered"),
                    SubmitOutcome::Rejected(status) => {
                        warn!("contact form rejected by endpoint (status {status})")
                    }
                    SubmitOutcome::Failed => warn!("contact form could not reach endpoint"),
                }

                if let Some(toaster) = toaster {
                    toaster.push.emit(notice);
                }
                refresh.force_update();
            });
        })
    };

    let (draft, submitting) = {
        let state = form.borrow();
        (state.draft().clone(), state.is_submitting())
    };

    let input_for = |field: Field, kind: &'static str, autocomplete: &'static str| {
        let oninput = on_change.reform(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            (field, input.value())
        });
        html! {
            <label class="field">
                <span class="field-label">{field.label()}</span>
                <input
                    type={kind}
                    name={field.name()}
                    value={draft.get(field).to_string()}
                    placeholder={field.placeholder()}
                    autocomplete={autocomplete}
                    required=true
                    oninput={oninput}
                />
            </label>
        }
    };

    let on_message_input = on_change.reform(|event: InputEvent| {
        let input: HtmlTextAreaElement = event.target_unchecked_into();
        (Field::Message, input.value())
    });

    html! {
        <section id={Section::Contact.id()} class="section contact">
            <div class="container">
                <RevealOnScroll class="section-heading">
                    <h2>{"Get In "}<span class="gradient-text">{"Touch"}</span></h2>
                    <p>{"Have a project in mind? Let's discuss how we can help your business grow."}</p>
                </RevealOnScroll>

                <div class="contact-grid">
                    <RevealOnScroll class="contact-info">
                        <h3>{"Contact Information"}</h3>
                        <ul class="contact-details">
                            {for CONTACT_DETAILS.iter().map(|detail| html! {
                                <li>
                                    <span class="contact-icon" aria-hidden="true">{detail.icon}</span>
                                    <div>
                                        <div class="contact-label">{detail.label}</div>
                                        <a class="contact-value" href={detail.href}>{detail.value}</a>
                                    </div>
                                </li>
                            })}
                        </ul>

                        <h4>{"Follow Us"}</h4>
                        <div class="social-links">
                            {for SOCIAL_LINKS.iter().map(|social| html! {
                                <a class="social-link" href={social.href} aria-label={social.label}>
                                    {social.short}
                                </a>
                            })}
                        </div>
                    </RevealOnScroll>

                    <RevealOnScroll class="contact-form-wrap glass slide-from-right">
                        <form
                            class="contact-form"
                            name={CONTACT_FORM_NAME}
                            method="POST"
                            data-netlify="true"
                            onsubmit={onsubmit}
                        >
                            <input type="hidden" name={FORM_NAME_FIELD} value={CONTACT_FORM_NAME} />
                            {input_for(Field::Name, "text", "name")}
                            {input_for(Field::Email, "email", "email")}
                            <label class="field">
                                <span class="field-label">{Field::Message.label()}</span>
                                <textarea
                                    name={Field::Message.name()}
                                    value={draft.message.clone()}
                                    placeholder={Field::Message.placeholder()}
                                    rows="5"
                                    required=true
                                    oninput={on_message_input}
                                />
                            </label>
                            <button type="submit" class="btn-primary btn-block" disabled={submitting}>
                                {if submitting { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </RevealOnScroll>
                </div>
            </div>
        </section>
    }
}
