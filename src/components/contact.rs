use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::contact::form::{ContactAction, ContactState, Field, SubmitStatus};
use crate::contact::submit::Submitter;
use crate::scroll::use_reveal;

static CONTACT_INFO: [(&str, &str, &str); 4] = [
    ("📍", "Our Location", "Jamnagar, Kudrat Residency"),
    ("📞", "Phone Number", "+91 98987 24247"),
    ("✉", "Email Address", "info@devxdiscovery.com"),
    ("🕘", "Working Hours", "Mon - Fri: 9AM - 6PM"),
];

pub static SOCIALS: [&str; 4] = ["facebook", "twitter", "instagram", "linkedin"];

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let state = use_reducer_eq(ContactState::default);
    let submitter = use_memo(|_| Submitter::from_config(), ());
    let is_mounted = use_is_mounted();

    // Success banner hides itself; a newer status or unmount cancels the timer.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |status: &SubmitStatus| {
                let timeout = (*status == SubmitStatus::Success).then(|| {
                    Timeout::new(config::SUCCESS_CLEAR_DELAY_MS, move || {
                        dispatcher.dispatch(ContactAction::ClearStatus);
                    })
                });
                move || drop(timeout)
            },
            state.status,
        );
    }

    let on_input = |field: Field| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let on_message_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let submitter = submitter.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.submitting {
                return;
            }
            let submission = match state.form.validate() {
                Ok(submission) => submission,
                Err(errors) => {
                    state.dispatch(ContactAction::Rejected(errors));
                    return;
                }
            };

            state.dispatch(ContactAction::Started);
            let dispatcher = state.dispatcher();
            let submitter = submitter.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let result = submitter.submit(&submission).await;
                if !is_mounted() {
                    return;
                }
                match result {
                    Ok(()) => {
                        info!("Contact form sent for {}", submission.email);
                        dispatcher.dispatch(ContactAction::Succeeded);
                    }
                    Err(err) => {
                        error!("Error submitting form: {}", err);
                        dispatcher.dispatch(ContactAction::Failed);
                    }
                }
            });
        })
    };

    let field_error = |field: Field| -> Html {
        match state.errors.get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };
    let input_class = |field: Field| classes!("form-input", state.errors.get(field).map(|_| "invalid"));

    html! {
        <div ref={node} class={classes!("container", "contact", "reveal", revealed.then(|| "visible"))}>
            <style>
                {r#"
                    .contact > * + * {
                        margin-top: 3rem;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 2rem;
                    }
                    .card {
                        padding: 1.5rem;
                        background: #fff;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .card + .card {
                        margin-top: 1.5rem;
                    }
                    .card.soft {
                        background: var(--accent-soft);
                        box-shadow: none;
                    }
                    .info-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .info-icon {
                        padding: 0.5rem;
                        border-radius: 50%;
                        background: #ffedd5;
                    }
                    .info-row h4 {
                        margin: 0;
                        color: #1f2937;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .socials a {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #fff;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: background 0.2s;
                    }
                    .socials a:hover {
                        background: #ffedd5;
                    }
                    .socials a span {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        background: var(--accent);
                    }
                    .banner {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.375rem;
                        animation: fadeDown 0.3s ease-out;
                    }
                    .banner.success {
                        color: #15803d;
                        background: #f0fdf4;
                    }
                    .banner.error {
                        color: #b91c1c;
                        background: #fef2f2;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .form-label {
                        display: block;
                        margin-bottom: 0.25rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .form-input {
                        width: 100%;
                        padding: 0.5rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        font: inherit;
                        outline: none;
                        transition: border-color 0.2s, box-shadow 0.2s;
                    }
                    .form-input:focus {
                        border-color: transparent;
                        box-shadow: 0 0 0 2px var(--accent);
                    }
                    .form-input.invalid {
                        border-color: #ef4444;
                    }
                    .field-error {
                        margin: 0.25rem 0 0;
                        font-size: 0.875rem;
                        color: #ef4444;
                    }
                    .map-placeholder {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 400px;
                        border-radius: 0.5rem;
                        background: #e5e7eb;
                        color: #4b5563;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    @media (max-width: 1024px) {
                        .contact-grid, .form-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Contact "}<span class="accent">{"Us"}</span></h2>
                <p>
                    {"Have questions or ready to start your project? Get in touch with our team and we'll get back to you as soon as possible."}
                </p>
            </div>

            <div class="contact-grid">
                <div>
                    <div class="card">
                        <h3>{"Get In Touch"}</h3>
                        { for CONTACT_INFO.iter().map(|(icon, title, details)| html! {
                            <div class="info-row" key={*title}>
                                <span class="info-icon">{*icon}</span>
                                <div>
                                    <h4>{*title}</h4>
                                    <p class="muted">{*details}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="card soft">
                        <h3>{"Connect With Us"}</h3>
                        <p class="muted">
                            {"Follow us on social media to stay updated with our latest news and announcements."}
                        </p>
                        <div class="socials">
                            { for SOCIALS.iter().map(|social| html! {
                                <a key={*social} href="#" aria-label={format!("Follow us on {}", social)}>
                                    <span></span>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="card">
                    <h3>{"Send Us a Message"}</h3>

                    if state.status == SubmitStatus::Success {
                        <div class="banner success" role="status">
                            {"✔ Your message has been sent successfully! We'll get back to you soon."}
                        </div>
                    }
                    if state.status == SubmitStatus::Error {
                        <div class="banner error" role="alert">
                            {"⚠ There was an error sending your message. Please try again later."}
                        </div>
                    }

                    <form onsubmit={onsubmit} novalidate={true}>
                        <div class="form-row">
                            <div>
                                <label for="name" class="form-label">{"Full Name *"}</label>
                                <input
                                    id="name"
                                    type="text"
                                    class={input_class(Field::Name)}
                                    placeholder="John Doe"
                                    value={state.form.name.clone()}
                                    oninput={on_input(Field::Name)}
                                />
                                { field_error(Field::Name) }
                            </div>
                            <div>
                                <label for="email" class="form-label">{"Email Address *"}</label>
                                <input
                                    id="email"
                                    type="email"
                                    class={input_class(Field::Email)}
                                    placeholder="john@example.com"
                                    value={state.form.email.clone()}
                                    oninput={on_input(Field::Email)}
                                />
                                { field_error(Field::Email) }
                            </div>
                        </div>
                        <div class="form-row">
                            <div>
                                <label for="phone" class="form-label">{"Phone Number"}</label>
                                <input
                                    id="phone"
                                    type="tel"
                                    class="form-input"
                                    placeholder="+91 12345 45676"
                                    value={state.form.phone.clone()}
                                    oninput={on_input(Field::Phone)}
                                />
                            </div>
                            <div>
                                <label for="subject" class="form-label">{"Subject *"}</label>
                                <input
                                    id="subject"
                                    type="text"
                                    class={input_class(Field::Subject)}
                                    placeholder="Project Inquiry"
                                    value={state.form.subject.clone()}
                                    oninput={on_input(Field::Subject)}
                                />
                                { field_error(Field::Subject) }
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="message" class="form-label">{"Message *"}</label>
                            <textarea
                                id="message"
                                rows="5"
                                class={input_class(Field::Message)}
                                placeholder="Tell us about your project or inquiry..."
                                value={state.form.message.clone()}
                                oninput={on_message_input}
                            />
                            { field_error(Field::Message) }
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={state.submitting}>
                            { if state.submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </div>
            </div>

            <div class="map-placeholder">
                <div>
                    <p class="map-pin">{"📍"}</p>
                    <p>{"Interactive Map Would Be Here"}</p>
                </div>
            </div>
        </div>
    }
}
