//! Contact Page
//!
//! The message form has no delivery channel yet; a submit is written to the console log.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::ContactMessage;

use crate::components::form::{Field, TextAreaField, TextField};
use crate::utils::constants::{SUPPORT_EMAIL, SUPPORT_PHONE};

#[component]
pub fn ContactPage() -> impl IntoView {
    let message = RwSignal::new(ContactMessage::default());
    let no_error = Signal::derive(|| None::<String>);

    let first_name = Field::new(message, |m| m.first_name.as_str(), |m, s| m.first_name = s);
    let last_name = Field::new(message, |m| m.last_name.as_str(), |m, s| m.last_name = s);
    let email = Field::new(message, |m| m.email.as_str(), |m, s| m.email = s);
    let body = Field::new(message, |m| m.message.as_str(), |m, s| m.message = s);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let values = message.get_untracked();
        if values.is_blank() {
            log::debug!("contact form submitted empty");
        }
        match serde_json::to_string(&values) {
            Ok(json) => log::info!("contact message: {}", json),
            Err(e) => log::error!("failed to serialize contact message: {}", e),
        }
    };

    view! {
        <main class="page">
            <section class="page-header">
                <h1>"Contact Us"</h1>
                <p class="muted">"Have questions? We're here to help!"</p>
            </section>

            <section class="page-section contact-layout">
                <div class="contact-details">
                    <h2>"Get in Touch"</h2>
                    <p>
                        "We'd love to hear from you. Please fill out this form and we'll get back to you
                        as soon as possible."
                    </p>
                    <ul class="contact-list">
                        <li>"✉ "<a href=format!("mailto:{}", SUPPORT_EMAIL)>{SUPPORT_EMAIL}</a></li>
                        <li>"☎ "{SUPPORT_PHONE}</li>
                        <li>"💬 Live chat available 24/7"</li>
                    </ul>
                </div>

                <form class="card contact-form" on:submit=on_submit>
                    <div class="form-row">
                        <TextField
                            label="First Name"
                            name="firstName"
                            placeholder="John"
                            value=first_name.value()
                            on_input=first_name.on_input()
                            error=no_error
                        />
                        <TextField
                            label="Last Name"
                            name="lastName"
                            placeholder="Doe"
                            value=last_name.value()
                            on_input=last_name.on_input()
                            error=no_error
                        />
                    </div>
                    <TextField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="john@example.com"
                        value=email.value()
                        on_input=email.on_input()
                        error=no_error
                    />
                    <TextAreaField
                        label="Message"
                        name="message"
                        placeholder="How can we help you?"
                        value=body.value()
                        on_input=body.on_input()
                    />
                    <button type="submit" class="btn">"Send Message"</button>
                </form>
            </section>
        </main>
    }
}
