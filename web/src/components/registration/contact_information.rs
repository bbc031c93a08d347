//! Step 2: Contact Information

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::{ValidationErrors, WizardError};
use shared::dto::registration::ContactInformationInput;

use super::show_verdict;
use crate::components::form::{field_error, Field, TextField};

#[component]
pub fn ContactInformationForm(
    on_next: Callback<ContactInformationInput, Result<(), WizardError>>,
    on_back: Callback<()>,
) -> impl IntoView {
    let values = RwSignal::new(ContactInformationInput::default());
    let errors = RwSignal::new(ValidationErrors::new());

    let contact_name = Field::new(values, |v| v.primary_contact_name.as_str(), |v, s| v.primary_contact_name = s);
    let email = Field::new(values, |v| v.email.as_str(), |v, s| v.email = s);
    let phone_number = Field::new(values, |v| v.phone_number.as_str(), |v, s| v.phone_number = s);
    let business_address = Field::new(values, |v| v.business_address.as_str(), |v, s| v.business_address = s);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        show_verdict(errors, on_next.run(values.get_untracked()));
    };

    view! {
        <form class="wizard-form" on:submit=on_submit>
            <TextField
                label="Primary Contact Name"
                name="primaryContactName"
                placeholder="Enter contact name"
                value=contact_name.value()
                on_input=contact_name.on_input()
                error=field_error(errors, "primaryContactName")
            />
            <TextField
                label="Email"
                name="email"
                input_type="email"
                placeholder="Enter email address"
                value=email.value()
                on_input=email.on_input()
                error=field_error(errors, "email")
            />
            <TextField
                label="Phone Number"
                name="phoneNumber"
                input_type="tel"
                placeholder="Enter phone number"
                value=phone_number.value()
                on_input=phone_number.on_input()
                error=field_error(errors, "phoneNumber")
            />
            <TextField
                label="Business Address"
                name="businessAddress"
                placeholder="Enter business address"
                value=business_address.value()
                on_input=business_address.on_input()
                error=field_error(errors, "businessAddress")
            />
            <div class="wizard-actions">
                <button type="button" class="btn btn-outline" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <button type="submit" class="btn">"Next"</button>
            </div>
        </form>
    }
}
