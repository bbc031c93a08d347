//! Step 1: Business Details

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::{ValidationErrors, WizardError};
use shared::dto::registration::{BusinessDetailsInput, Country, IndustryType, LegalEntityType};

use super::show_verdict;
use crate::components::form::{field_error, options, Field, SelectField, TextField};

#[component]
pub fn BusinessDetailsForm(
    on_next: Callback<BusinessDetailsInput, Result<(), WizardError>>,
) -> impl IntoView {
    let values = RwSignal::new(BusinessDetailsInput::default());
    let errors = RwSignal::new(ValidationErrors::new());

    let business_name = Field::new(values, |v| v.business_name.as_str(), |v, s| v.business_name = s);
    let country = Field::new(values, |v| v.country.as_str(), |v, s| v.country = s);
    let legal_entity_type = Field::new(values, |v| v.legal_entity_type.as_str(), |v, s| v.legal_entity_type = s);
    let registration_number =
        Field::new(values, |v| v.registration_number.as_str(), |v, s| v.registration_number = s);
    let industry_type = Field::new(values, |v| v.industry_type.as_str(), |v, s| v.industry_type = s);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        show_verdict(errors, on_next.run(values.get_untracked()));
    };

    view! {
        <form class="wizard-form" on:submit=on_submit>
            <TextField
                label="Business Name"
                name="businessName"
                placeholder="Enter business name"
                value=business_name.value()
                on_input=business_name.on_input()
                error=field_error(errors, "businessName")
            />
            <SelectField
                label="Country"
                name="country"
                placeholder="Select country"
                options={options::<Country>()}
                value=country.value()
                on_input=country.on_input()
                error=field_error(errors, "country")
            />
            <SelectField
                label="Legal Entity Type"
                name="legalEntityType"
                placeholder="Select entity type"
                options={options::<LegalEntityType>()}
                value=legal_entity_type.value()
                on_input=legal_entity_type.on_input()
                error=field_error(errors, "legalEntityType")
            />
            <TextField
                label="Registration Number"
                name="registrationNumber"
                placeholder="Enter registration number"
                value=registration_number.value()
                on_input=registration_number.on_input()
                error=field_error(errors, "registrationNumber")
            />
            <SelectField
                label="Industry Type"
                name="industryType"
                placeholder="Select industry type"
                options={options::<IndustryType>()}
                value=industry_type.value()
                on_input=industry_type.on_input()
                error=field_error(errors, "industryType")
            />
            <div class="wizard-actions">
                <button type="submit" class="btn">"Next"</button>
            </div>
        </form>
    }
}
