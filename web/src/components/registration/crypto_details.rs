//! Step 3: Crypto Details

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::{ValidationErrors, WizardError};
use shared::dto::registration::{Blockchain, Country, CryptoDetailsInput};

use super::show_verdict;
use crate::components::form::{field_error, options, Field, SelectField, TextField};

#[component]
pub fn CryptoDetailsForm(
    on_submit: Callback<CryptoDetailsInput, Result<(), WizardError>>,
    on_back: Callback<()>,
) -> impl IntoView {
    let values = RwSignal::new(CryptoDetailsInput::default());
    let errors = RwSignal::new(ValidationErrors::new());

    let blockchain = Field::new(values, |v| v.blockchain.as_str(), |v, s| v.blockchain = s);
    let wallet_address = Field::new(values, |v| v.wallet_address.as_str(), |v, s| v.wallet_address = s);
    let tax_id = Field::new(values, |v| v.tax_id.as_str(), |v, s| v.tax_id = s);
    let tax_country = Field::new(values, |v| v.tax_country.as_str(), |v, s| v.tax_country = s);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        show_verdict(errors, on_submit.run(values.get_untracked()));
    };

    view! {
        <form class="wizard-form" on:submit=submit>
            <SelectField
                label="Preferred Blockchain"
                name="blockchain"
                placeholder="Select blockchain"
                options={options::<Blockchain>()}
                value=blockchain.value()
                on_input=blockchain.on_input()
                error=field_error(errors, "blockchain")
            />
            <TextField
                label="Wallet Address (Optional)"
                name="walletAddress"
                placeholder="Enter wallet address"
                value=wallet_address.value()
                on_input=wallet_address.on_input()
                error=field_error(errors, "walletAddress")
            />
            <TextField
                label="Tax ID / VAT Number (Optional)"
                name="taxId"
                placeholder="Enter tax ID or VAT number"
                value=tax_id.value()
                on_input=tax_id.on_input()
                error=field_error(errors, "taxId")
            />
            <SelectField
                label="Tax Country (Optional)"
                name="taxCountry"
                placeholder="Select tax country"
                options={options::<Country>()}
                value=tax_country.value()
                on_input=tax_country.on_input()
                error=field_error(errors, "taxCountry")
            />
            <div class="wizard-actions">
                <button type="button" class="btn btn-outline" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <button type="submit" class="btn">"Submit"</button>
            </div>
        </form>
    }
}
