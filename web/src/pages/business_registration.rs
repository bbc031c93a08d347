//! Business Registration Page
//!
//! Owns the wizard. Step forms hand their values to a callback and get the wizard's
//! verdict back; accepted values are written to the console log and go nowhere else.

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::{RegistrationStep, RegistrationWizard, StepForm, WizardError};
use serde::Serialize;
use shared::dto::registration::{BusinessDetailsInput, ContactInformationInput, CryptoDetailsInput};
use shared::SiteRoute;

use crate::components::registration::{BusinessDetailsForm, ContactInformationForm, CryptoDetailsForm};

/// Validate `form` against the current step and move on.
fn next_step<F>(wizard: RwSignal<RegistrationWizard>, form: &F) -> Result<(), WizardError>
where
    F: StepForm,
    F::Output: Serialize,
{
    let record = wizard
        .try_update(|wizard| wizard.next(form))
        .unwrap_or(Err(WizardError::Closed))?;
    log_step(F::STEP, &record);
    Ok(())
}

fn log_step<T: Serialize>(step: RegistrationStep, record: &T) {
    match serde_json::to_string(record) {
        Ok(json) => log::info!("{}: {}", step.title(), json),
        Err(e) => log::error!("failed to serialize {}: {}", step.title(), e),
    }
}

#[component]
pub fn BusinessRegistrationPage() -> impl IntoView {
    let wizard = RwSignal::new(RegistrationWizard::new());

    let on_business_details =
        Callback::new(move |input: BusinessDetailsInput| next_step(wizard, &input));
    let on_contact_information =
        Callback::new(move |input: ContactInformationInput| next_step(wizard, &input));
    let on_crypto_details = Callback::new(move |input: CryptoDetailsInput| -> Result<(), WizardError> {
        let record = wizard
            .try_update(|wizard| wizard.submit(&input))
            .unwrap_or(Err(WizardError::Closed))?;
        log_step(RegistrationStep::CryptoDetails, &record);
        Ok(())
    });
    let on_back = Callback::new(move |()| {
        wizard.update(|wizard| {
            wizard.back();
        });
    });

    let step = Memo::new(move |_| wizard.with(|wizard| wizard.step()));
    let is_open = Memo::new(move |_| wizard.with(|wizard| wizard.is_open()));

    let current_form = move || match step.get() {
        RegistrationStep::BusinessDetails => {
            view! { <BusinessDetailsForm on_next=on_business_details/> }.into_any()
        }
        RegistrationStep::ContactInformation => view! {
            <ContactInformationForm on_next=on_contact_information on_back=on_back/>
        }
        .into_any(),
        RegistrationStep::CryptoDetails => view! {
            <CryptoDetailsForm on_submit=on_crypto_details on_back=on_back/>
        }
        .into_any(),
        RegistrationStep::Completed => ().into_any(),
    };

    view! {
        <main class="page registration-page">
            <Show
                when=move || is_open.get()
                fallback=move || {
                    view! {
                        <div class="card registration-closed">
                            <h2>"Business Registration"</h2>
                            <button class="btn" on:click=move |_| wizard.set(RegistrationWizard::new())>
                                "Start Registration"
                            </button>
                            <A href=SiteRoute::Home.path() attr:class="btn btn-outline">"Back to Home"</A>
                        </div>
                    }
                }
            >
                <div class="card wizard-dialog" role="dialog" aria-modal="true">
                    <button
                        class="dialog-close"
                        aria-label="Close"
                        on:click=move |_| wizard.update(|wizard| wizard.close())
                    >
                        "×"
                    </button>
                    <div class="wizard-header">
                        <h2>"Business Registration"</h2>
                        <p class="wizard-progress">
                            {move || format!("Step {} of {}", step.get().number(), RegistrationStep::TOTAL)}
                        </p>
                        <h3>{move || step.get().title()}</h3>
                    </div>
                    {current_form}
                </div>
            </Show>
        </main>
    }
}
