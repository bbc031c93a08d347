//! Business registration step forms.
//!
//! Each form keeps its own draft values, dropped when the step unmounts. The page's
//! wizard decides whether a step may be left.

pub mod business_details;
pub mod contact_information;
pub mod crypto_details;

pub use business_details::BusinessDetailsForm;
pub use contact_information::ContactInformationForm;
pub use crypto_details::CryptoDetailsForm;

use leptos::prelude::*;
use lib_core::{ValidationErrors, WizardError};

/// Show the wizard's answer to a submitted step.
fn show_verdict(errors: RwSignal<ValidationErrors>, verdict: Result<(), WizardError>) {
    match verdict {
        Ok(()) => errors.set(ValidationErrors::new()),
        Err(err) => match err.field_errors() {
            Some(fields) => errors.set(fields.clone()),
            None => log::warn!("registration step refused: {}", err),
        },
    }
}
