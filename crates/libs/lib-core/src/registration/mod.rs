//! # Business Registration
//!
//! - [`schema`]: field rules of the three steps ([`StepForm`])
//! - [`wizard`]: the step state machine ([`RegistrationWizard`])

pub mod schema;
pub mod wizard;

pub use schema::StepForm;
pub use wizard::{RegistrationStep, RegistrationWizard};
