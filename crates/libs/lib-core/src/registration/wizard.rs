//! Business registration wizard.
//!
//! ```text
//! BusinessDetails --next--> ContactInformation --next--> CryptoDetails --submit--> Completed
//!        ^                         |      ^                     |
//!        +---------back------------+      +--------back---------+
//! ```
//!
//! Forward moves need the current step's values to pass its schema. Completed is
//! terminal: the dialog closes and nothing is sent anywhere.

use shared::dto::registration::{CryptoDetails, CryptoDetailsInput};

use super::schema::StepForm;
use crate::error::WizardError;

/// Where the wizard is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegistrationStep {
    #[default]
    BusinessDetails,
    ContactInformation,
    CryptoDetails,
    Completed,
}

impl RegistrationStep {
    /// Number of form steps.
    pub const TOTAL: u8 = 3;

    /// 1-based step number. Completed stays on the last step.
    pub fn number(&self) -> u8 {
        match self {
            RegistrationStep::BusinessDetails => 1,
            RegistrationStep::ContactInformation => 2,
            RegistrationStep::CryptoDetails | RegistrationStep::Completed => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RegistrationStep::BusinessDetails => "Business Details",
            RegistrationStep::ContactInformation => "Contact Information",
            RegistrationStep::CryptoDetails => "Crypto Details",
            RegistrationStep::Completed => "Completed",
        }
    }

    fn following(&self) -> RegistrationStep {
        match self {
            RegistrationStep::BusinessDetails => RegistrationStep::ContactInformation,
            RegistrationStep::ContactInformation => RegistrationStep::CryptoDetails,
            RegistrationStep::CryptoDetails | RegistrationStep::Completed => RegistrationStep::Completed,
        }
    }

    fn preceding(&self) -> Option<RegistrationStep> {
        match self {
            RegistrationStep::ContactInformation => Some(RegistrationStep::BusinessDetails),
            RegistrationStep::CryptoDetails => Some(RegistrationStep::ContactInformation),
            RegistrationStep::BusinessDetails | RegistrationStep::Completed => None,
        }
    }
}

/// Step and dialog visibility of one registration session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationWizard {
    step: RegistrationStep,
    open: bool,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self {
            step: RegistrationStep::BusinessDetails,
            open: true,
        }
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn step_number(&self) -> u8 {
        self.step.number()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_completed(&self) -> bool {
        self.step == RegistrationStep::Completed
    }

    /// Validate the current step's values and move to the next step.
    ///
    /// The final step is left with [`submit`](Self::submit) instead.
    pub fn next<F: StepForm>(&mut self, form: &F) -> Result<F::Output, WizardError> {
        if F::STEP == RegistrationStep::CryptoDetails {
            return Err(WizardError::FinalStep);
        }
        self.advance(form)
    }

    /// Validate the final step's values, complete the wizard and close the dialog.
    pub fn submit(&mut self, form: &CryptoDetailsInput) -> Result<CryptoDetails, WizardError> {
        self.advance(form)
    }

    /// Go back one step. Returns false when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.step.preceding() {
            Some(previous) if self.open => {
                tracing::debug!(from = self.step.number(), to = previous.number(), "registration step back");
                self.step = previous;
                true
            }
            _ => false,
        }
    }

    /// The user dismissed the dialog. The step is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    fn advance<F: StepForm>(&mut self, form: &F) -> Result<F::Output, WizardError> {
        if !self.open {
            return Err(WizardError::Closed);
        }
        if F::STEP != self.step {
            return Err(WizardError::OutOfStep {
                current: self.step.number(),
                submitted: F::STEP.number(),
            });
        }

        let output = form.validate()?;

        self.step = self.step.following();
        if self.is_completed() {
            self.open = false;
            tracing::info!("business registration completed");
        } else {
            tracing::debug!(step = self.step.number(), "registration step advanced");
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::schema::tests::{
        valid_business_details, valid_contact_information, valid_crypto_details,
    };
    use shared::dto::registration::{BusinessDetailsInput, ContactInformationInput};

    fn wizard_at_step_three() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        wizard.next(&valid_business_details()).unwrap();
        wizard.next(&valid_contact_information()).unwrap();
        assert_eq!(wizard.step(), RegistrationStep::CryptoDetails);
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = RegistrationWizard::new();
        assert_eq!(wizard.step_number(), 1);
        assert!(wizard.is_open());
        assert!(!wizard.is_completed());
    }

    #[test]
    fn test_next_then_back_returns_to_start() {
        let mut wizard = RegistrationWizard::new();
        wizard.next(&valid_business_details()).unwrap();
        assert_eq!(wizard.step_number(), 2);
        assert!(wizard.back());
        assert_eq!(wizard, RegistrationWizard::new());
    }

    #[test]
    fn test_back_on_first_step_is_noop() {
        let mut wizard = RegistrationWizard::new();
        assert!(!wizard.back());
        assert_eq!(wizard.step_number(), 1);
    }

    #[test]
    fn test_submit_closes_dialog_and_keeps_step() {
        let mut wizard = wizard_at_step_three();
        wizard.submit(&valid_crypto_details()).unwrap();

        assert!(!wizard.is_open());
        assert!(wizard.is_completed());
        assert_eq!(wizard.step_number(), 3);

        assert!(!wizard.back());
        assert_eq!(wizard.submit(&valid_crypto_details()), Err(WizardError::Closed));
    }

    #[test]
    fn test_invalid_values_block_every_transition() {
        let mut wizard = RegistrationWizard::new();
        let err = wizard.next(&BusinessDetailsInput::default()).unwrap_err();
        assert!(err.field_errors().is_some());
        assert_eq!(wizard.step_number(), 1);

        wizard.next(&valid_business_details()).unwrap();
        let err = wizard.next(&ContactInformationInput::default()).unwrap_err();
        assert!(err.field_errors().is_some());
        assert_eq!(wizard.step_number(), 2);

        wizard.next(&valid_contact_information()).unwrap();
        let err = wizard.submit(&CryptoDetailsInput::default()).unwrap_err();
        assert!(err.field_errors().is_some());
        assert_eq!(wizard.step_number(), 3);
        assert!(wizard.is_open());
    }

    #[test]
    fn test_out_of_step_values_are_refused() {
        let mut wizard = RegistrationWizard::new();
        assert_eq!(
            wizard.next(&valid_contact_information()),
            Err(WizardError::OutOfStep { current: 1, submitted: 2 })
        );
        assert_eq!(
            wizard.submit(&valid_crypto_details()),
            Err(WizardError::OutOfStep { current: 1, submitted: 3 })
        );
        assert_eq!(wizard.step_number(), 1);
    }

    #[test]
    fn test_next_on_final_step_requires_submit() {
        let mut wizard = wizard_at_step_three();
        assert_eq!(wizard.next(&valid_crypto_details()), Err(WizardError::FinalStep));
        assert_eq!(wizard.step(), RegistrationStep::CryptoDetails);
    }

    #[test]
    fn test_closed_dialog_refuses_transitions() {
        let mut wizard = RegistrationWizard::new();
        wizard.next(&valid_business_details()).unwrap();
        wizard.close();

        assert!(!wizard.back());
        assert_eq!(wizard.next(&valid_contact_information()), Err(WizardError::Closed));
        assert_eq!(wizard.step_number(), 2);
    }

    #[derive(Debug, Clone, Copy)]
    enum Move {
        Next,
        Back,
    }

    /// Apply `Next` with valid values for whatever step is current.
    fn apply(wizard: &mut RegistrationWizard, mv: Move) {
        match (mv, wizard.step()) {
            (Move::Back, _) => {
                wizard.back();
            }
            (Move::Next, RegistrationStep::BusinessDetails) => {
                wizard.next(&valid_business_details()).unwrap();
            }
            (Move::Next, RegistrationStep::ContactInformation) => {
                wizard.next(&valid_contact_information()).unwrap();
            }
            (Move::Next, RegistrationStep::CryptoDetails) => {
                assert_eq!(wizard.next(&valid_crypto_details()), Err(WizardError::FinalStep));
            }
            (Move::Next, RegistrationStep::Completed) => unreachable!("next/back never complete the wizard"),
        }
    }

    #[test]
    fn test_step_stays_in_range_for_all_move_sequences() {
        const MAX_LEN: u32 = 8;

        for len in 0..=MAX_LEN {
            for bits in 0u32..(1 << len) {
                let mut wizard = RegistrationWizard::new();
                let mut previous = wizard.step_number();

                for i in 0..len {
                    let mv = if bits & (1 << i) == 0 { Move::Next } else { Move::Back };
                    apply(&mut wizard, mv);

                    let step = wizard.step_number();
                    assert!((1..=RegistrationStep::TOTAL).contains(&step), "step {step} after {mv:?}");
                    assert!(step.abs_diff(previous) <= 1, "step jumped from {previous} to {step}");
                    previous = step;
                }
            }
        }
    }
}
