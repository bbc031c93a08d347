//! Step schemas.
//!
//! The field rules live on the `*Input` DTOs as `validator` attributes. [`StepForm::validate`]
//! runs them and either returns the typed record or every failing field with its message,
//! the way a form resolver reports them.

use shared::dto::registration::{
    Blockchain, BusinessDetails, BusinessDetailsInput, ContactInformation, ContactInformationInput,
    Country, CryptoDetails, CryptoDetailsInput, SelectOption,
};

use super::wizard::RegistrationStep;
use crate::error::ValidationErrors;

/// Raw values of one wizard step.
pub trait StepForm {
    /// The step these values belong to.
    const STEP: RegistrationStep;

    /// Record produced when every rule passes.
    type Output;

    fn validate(&self) -> Result<Self::Output, ValidationErrors>;
}

/// Run the input's field rules.
fn check<T: validator::Validate>(input: &T) -> Result<(), ValidationErrors> {
    validator::Validate::validate(input).map_err(ValidationErrors::from)
}

/// Convert a select value that already passed its rule.
fn select<T: SelectOption>(field: &str, value: &str) -> Result<T, ValidationErrors> {
    T::from_value(value).ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.insert(field, format!("Unknown option: {value}"));
        errors
    })
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl StepForm for BusinessDetailsInput {
    const STEP: RegistrationStep = RegistrationStep::BusinessDetails;
    type Output = BusinessDetails;

    fn validate(&self) -> Result<BusinessDetails, ValidationErrors> {
        check(self)?;

        Ok(BusinessDetails {
            business_name: self.business_name.clone(),
            country: select("country", &self.country)?,
            legal_entity_type: select("legalEntityType", &self.legal_entity_type)?,
            registration_number: self.registration_number.clone(),
            industry_type: select("industryType", &self.industry_type)?,
        })
    }
}

impl StepForm for ContactInformationInput {
    const STEP: RegistrationStep = RegistrationStep::ContactInformation;
    type Output = ContactInformation;

    fn validate(&self) -> Result<ContactInformation, ValidationErrors> {
        check(self)?;

        Ok(ContactInformation {
            primary_contact_name: self.primary_contact_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            business_address: self.business_address.clone(),
        })
    }
}

impl StepForm for CryptoDetailsInput {
    const STEP: RegistrationStep = RegistrationStep::CryptoDetails;
    type Output = CryptoDetails;

    fn validate(&self) -> Result<CryptoDetails, ValidationErrors> {
        check(self)?;

        let tax_country = match optional(&self.tax_country) {
            Some(value) => Some(select::<Country>("taxCountry", &value)?),
            None => None,
        };

        Ok(CryptoDetails {
            blockchain: select::<Blockchain>("blockchain", &self.blockchain)?,
            wallet_address: optional(&self.wallet_address),
            tax_id: optional(&self.tax_id),
            tax_country,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::dto::registration::{IndustryType, LegalEntityType};

    pub(crate) fn valid_business_details() -> BusinessDetailsInput {
        BusinessDetailsInput {
            business_name: "Duka Fresh Ltd".to_string(),
            country: "kenya".to_string(),
            legal_entity_type: "llc".to_string(),
            registration_number: "PVT-7XK2M9".to_string(),
            industry_type: "retail".to_string(),
        }
    }

    pub(crate) fn valid_contact_information() -> ContactInformationInput {
        ContactInformationInput {
            primary_contact_name: "Amani Otieno".to_string(),
            email: "amani@dukafresh.co.ke".to_string(),
            phone_number: "+254712345678".to_string(),
            business_address: "Moi Avenue 12, Nairobi".to_string(),
        }
    }

    pub(crate) fn valid_crypto_details() -> CryptoDetailsInput {
        CryptoDetailsInput {
            blockchain: "qubic".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_business_details_valid() {
        let details = valid_business_details().validate().unwrap();
        assert_eq!(details.country, Country::Kenya);
        assert_eq!(details.legal_entity_type, LegalEntityType::Llc);
        assert_eq!(details.industry_type, IndustryType::Retail);
    }

    #[test]
    fn test_business_details_reports_every_field() {
        let errors = BusinessDetailsInput::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("businessName"), Some("Business name must be at least 2 characters"));
        assert_eq!(errors.get("country"), Some("Please select a country"));
        assert_eq!(errors.get("legalEntityType"), Some("Please select an entity type"));
        assert_eq!(errors.get("registrationNumber"), Some("Registration number is required"));
        assert_eq!(errors.get("industryType"), Some("Please select an industry type"));
    }

    #[test]
    fn test_business_details_rejects_unknown_option() {
        let input = BusinessDetailsInput {
            country: "rwanda".to_string(),
            ..valid_business_details()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["country"]);
    }

    #[test]
    fn test_contact_information_rules() {
        assert!(valid_contact_information().validate().is_ok());

        let input = ContactInformationInput {
            primary_contact_name: "A".to_string(),
            email: "amani@".to_string(),
            phone_number: "071234567".to_string(),
            business_address: "Moi".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("primaryContactName"), Some("Contact name must be at least 2 characters"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("phoneNumber"), Some("Please enter a valid phone number"));
        assert_eq!(errors.get("businessAddress"), Some("Please enter a valid business address"));
    }

    #[test]
    fn test_email_must_not_end_local_part_on_apostrophe() {
        let input = ContactInformationInput {
            email: "amani'@dukafresh.co.ke".to_string(),
            ..valid_contact_information()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_phone_number_boundary() {
        let input = ContactInformationInput {
            phone_number: "0712345678".to_string(),
            ..valid_contact_information()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_crypto_details_optionals() {
        let details = valid_crypto_details().validate().unwrap();
        assert_eq!(details.blockchain, Blockchain::Qubic);
        assert_eq!(details.wallet_address, None);
        assert_eq!(details.tax_id, None);
        assert_eq!(details.tax_country, None);

        let input = CryptoDetailsInput {
            blockchain: "solana".to_string(),
            wallet_address: " BZBQFLLBNCXEMGLOBHUVFTLUPLVCPQUASSILFABOFFBCADQSSUPNWLZBQEXK ".to_string(),
            tax_id: "P051234567X".to_string(),
            tax_country: "uganda".to_string(),
        };
        let details = input.validate().unwrap();
        assert_eq!(details.blockchain, Blockchain::Solana);
        assert_eq!(
            details.wallet_address.as_deref(),
            Some("BZBQFLLBNCXEMGLOBHUVFTLUPLVCPQUASSILFABOFFBCADQSSUPNWLZBQEXK")
        );
        assert_eq!(details.tax_country, Some(Country::Uganda));
    }

    #[test]
    fn test_crypto_details_requires_blockchain() {
        let input = CryptoDetailsInput {
            tax_country: "atlantis".to_string(),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("blockchain"), Some("Please select a blockchain"));
        assert_eq!(errors.get("taxCountry"), Some("Please select a valid tax country"));
    }
}
