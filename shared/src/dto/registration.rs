//! Business registration DTOs.
//!
//! Every step has two shapes:
//! - an `*Input` record of plain strings, exactly what the form fields hold
//! - a validated record produced by the step schema in `lib-core`
//!
//! The field rules and their messages sit on the `*Input` records as `validator` attributes.
//!
//! The three steps are independent: nothing here combines them.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A closed set of values offered by a `<select>` field.
pub trait SelectOption: Copy + Sized + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Value submitted by the form (and used on the wire).
    fn value(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;

    /// Look an option up by its form value.
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.value() == value)
    }
}

macro_rules! select_option {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl SelectOption for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn value(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

select_option! {
    /// Countries a business can register in (also used for tax residency).
    pub enum Country {
        Kenya => ("kenya", "Kenya"),
        Uganda => ("uganda", "Uganda"),
        Tanzania => ("tanzania", "Tanzania"),
    }
}

select_option! {
    pub enum LegalEntityType {
        Sole => ("sole", "Sole Proprietorship"),
        Partnership => ("partnership", "Partnership"),
        Corporation => ("corporation", "Corporation"),
        Llc => ("llc", "LLC"),
    }
}

select_option! {
    pub enum IndustryType {
        Retail => ("retail", "Retail"),
        Technology => ("technology", "Technology"),
        Finance => ("finance", "Finance"),
        Healthcare => ("healthcare", "Healthcare"),
        Manufacturing => ("manufacturing", "Manufacturing"),
        Other => ("other", "Other"),
    }
}

select_option! {
    /// Settlement chain. Only Qubic is live; Solana is listed as coming soon.
    pub enum Blockchain {
        Qubic => ("qubic", "Qubic"),
        Solana => ("solana", "Solana (Coming Soon)"),
    }
}

// region: --- Field rules

/// `Ok` when `value` is one of `T`'s form values.
fn check_option<T: SelectOption>(
    value: &str,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    match T::from_value(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(code).with_message(Cow::Borrowed(message))),
    }
}

fn validate_country(value: &str) -> Result<(), ValidationError> {
    check_option::<Country>(value, "country", "Please select a country")
}

fn validate_legal_entity_type(value: &str) -> Result<(), ValidationError> {
    check_option::<LegalEntityType>(value, "legal_entity_type", "Please select an entity type")
}

fn validate_industry_type(value: &str) -> Result<(), ValidationError> {
    check_option::<IndustryType>(value, "industry_type", "Please select an industry type")
}

fn validate_blockchain(value: &str) -> Result<(), ValidationError> {
    check_option::<Blockchain>(value, "blockchain", "Please select a blockchain")
}

/// Tax country is optional: blank passes, anything else must be a listed country.
fn validate_tax_country(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    check_option::<Country>(value, "tax_country", "Please select a valid tax country")
}

fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    if lib_utils::is_email(value) {
        Ok(())
    } else {
        Err(ValidationError::new("email")
            .with_message(Cow::Borrowed("Please enter a valid email address")))
    }
}

// endregion: --- Field rules

// region: --- Step 1: business details

/// Raw values of the business details form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetailsInput {
    #[validate(length(min = 2, message = "Business name must be at least 2 characters"))]
    pub business_name: String,
    #[validate(custom(function = "validate_country"))]
    pub country: String,
    #[validate(custom(function = "validate_legal_entity_type"))]
    pub legal_entity_type: String,
    #[validate(length(min = 2, message = "Registration number is required"))]
    pub registration_number: String,
    #[validate(custom(function = "validate_industry_type"))]
    pub industry_type: String,
}

/// Validated business details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    pub business_name: String,
    pub country: Country,
    pub legal_entity_type: LegalEntityType,
    pub registration_number: String,
    pub industry_type: IndustryType,
}

// endregion: --- Step 1: business details

// region: --- Step 2: contact information

/// Raw values of the contact information form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformationInput {
    #[validate(length(min = 2, message = "Contact name must be at least 2 characters"))]
    pub primary_contact_name: String,
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone_number: String,
    #[validate(length(min = 5, message = "Please enter a valid business address"))]
    pub business_address: String,
}

/// Validated contact information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    pub primary_contact_name: String,
    pub email: String,
    pub phone_number: String,
    pub business_address: String,
}

// endregion: --- Step 2: contact information

// region: --- Step 3: crypto details

/// Raw values of the crypto details form. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CryptoDetailsInput {
    #[validate(custom(function = "validate_blockchain"))]
    pub blockchain: String,
    pub wallet_address: String,
    pub tax_id: String,
    #[validate(custom(function = "validate_tax_country"))]
    pub tax_country: String,
}

/// Validated crypto details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoDetails {
    pub blockchain: Blockchain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_country: Option<Country>,
}

// endregion: --- Step 3: crypto details
