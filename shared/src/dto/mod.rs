//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`registration`] - Business registration steps: raw form inputs, validated records, select options
//! - [`wallet`] - Wallet account shown once connected
//! - [`contact`] - Contact page message
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase (`#[serde(rename_all = "camelCase")]`)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to their lowercase option value
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "primaryContactName": "Amani Otieno",
//!   "email": "amani@example.co.ke",
//!   "phoneNumber": "+254700000000",
//!   "businessAddress": "Moi Avenue 12, Nairobi"
//! }
//! ```

pub mod contact;
pub mod registration;
pub mod wallet;

pub use contact::*;
pub use registration::*;
pub use wallet::*;
