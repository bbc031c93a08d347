//! # Shared Site Types
//!
//! Types used by both the Leptos site (`web`) and the static-file server (`lib-web`),
//! plus the registration records validated by `lib-core`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::registration`]**: Raw inputs and validated records of the three registration steps
//!   - **[`dto::wallet`]**: Connected wallet account
//!   - **[`dto::contact`]**: Contact page message
//! - **[`routes`]**: The site's client-side routes
//! - **[`utils`]**: Display helpers
//!
//! ## Wire Format
//!
//! Records serialize to JSON with **camelCase** keys, matching the field names the forms
//! report in validation errors:
//!
//! ```rust
//! use shared::dto::registration::{BusinessDetails, Country, IndustryType, LegalEntityType};
//!
//! let details = BusinessDetails {
//!     business_name: "Acme".to_string(),
//!     country: Country::Kenya,
//!     legal_entity_type: LegalEntityType::Llc,
//!     registration_number: "PVT-1234".to_string(),
//!     industry_type: IndustryType::Retail,
//! };
//! let json = serde_json::to_value(&details).unwrap();
//! assert_eq!(json["businessName"], "Acme");
//! assert_eq!(json["country"], "kenya");
//! ```

pub mod dto;
pub mod routes;
pub mod utils;

pub use dto::*;
pub use routes::SiteRoute;
pub use utils::*;
