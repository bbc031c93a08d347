//! # Core Library
//!
//! Site state that outlives a single render: the wallet connection session, the
//! business registration wizard with its step schemas, toast notifications, and the
//! error taxonomy shared by all of them.
//!
//! Everything here is plain Rust with no DOM access, so the Leptos views in `web` wrap
//! these types in signals and the unit tests drive them directly.

pub mod error;
pub mod notification;
pub mod registration;
pub mod wallet;

// Re-export commonly used types
pub use error::{ConnectionError, ValidationErrors, WizardError};
pub use notification::{Notification, NotificationQueue, NotificationVariant};
pub use registration::{RegistrationStep, RegistrationWizard, StepForm};
pub use wallet::{ConnectOutcome, ConnectionState, PlaceholderConnector, WalletConnector, WalletSession};
