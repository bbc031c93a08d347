//! # Wallet Connection
//!
//! - [`connector`]: the [`WalletConnector`] seam and the placeholder Qubic connector
//! - [`session`]: [`ConnectionState`] and the [`WalletSession`] that guards connect attempts

pub mod connector;
pub mod session;

pub use connector::{PlaceholderConnector, WalletConnector, PLACEHOLDER_ADDRESS, PLACEHOLDER_BALANCE};
pub use session::{ConnectOutcome, ConnectionState, WalletSession};
