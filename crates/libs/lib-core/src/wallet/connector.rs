//! Wallet connectors.
//!
//! A connector performs the (possibly asynchronous) handshake with a wallet and yields
//! the account to display. The site ships only [`PlaceholderConnector`]: there is no
//! Qubic wallet integration yet, so it answers with fixed values and never touches the
//! network.

use async_trait::async_trait;
use shared::WalletAccount;

use crate::error::ConnectionError;

/// Address reported by [`PlaceholderConnector`].
pub const PLACEHOLDER_ADDRESS: &str = "sample_address";

/// Balance reported by [`PlaceholderConnector`].
pub const PLACEHOLDER_BALANCE: &str = "0.00";

/// Something that can connect to a wallet.
///
/// `?Send` because the site runs on the browser's single thread and awaits connectors
/// with `spawn_local`.
#[async_trait(?Send)]
pub trait WalletConnector {
    /// Wallet name shown in notifications and logs.
    fn name(&self) -> &'static str;

    async fn connect(&self) -> Result<WalletAccount, ConnectionError>;
}

/// Stand-in for the Qubic wallet: resolves immediately with placeholder values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderConnector;

#[async_trait(?Send)]
impl WalletConnector for PlaceholderConnector {
    fn name(&self) -> &'static str {
        "Qubic"
    }

    async fn connect(&self) -> Result<WalletAccount, ConnectionError> {
        tracing::debug!("placeholder connector: returning fixed account");
        Ok(WalletAccount::new(PLACEHOLDER_ADDRESS, PLACEHOLDER_BALANCE))
    }
}
