use serde::{Deserialize, Serialize};

/// Account details of a connected wallet.
///
/// Address and balance always travel together: a connection state either holds a
/// whole `WalletAccount` or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub address: String,
    /// Balance as displayed, in QUBIC.
    pub balance: String,
}

impl WalletAccount {
    pub fn new(address: impl Into<String>, balance: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            balance: balance.into(),
        }
    }
}
