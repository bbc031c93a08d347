//! # Display Formatting
//!
//! Text shown for a connected wallet and in the footer. Address shortening itself lives in
//! [`shared::utils`].

use shared::{format_balance, truncate_address, WalletAccount};

use super::constants::{BRAND, CURRENCY_TICKER};

/// `Address: sample...ress`
pub fn address_line(account: &WalletAccount) -> String {
    format!("Address: {}", truncate_address(&account.address))
}

/// `Balance: 0.00 QUBIC`
pub fn balance_line(account: &WalletAccount) -> String {
    format!("Balance: {}", format_balance(&account.balance, CURRENCY_TICKER))
}

pub fn copyright_line(year: u32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}
