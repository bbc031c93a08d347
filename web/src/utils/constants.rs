//! Site constants

pub const BRAND: &str = "RipaPay";
pub const TAGLINE: &str = "Revolutionizing payments with Qubic blockchain technology";

/// Ticker shown next to wallet balances.
pub const CURRENCY_TICKER: &str = "QUBIC";

/// Flat transaction fee.
pub const TRANSACTION_FEE: &str = "1.25%";

pub const SUPPORT_EMAIL: &str = "support@ripapay.com";
pub const SUPPORT_PHONE: &str = "+1 (555) 123-4567";

pub const QUBIC_URL: &str = "https://qubic.org";
pub const WHITEPAPER_URL: &str = "https://whitepaper.qubic.org";

// No public profiles yet, the footer links are placeholders.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[("Github", "#"), ("Twitter", "#"), ("LinkedIn", "#")];

// UI constants
pub const TOAST_DURATION_MS: u32 = 5000;
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
