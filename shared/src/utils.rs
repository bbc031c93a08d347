//! # Shared Utility Functions
//!
//! Display helpers used across the site.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the site's 6/4 split
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! assert_eq!(truncate_address("sample_address"), "sample...ress");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "BZBQFLLBNCXEMGLOBHUVFTLUPLVCPQUASSILFABOFFBCADQSSUPNWLZBQEXK";
/// assert_eq!(format_address(addr, 4, 4), "BZBQ...QEXK");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with a 6-character prefix and 4-character suffix, as the
/// wallet status display shows it.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Format a balance with its currency ticker (e.g. `"0.00 QUBIC"`).
pub fn format_balance(balance: &str, ticker: &str) -> String {
    format!("{} {}", balance, ticker)
}
