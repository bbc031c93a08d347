//! # Validation Utilities
//!
//! Format checks shared by the form schemas. Length and option rules live on the DTOs as
//! `validator` attributes; this module holds the patterns those attributes call into.

use lazy_regex::regex_is_match;

/// Check an email address.
///
/// The local part uses letters, digits and `_ ' + - .` and must end on a letter, digit,
/// `_`, `+` or `-`. Every domain label starts with a letter or digit and the top-level
/// domain is at least two letters. Leading and doubled dots are rejected.
pub fn is_email(email: &str) -> bool {
    !email.starts_with('.')
        && !email.contains("..")
        && regex_is_match!(
            r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$",
            email
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "amani@example.co.ke",
            "first.last@example.com",
            "o'brien+ripa@mail-host.io",
            "x@y.zz",
            "AMANI@EXAMPLE.COM",
        ] {
            assert!(is_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example.c",
            "user@example.c0m",
            "user@@example.com",
            "us er@example.com",
        ] {
            assert!(!is_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_local_part_must_not_end_on_apostrophe() {
        assert!(!is_email("amani'@example.com"));
        assert!(is_email("amani_@example.com"));
    }
}
