//! # Environment Variables
//!
//! Reads settings from the process environment. Unset variables fall back to a default;
//! set-but-unparseable ones are an error rather than being silently replaced.

use std::env;
use std::fmt;
use std::str::FromStr;

pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Value of `name`, or `default` when it is unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    parse_value(name, &get_env(name)?)
}

/// Parse `name`, or `default` when it is unset.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: &str) -> Result<T, Error> {
    parse_value(name, &get_env_or(name, default))
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, Error> {
    value.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(f, "environment variable {name} is not set"),
            Error::WrongFormat(name) => write!(f, "environment variable {name} has an invalid value"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_SURELY_UNSET"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_SURELY_UNSET", "dist"), "dist");
        assert_eq!(get_env_parse_or::<u16>("LIB_UTILS_TEST_SURELY_UNSET", "8080"), Ok(8080));
    }

    #[test]
    fn test_parse_env() {
        env::set_var("LIB_UTILS_TEST_PORT", " 8080 ");
        assert_eq!(get_env_parse::<u16>("LIB_UTILS_TEST_PORT"), Ok(8080));

        env::set_var("LIB_UTILS_TEST_BAD_PORT", "eighty");
        assert_eq!(
            get_env_parse_or::<u16>("LIB_UTILS_TEST_BAD_PORT", "8080"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_PORT"))
        );
    }

    #[test]
    fn test_error_message_names_variable() {
        assert_eq!(
            Error::WrongFormat("SITE_BIND_ADDRESS").to_string(),
            "environment variable SITE_BIND_ADDRESS has an invalid value"
        );
    }
}
