//! Validation helpers and constants for API handlers

use regex::Regex;

lazy_static::lazy_static! {
    /// ISO 3166-1 alpha-2 country code: exactly two uppercase letters
    pub static ref COUNTRY_CODE_REGEX: Regex = Regex::new(r"^[A-Z]{2}$").unwrap();
}

/// Validate a country code
pub fn validate_country_code(country: &str) -> bool {
    COUNTRY_CODE_REGEX.is_match(country)
}
