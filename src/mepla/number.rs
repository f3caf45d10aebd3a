use once_cell::sync::Lazy;
use regex::Regex;

// integer, decimal, or decimal with exponent; sign optional
pub fn is_number(token: &str) -> bool {
    static REGEX_NUMBER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(?:\.[0-9]+(?:[eE][+-]?[0-9]+)?)?$").unwrap());

    REGEX_NUMBER.is_match(token)
}
