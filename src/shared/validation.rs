use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating entity code fields (kode_area, kode_cabang)
    /// Alphanumeric, optionally hyphen-separated
    /// - Valid: "00101", "A01", "JKT-02"
    /// - Invalid: "-01", "01-", "a b", ""
    pub static ref KODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kode_regex_valid() {
        assert!(KODE_REGEX.is_match("00101"));
        assert!(KODE_REGEX.is_match("A01"));
        assert!(KODE_REGEX.is_match("JKT-02"));
        assert!(KODE_REGEX.is_match("a"));
    }

    #[test]
    fn test_kode_regex_invalid() {
        assert!(!KODE_REGEX.is_match("-01")); // starts with hyphen
        assert!(!KODE_REGEX.is_match("01-")); // ends with hyphen
        assert!(!KODE_REGEX.is_match("a b")); // space
        assert!(!KODE_REGEX.is_match("")); // empty
    }
}
