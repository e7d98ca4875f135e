//! Pure field validators for contact form input.
//!
//! Every predicate here is total: given any string it returns a boolean,
//! never panics and has no side effects. Shape checks are syntactic only,
//! so `is_valid_email` accepts anything that looks like `local@domain.tld`
//! without attempting a deliverability check.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

static PHONE_CHARSET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s+()-]+$").expect("Invalid phone pattern"));

static POSTAL_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("Invalid postal code pattern"));

/// True when the value contains at least one non-whitespace character.
pub fn is_required_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Permissive email shape check: a local part, `@`, and a domain with at
/// least one dot-separated label.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// A phone number is accepted when the string uses only digits, whitespace
/// and `+ - ( )`, and at least ten digits remain once formatting is
/// stripped. The empty string is rejected.
pub fn is_valid_phone(value: &str) -> bool {
    if !PHONE_CHARSET_PATTERN.is_match(value) {
        return false;
    }
    value.chars().filter(char::is_ascii_digit).count() >= 10
}

/// US ZIP / ZIP+4 shape: five digits, optionally followed by `-` and four
/// more digits.
pub fn is_valid_postal_code(value: &str) -> bool {
    POSTAL_CODE_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_present() {
        assert!(is_required_present("hello"));
        assert!(is_required_present("  x  "));
        assert!(!is_required_present(""));
        assert!(!is_required_present("   "));
        assert!(!is_required_present("\t\n"));
    }

    #[test]
    fn test_valid_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user name@domain.com"));
        assert!(!is_valid_email("user@@domain.com"));
    }

    #[test]
    fn test_valid_phone_shapes() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 555 123 4567"));
        assert!(is_valid_phone("5551234567"));
        // Too few digits
        assert!(!is_valid_phone("12345"));
        // Characters outside the allowed set
        assert!(!is_valid_phone("abc-def-ghij"));
        assert!(!is_valid_phone("555.123.4567"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_valid_postal_code_shapes() {
        assert!(is_valid_postal_code("12345"));
        assert!(is_valid_postal_code("12345-6789"));
        assert!(!is_valid_postal_code("1234"));
        assert!(!is_valid_postal_code("123456"));
        assert!(!is_valid_postal_code("12345-678"));
        assert!(!is_valid_postal_code("abcde"));
        assert!(!is_valid_postal_code(""));
    }

    #[test]
    fn test_validators_are_safe_to_repeat() {
        for _ in 0..3 {
            assert!(is_valid_email("a@b.com"));
            assert!(is_valid_phone("(555) 123-4567"));
            assert!(is_valid_postal_code("12345"));
        }
    }
}
