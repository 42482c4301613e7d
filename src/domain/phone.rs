//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are stored normalized: every non-digit character is
/// stripped before validation, and the remaining digits must number
/// between 8 and 15.
///
/// # Example
///
/// ```
/// use contact_agenda::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(27) 99999-0000").unwrap();
/// assert_eq!(phone.as_str(), "27999990000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from free-form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` (carrying the raw input) if
    /// the normalized digits are not 8 to 15 long.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let digits = Self::normalize(raw);

        if !Self::is_valid_digits(&digits) {
            return Err(ValidationError::InvalidPhone(raw.trim().to_string()));
        }

        Ok(Self(digits))
    }

    /// Strip every character that is not an ASCII digit.
    pub fn normalize(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Check whether free-form input normalizes to a valid phone number.
    pub fn is_valid(phone: &str) -> bool {
        Self::is_valid_digits(&Self::normalize(phone))
    }

    fn is_valid_digits(digits: &str) -> bool {
        (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
    }

    /// Get the normalized digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_normalizes_formatting() {
        assert_eq!(PhoneNumber::new("27 99999-0000").unwrap().as_str(), "27999990000");
        assert_eq!(PhoneNumber::new("(27) 98888-1111").unwrap().as_str(), "27988881111");
        assert_eq!(PhoneNumber::new("+1 (555) 123-4567").unwrap().as_str(), "15551234567");
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(PhoneNumber::new("1234567").is_err());
        assert!(PhoneNumber::new("12345678").is_ok());
        assert!(PhoneNumber::new("123456789012345").is_ok());
        assert!(PhoneNumber::new("1234567890123456").is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("abc").is_err());
        assert!(PhoneNumber::new("no digits at all").is_err());
    }

    #[test]
    fn test_phone_error_keeps_raw_input() {
        assert_eq!(
            PhoneNumber::new(" abc "),
            Err(ValidationError::InvalidPhone("abc".to_string()))
        );
    }

    #[test]
    fn test_phone_is_valid_predicate() {
        assert!(PhoneNumber::is_valid("27 90000 3333"));
        assert!(!PhoneNumber::is_valid("555"));
    }
}
