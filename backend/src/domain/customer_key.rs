//! Customer identifiers and the key validation policy.
//!
//! A [`CustomerKey`] is the only token the inquiry pipeline hands to a record
//! store. It is produced exclusively by [`CustomerKey::validate`], so holding
//! one proves the input passed the range rules below:
//!
//! | Input                              | Outcome                               |
//! |------------------------------------|---------------------------------------|
//! | absent, `null`, blank text, `0`    | [`KeyValidationError::Required`]       |
//! | negative                           | [`KeyValidationError::NotPositive`]    |
//! | greater than [`CUSTOMER_KEY_MAX`]  | [`KeyValidationError::ExceedsMaximum`] |
//! | not a whole number                 | [`KeyValidationError::NotNumeric`]     |
//! | request body is not a JSON object  | [`KeyValidationError::UnreadableRequest`] |
//!
//! Validation is pure: it never performs I/O and always yields the same result
//! for the same input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest accepted customer number.
pub const CUSTOMER_KEY_MIN: u32 = 1;
/// Largest accepted customer number (five-digit legacy field width).
pub const CUSTOMER_KEY_MAX: u32 = 99_999;

/// Reasons a raw identifier is rejected before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyValidationError {
    /// No identifier was supplied; zero counts as "not supplied".
    Required,
    /// The identifier is below zero.
    NotPositive,
    /// The identifier is wider than the five-digit field.
    ExceedsMaximum,
    /// The identifier is not a whole decimal number.
    NotNumeric,
    /// The request had no object to read the identifier from.
    UnreadableRequest,
}

impl KeyValidationError {
    /// Caller-safe reason rendered in validation failure payloads.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Required => "identifier required",
            Self::NotPositive => "identifier must be positive",
            Self::ExceedsMaximum => "identifier exceeds maximum",
            Self::NotNumeric => "identifier must be a whole number",
            Self::UnreadableRequest => "request body must be a JSON object",
        }
    }
}

impl fmt::Display for KeyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for KeyValidationError {}

/// Untrusted identifier exactly as it arrived from a caller.
///
/// Path segments and string-typed body fields arrive as [`RawCustomerKey::Text`];
/// integer body fields arrive as [`RawCustomerKey::Number`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCustomerKey {
    /// The identifier was missing or explicitly `null`.
    Absent,
    /// An integral value.
    Number(i64),
    /// Textual input still to be parsed.
    Text(String),
    /// A value of the wrong shape (fractional number, boolean, object).
    Malformed,
    /// The request body was unreadable or not an object, so no field exists.
    Unreadable,
}

impl From<Option<i64>> for RawCustomerKey {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Absent, Self::Number)
    }
}

impl From<i64> for RawCustomerKey {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawCustomerKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Validated customer number in the range `1..=99999`.
///
/// # Examples
/// ```
/// use customer_inquiry::domain::{CustomerKey, KeyValidationError, RawCustomerKey};
///
/// let key = CustomerKey::validate(RawCustomerKey::from(12345_i64)).expect("valid key");
/// assert_eq!(key.get(), 12345);
///
/// let err = CustomerKey::validate(RawCustomerKey::from(0_i64)).unwrap_err();
/// assert_eq!(err, KeyValidationError::Required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct CustomerKey(u32);

impl CustomerKey {
    /// Apply the validation policy to untrusted input.
    pub fn validate(raw: RawCustomerKey) -> Result<Self, KeyValidationError> {
        match raw {
            RawCustomerKey::Absent => Err(KeyValidationError::Required),
            RawCustomerKey::Number(value) => Self::from_number(value),
            RawCustomerKey::Text(text) => Self::from_text(&text),
            RawCustomerKey::Malformed => Err(KeyValidationError::NotNumeric),
            RawCustomerKey::Unreadable => Err(KeyValidationError::UnreadableRequest),
        }
    }

    /// The customer number as an unsigned integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    fn from_number(value: i64) -> Result<Self, KeyValidationError> {
        match value {
            0 => Err(KeyValidationError::Required),
            v if v < i64::from(CUSTOMER_KEY_MIN) => Err(KeyValidationError::NotPositive),
            v => u32::try_from(v)
                .ok()
                .filter(|n| *n <= CUSTOMER_KEY_MAX)
                .map(Self)
                .ok_or(KeyValidationError::ExceedsMaximum),
        }
    }

    fn from_text(text: &str) -> Result<Self, KeyValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(KeyValidationError::Required);
        }

        let (negative, digits) = match (trimmed.strip_prefix('-'), trimmed.strip_prefix('+')) {
            (Some(rest), _) => (true, rest),
            (None, Some(rest)) => (false, rest),
            (None, None) => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyValidationError::NotNumeric);
        }

        match trimmed.parse::<i64>() {
            Ok(value) => Self::from_number(value),
            // All digits but wider than i64: the sign decides the rule.
            Err(_) if negative => Err(KeyValidationError::NotPositive),
            Err(_) => Err(KeyValidationError::ExceedsMaximum),
        }
    }
}

impl fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CustomerKey> for u32 {
    fn from(value: CustomerKey) -> Self {
        value.0
    }
}

impl TryFrom<i64> for CustomerKey {
    type Error = KeyValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}
