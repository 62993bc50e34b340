//! Exact two-place monetary amounts for customer ledger fields.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fraction digits carried by every ledger amount.
pub const LEDGER_SCALE: i64 = 2;
/// Maximum number of integer digits (legacy `NUMERIC(9,2)` width).
pub const LEDGER_INTEGER_DIGITS: u32 = 7;

/// Errors raised when constructing a [`LedgerAmount`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerAmountError {
    /// The text is not a decimal number.
    #[error("amount is not a decimal number: {value}")]
    Unparseable { value: String },
    /// The value carries significant digits beyond two decimal places.
    #[error("amount {value} has more than two decimal places")]
    PrecisionLoss { value: String },
    /// The integer part is wider than seven digits.
    #[error("amount {value} exceeds seven integer digits")]
    OutOfRange { value: String },
}

/// Signed decimal amount normalised to scale 2.
///
/// Backed by [`BigDecimal`] so no binary floating point is involved anywhere
/// between storage and the rendered payload. Serialises as a JSON string with
/// exactly two fraction digits.
///
/// # Examples
/// ```
/// use customer_inquiry::domain::LedgerAmount;
///
/// let amount: LedgerAmount = "-12.5".parse().expect("valid amount");
/// assert_eq!(amount.to_string(), "-12.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerAmount(BigDecimal);

impl LedgerAmount {
    /// Normalise `value` to two decimal places, rejecting lossy or oversized
    /// input.
    pub fn new(value: BigDecimal) -> Result<Self, LedgerAmountError> {
        let scaled = value.with_scale(LEDGER_SCALE);
        if scaled != value {
            return Err(LedgerAmountError::PrecisionLoss {
                value: value.to_string(),
            });
        }
        let limit = BigDecimal::from(10_i64.pow(LEDGER_INTEGER_DIGITS));
        if scaled.abs() >= limit {
            return Err(LedgerAmountError::OutOfRange {
                value: value.to_string(),
            });
        }
        Ok(Self(scaled))
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl fmt::Display for LedgerAmount {
    /// The scale is fixed at construction, so the decimal prints plainly with
    /// two fraction digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for LedgerAmount {
    type Err = LedgerAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = BigDecimal::from_str(trimmed).map_err(|_| LedgerAmountError::Unparseable {
            value: trimmed.to_owned(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<BigDecimal> for LedgerAmount {
    type Error = LedgerAmountError;

    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LedgerAmount> for BigDecimal {
    fn from(value: LedgerAmount) -> Self {
        value.0
    }
}

impl Serialize for LedgerAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LedgerAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Whole(i64),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Wire::Whole(value) => Self::new(BigDecimal::from(value)).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1500.75", "1500.75")]
    #[case("-12.5", "-12.50")]
    #[case("0", "0.00")]
    #[case("-0.05", "-0.05")]
    #[case("9999999.99", "9999999.99")]
    #[case(" 42.10 ", "42.10")]
    #[case("3.000", "3.00")]
    fn renders_two_fraction_digits(#[case] input: &str, #[case] expected: &str) {
        let amount: LedgerAmount = input.parse().expect("valid amount");
        assert_eq!(amount.to_string(), expected);
    }

    #[rstest]
    #[case("1.005")]
    #[case("0.001")]
    fn rejects_precision_loss(#[case] input: &str) {
        let err = input.parse::<LedgerAmount>().expect_err("lossy amount");
        assert!(matches!(err, LedgerAmountError::PrecisionLoss { .. }));
    }

    #[rstest]
    #[case("10000000")]
    #[case("-10000000.00")]
    fn rejects_wide_integer_parts(#[case] input: &str) {
        let err = input.parse::<LedgerAmount>().expect_err("oversized amount");
        assert!(matches!(err, LedgerAmountError::OutOfRange { .. }));
    }

    #[rstest]
    fn rejects_non_numeric_text() {
        let err = "twelve".parse::<LedgerAmount>().expect_err("not a number");
        assert_eq!(
            err,
            LedgerAmountError::Unparseable {
                value: "twelve".into()
            }
        );
    }

    #[rstest]
    fn serialises_as_json_string() {
        let amount: LedgerAmount = "-12.5".parse().expect("valid amount");
        let json = serde_json::to_value(&amount).expect("serialise amount");
        assert_eq!(json, serde_json::json!("-12.50"));
    }

    #[rstest]
    #[case(serde_json::json!("1500.75"), "1500.75")]
    #[case(serde_json::json!(250), "250.00")]
    fn deserialises_strings_and_whole_numbers(
        #[case] wire: serde_json::Value,
        #[case] expected: &str,
    ) {
        let amount: LedgerAmount = serde_json::from_value(wire).expect("deserialise amount");
        assert_eq!(amount.to_string(), expected);
    }

    #[rstest]
    #[case("0", false)]
    #[case("-0.00", false)]
    #[case("-0.01", true)]
    fn sign_follows_the_value(#[case] input: &str, #[case] negative: bool) {
        let amount: LedgerAmount = input.parse().expect("valid amount");
        assert_eq!(amount.is_negative(), negative);
    }

    #[rstest]
    #[case("9999999.99")]
    #[case("-9999999.99")]
    #[case("1000000.10")]
    fn widest_amounts_render_in_plain_notation(#[case] input: &str) {
        let amount: LedgerAmount = input.parse().expect("valid amount");
        assert_eq!(amount.to_string(), input);
    }
}
