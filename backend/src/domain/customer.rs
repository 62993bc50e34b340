//! Customer master record snapshot.
//!
//! Records are read-only: adapters assemble a [`CustomerRecordDraft`] from
//! whatever shape their storage uses and [`CustomerRecord::try_from_draft`]
//! enforces the field widths of the legacy customer master file. Fixed-width
//! padding is stripped from the end of every text field before measuring.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use super::customer_key::{CustomerKey, KeyValidationError, RawCustomerKey};
use super::ledger_amount::{LedgerAmount, LedgerAmountError};

/// Maximum length of the customer name.
pub const NAME_MAX: usize = 30;
/// Maximum length of the address line.
pub const ADDRESS_MAX: usize = 30;
/// Maximum length of the city.
pub const CITY_MAX: usize = 20;
/// Exact length of the state or region code.
pub const STATE_LEN: usize = 2;
/// Maximum length of the phone number.
pub const PHONE_MAX: usize = 12;
/// Largest five-digit postal code.
pub const POSTAL_CODE_MAX: u32 = 99_999;

/// Violations detected while assembling a [`CustomerRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerRecordError {
    /// The stored customer number fails key validation.
    #[error("customer number is invalid: {0}")]
    InvalidKey(#[source] KeyValidationError),
    /// A text field is wider than its legacy column.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    /// The state code is not two characters after trimming.
    #[error("state must be exactly 2 characters, found {actual}")]
    StateLength { actual: usize },
    /// The postal code does not fit five digits.
    #[error("postal code {value} is outside 0..=99999")]
    PostalCodeOutOfRange { value: i64 },
    /// A ledger amount is lossy or too wide.
    #[error("{field} is invalid: {source}")]
    Amount {
        field: &'static str,
        #[source]
        source: LedgerAmountError,
    },
    /// Credit limits are never below zero.
    #[error("credit limit must not be negative")]
    NegativeCreditLimit,
}

impl CustomerRecordError {
    fn amount(field: &'static str) -> impl FnOnce(LedgerAmountError) -> Self {
        move |source| Self::Amount { field, source }
    }
}

/// Five-digit postal code rendered zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostalCode(u32);

impl PostalCode {
    /// Validate a postal code in `0..=99999`.
    pub fn new(value: i64) -> Result<Self, CustomerRecordError> {
        u32::try_from(value)
            .ok()
            .filter(|code| *code <= POSTAL_CODE_MAX)
            .map(Self)
            .ok_or(CustomerRecordError::PostalCodeOutOfRange { value })
    }

    /// Numeric value of the code.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

/// Unvalidated record fields as read from storage or a seed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecordDraft {
    pub customer_number: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: i64,
    pub phone: String,
    pub balance: BigDecimal,
    pub credit_limit: BigDecimal,
    pub last_order_date: Option<NaiveDate>,
}

/// Immutable snapshot of one customer master row.
///
/// ## Invariants
/// - `key` is within `1..=99999`.
/// - Text fields respect the legacy widths (name 30, address 30, city 20,
///   phone 12) and `state` is exactly two characters.
/// - `balance` and `credit_limit` are exact scale-2 decimals; the credit limit
///   is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    key: CustomerKey,
    name: String,
    address: String,
    city: String,
    state: String,
    postal_code: PostalCode,
    phone: String,
    balance: LedgerAmount,
    credit_limit: LedgerAmount,
    last_order_date: Option<NaiveDate>,
}

impl CustomerRecord {
    /// Validate a draft into a record.
    pub fn try_from_draft(draft: CustomerRecordDraft) -> Result<Self, CustomerRecordError> {
        let CustomerRecordDraft {
            customer_number,
            name,
            address,
            city,
            state,
            postal_code,
            phone,
            balance,
            credit_limit,
            last_order_date,
        } = draft;

        let key = CustomerKey::validate(RawCustomerKey::Number(customer_number))
            .map_err(CustomerRecordError::InvalidKey)?;

        let state = unpad(state);
        let state_len = state.chars().count();
        if state_len != STATE_LEN {
            return Err(CustomerRecordError::StateLength { actual: state_len });
        }

        let balance = LedgerAmount::new(balance).map_err(CustomerRecordError::amount("balance"))?;
        let credit_limit = LedgerAmount::new(credit_limit)
            .map_err(CustomerRecordError::amount("credit limit"))?;
        if credit_limit.is_negative() {
            return Err(CustomerRecordError::NegativeCreditLimit);
        }

        Ok(Self {
            key,
            name: bounded("name", name, NAME_MAX)?,
            address: bounded("address", address, ADDRESS_MAX)?,
            city: bounded("city", city, CITY_MAX)?,
            state,
            postal_code: PostalCode::new(postal_code)?,
            phone: bounded("phone", phone, PHONE_MAX)?,
            balance,
            credit_limit,
            last_order_date,
        })
    }

    pub fn key(&self) -> CustomerKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> PostalCode {
        self.postal_code
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn balance(&self) -> &LedgerAmount {
        &self.balance
    }

    pub fn credit_limit(&self) -> &LedgerAmount {
        &self.credit_limit
    }

    pub fn last_order_date(&self) -> Option<NaiveDate> {
        self.last_order_date
    }
}

impl TryFrom<CustomerRecordDraft> for CustomerRecord {
    type Error = CustomerRecordError;

    fn try_from(value: CustomerRecordDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(value)
    }
}

fn unpad(mut value: String) -> String {
    let kept = value.trim_end().len();
    value.truncate(kept);
    value
}

fn bounded(field: &'static str, value: String, max: usize) -> Result<String, CustomerRecordError> {
    let value = unpad(value);
    if value.chars().count() > max {
        return Err(CustomerRecordError::TooLong { field, max });
    }
    Ok(value)
}
