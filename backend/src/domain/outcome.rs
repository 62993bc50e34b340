//! Inquiry outcomes and their rendering into the public response contract.
//!
//! Every inquiry ends in exactly one [`InquiryOutcome`]. Rendering is pure:
//! the same outcome always yields the same [`RenderedInquiry`], and system
//! fault details never reach the payload.

use chrono::NaiveDate;
use serde::Serialize;

use super::customer::CustomerRecord;
use super::customer_key::{CustomerKey, KeyValidationError};
use super::ledger_amount::LedgerAmount;
use super::ports::CustomerRecordStoreError;

/// Message rendered for unmatched keys.
pub const NOT_FOUND_MESSAGE: &str = "Customer not found";
/// Message rendered for every system fault.
pub const SYSTEM_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Internal cause of a [`InquiryOutcome::SystemError`]. Logged, never rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SystemFault {
    /// The record store reported a failure.
    #[error(transparent)]
    Store(#[from] CustomerRecordStoreError),
    /// The lookup did not finish within the configured budget.
    #[error("record lookup timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },
    /// The lookup panicked.
    #[error("record lookup panicked: {message}")]
    Panicked { message: String },
    /// The store answered with a record for a different key.
    #[error("store returned customer {returned} for requested key {requested}")]
    KeyMismatch {
        requested: CustomerKey,
        returned: CustomerKey,
    },
}

/// Terminal state of one inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquiryOutcome {
    /// The store holds a record under the validated key.
    Success(CustomerRecord),
    /// The identifier was rejected; the store was not consulted.
    ValidationFailure(KeyValidationError),
    /// The key is well formed but nothing is stored under it.
    NotFound(CustomerKey),
    /// The lookup failed; the cause stays server-side.
    SystemError(SystemFault),
}

/// Classify the result of a keyed lookup for `key`.
///
/// A record whose key differs from `key` breaks the store contract and is
/// reported as a system fault rather than returned to the caller.
///
/// # Examples
/// ```
/// use customer_inquiry::domain::{
///     classify_lookup, CustomerKey, InquiryOutcome, RawCustomerKey,
/// };
///
/// let key = CustomerKey::validate(RawCustomerKey::from(99_999_i64)).expect("valid key");
/// assert_eq!(classify_lookup(key, Ok(None)), InquiryOutcome::NotFound(key));
/// ```
pub fn classify_lookup(
    key: CustomerKey,
    result: Result<Option<CustomerRecord>, SystemFault>,
) -> InquiryOutcome {
    match result {
        Ok(Some(record)) if record.key() == key => InquiryOutcome::Success(record),
        Ok(Some(record)) => InquiryOutcome::SystemError(SystemFault::KeyMismatch {
            requested: key,
            returned: record.key(),
        }),
        Ok(None) => InquiryOutcome::NotFound(key),
        Err(fault) => InquiryOutcome::SystemError(fault),
    }
}

/// Response status attached to a rendered outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryStatus {
    /// 200
    Ok,
    /// 400
    BadRequest,
    /// 404
    NotFound,
    /// 500
    InternalError,
}

impl InquiryStatus {
    /// HTTP-compatible numeric code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }
}

/// Stable machine-readable error identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `VALIDATION_ERROR`: the caller sent an unusable identifier.
    ValidationError,
    /// `NOT_FOUND`: no record under a valid identifier.
    NotFound,
    /// `INTERNAL_ERROR`: the lookup failed server-side.
    InternalError,
}

/// Error body: `{ "message": ..., "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub message: String,
    pub error: ErrorCode,
}

impl ErrorPayload {
    /// Validation failure with a caller-facing reason.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: ErrorCode::ValidationError,
        }
    }

    pub fn not_found() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_owned(),
            error: ErrorCode::NotFound,
        }
    }

    pub fn internal() -> Self {
        Self {
            message: SYSTEM_ERROR_MESSAGE.to_owned(),
            error: ErrorCode::InternalError,
        }
    }
}

/// Flattened customer fields in the published camelCase shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub customer_number: u32,
    pub customer_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub balance: LedgerAmount,
    pub credit_limit: LedgerAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_date: Option<NaiveDate>,
}

impl From<&CustomerRecord> for CustomerPayload {
    fn from(record: &CustomerRecord) -> Self {
        Self {
            customer_number: record.key().get(),
            customer_name: record.name().to_owned(),
            address: record.address().to_owned(),
            city: record.city().to_owned(),
            state: record.state().to_owned(),
            zip_code: record.postal_code().to_string(),
            phone: record.phone().to_owned(),
            balance: record.balance().clone(),
            credit_limit: record.credit_limit().clone(),
            last_order_date: record.last_order_date(),
        }
    }
}

/// Either payload shape; serialises without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InquiryPayload {
    /// Rendered for [`InquiryOutcome::Success`].
    Customer(CustomerPayload),
    /// Rendered for every other outcome.
    Error(ErrorPayload),
}

/// Status and payload produced by [`InquiryOutcome::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInquiry {
    pub status: InquiryStatus,
    pub payload: InquiryPayload,
}

impl InquiryOutcome {
    /// Map the outcome onto the external status and payload.
    ///
    /// | Outcome             | Status | `error`            |
    /// |---------------------|--------|--------------------|
    /// | `Success`           | 200    | n/a                |
    /// | `ValidationFailure` | 400    | `VALIDATION_ERROR` |
    /// | `NotFound`          | 404    | `NOT_FOUND`        |
    /// | `SystemError`       | 500    | `INTERNAL_ERROR`   |
    #[must_use]
    pub fn render(&self) -> RenderedInquiry {
        let (status, payload) = match self {
            Self::Success(record) => (
                InquiryStatus::Ok,
                InquiryPayload::Customer(CustomerPayload::from(record)),
            ),
            Self::ValidationFailure(reason) => (
                InquiryStatus::BadRequest,
                InquiryPayload::Error(ErrorPayload::validation(reason.reason())),
            ),
            Self::NotFound(_) => (
                InquiryStatus::NotFound,
                InquiryPayload::Error(ErrorPayload::not_found()),
            ),
            Self::SystemError(_) => (
                InquiryStatus::InternalError,
                InquiryPayload::Error(ErrorPayload::internal()),
            ),
        };
        RenderedInquiry { status, payload }
    }

    /// Short label used in logs and spans.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::ValidationFailure(_) => "validation_failure",
            Self::NotFound(_) => "not_found",
            Self::SystemError(_) => "system_error",
        }
    }
}
