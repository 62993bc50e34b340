//! OpenAPI schema definitions for the inquiry payloads.
//!
//! Domain payload types stay free of utoipa derives. The wrappers here mirror
//! their wire shape and are registered under the domain type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The identifier or request body failed validation.
    #[schema(rename = "VALIDATION_ERROR")]
    ValidationError,
    /// No customer is stored under the identifier.
    #[schema(rename = "NOT_FOUND")]
    NotFound,
    /// The lookup failed; details are logged, not returned.
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::ErrorPayload`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorPayload)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorPayloadSchema {
    /// Human-readable reason.
    #[schema(example = "identifier required")]
    message: String,
    /// Stable machine-readable code.
    error: ErrorCodeSchema,
}

/// OpenAPI schema for [`crate::domain::CustomerPayload`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CustomerPayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CustomerPayloadSchema {
    #[schema(example = 12345, minimum = 1, maximum = 99999)]
    customer_number: u32,
    #[schema(example = "ACME Corporation", max_length = 30)]
    customer_name: String,
    #[schema(example = "1 Industrial Way", max_length = 30)]
    address: String,
    #[schema(example = "Springfield", max_length = 20)]
    city: String,
    #[schema(example = "IL", min_length = 2, max_length = 2)]
    state: String,
    /// Five digits, zero-padded.
    #[schema(example = "00627", pattern = "^[0-9]{5}$")]
    zip_code: String,
    #[schema(example = "217-555-0100", max_length = 12)]
    phone: String,
    /// Signed decimal with exactly two fraction digits.
    #[schema(example = "1500.75", pattern = "^-?[0-9]{1,7}\\.[0-9]{2}$")]
    balance: String,
    /// Non-negative decimal with exactly two fraction digits.
    #[schema(example = "5000.00", pattern = "^[0-9]{1,7}\\.[0-9]{2}$")]
    credit_limit: String,
    /// ISO-8601 calendar date; omitted when the customer has never ordered.
    #[schema(example = "2024-03-15", format = Date)]
    last_order_date: Option<String>,
}

/// Request body for `POST /api/v1/customers/inquire`.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InquireRequestSchema {
    /// Customer number as an integer or decimal string; `null` or absent is
    /// rejected as missing.
    #[schema(example = 12345)]
    customer_number: Option<serde_json::Value>,
}
