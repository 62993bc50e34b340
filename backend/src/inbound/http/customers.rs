//! Customer inquiry handlers.
//!
//! ```text
//! GET  /api/v1/customers/12345
//! POST /api/v1/customers/inquire {"customerNumber":12345}
//! ```
//!
//! Both routes only translate transport input into a [`RawCustomerKey`]; the
//! inquiry port does the rest. That includes requests with nothing to read:
//! an empty path segment or a body that is not a JSON object still produce a
//! rendered validation failure.

use actix_web::{HttpResponse, get, post, web};
use serde_json::Value;
use tracing::debug;

use crate::domain::RawCustomerKey;
use crate::domain::ports::{InquiryContext, InquiryRequest, InquirySource};
use crate::inbound::http::response::inquiry_response;
use crate::inbound::http::state::HttpState;

/// Body field carrying the identifier.
pub const CUSTOMER_NUMBER_FIELD: &str = "customerNumber";

/// Read the identifier out of a JSON body field.
///
/// Integers that fit `i64` arrive as numbers; wider integers, fractions and
/// exponents go through text parsing so the validator classifies them.
fn raw_key_from_json(value: Option<&Value>) -> RawCustomerKey {
    match value {
        None | Some(Value::Null) => RawCustomerKey::Absent,
        Some(Value::Number(number)) => number
            .as_i64()
            .map_or_else(|| RawCustomerKey::Text(number.to_string()), RawCustomerKey::Number),
        Some(Value::String(text)) => RawCustomerKey::Text(text.clone()),
        Some(_) => RawCustomerKey::Malformed,
    }
}

async fn run_inquiry(
    state: &HttpState,
    raw_key: RawCustomerKey,
    source: InquirySource,
) -> HttpResponse {
    let request = InquiryRequest::new(raw_key, source, InquiryContext::from_ambient());
    let outcome = state.inquiry.inquire(request).await;
    inquiry_response(&outcome.render())
}

/// Look up a customer by the number in the path.
#[utoipa::path(
    get,
    path = "/api/v1/customers/{customerNumber}",
    params(
        ("customerNumber" = String, Path, description = "Customer number, 1 to 99999")
    ),
    responses(
        (status = 200, description = "Customer found", body = crate::inbound::http::schemas::CustomerPayloadSchema),
        (status = 400, description = "Invalid customer number", body = crate::inbound::http::schemas::ErrorPayloadSchema),
        (status = 404, description = "No customer under this number", body = crate::inbound::http::schemas::ErrorPayloadSchema),
        (status = 500, description = "Lookup failed", body = crate::inbound::http::schemas::ErrorPayloadSchema)
    ),
    tags = ["customers"],
    operation_id = "getCustomer"
)]
#[get("/customers/{customerNumber}")]
pub async fn get_customer(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    let raw_key = RawCustomerKey::Text(path.into_inner());
    run_inquiry(&state, raw_key, InquirySource::Path).await
}

/// `GET /customers` and `GET /customers/` with no number in the path.
///
/// Registered as a plain resource in [`super::configure_api`] because the
/// router never matches an empty `{customerNumber}` segment.
pub async fn get_customer_without_number(state: web::Data<HttpState>) -> HttpResponse {
    run_inquiry(&state, RawCustomerKey::Absent, InquirySource::Path).await
}

fn raw_key_from_body(payload: Result<web::Json<Value>, actix_web::Error>) -> RawCustomerKey {
    match payload.map(web::Json::into_inner) {
        Ok(Value::Object(fields)) => raw_key_from_json(fields.get(CUSTOMER_NUMBER_FIELD)),
        Ok(_) => RawCustomerKey::Unreadable,
        Err(error) => {
            debug!(%error, "inquiry body unreadable");
            RawCustomerKey::Unreadable
        }
    }
}

/// Look up a customer by the number in a JSON body.
#[utoipa::path(
    post,
    path = "/api/v1/customers/inquire",
    request_body = crate::inbound::http::schemas::InquireRequestSchema,
    responses(
        (status = 200, description = "Customer found", body = crate::inbound::http::schemas::CustomerPayloadSchema),
        (status = 400, description = "Invalid customer number or body", body = crate::inbound::http::schemas::ErrorPayloadSchema),
        (status = 404, description = "No customer under this number", body = crate::inbound::http::schemas::ErrorPayloadSchema),
        (status = 500, description = "Lookup failed", body = crate::inbound::http::schemas::ErrorPayloadSchema)
    ),
    tags = ["customers"],
    operation_id = "inquireCustomer"
)]
#[post("/customers/inquire")]
pub async fn inquire_customer(
    state: web::Data<HttpState>,
    payload: Result<web::Json<Value>, actix_web::Error>,
) -> HttpResponse {
    let raw_key = raw_key_from_body(payload);
    run_inquiry(&state, raw_key, InquirySource::Body).await
}
