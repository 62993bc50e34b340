//! HTTP mapping for rendered inquiries.
//!
//! The domain decides status and payload; this module only translates them
//! into Actix responses.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, web};

use crate::domain::{InquiryStatus, RenderedInquiry};

/// Cache policy applied to every inquiry response.
pub const NO_STORE: &str = "no-store";

/// Largest accepted inquiry body, in bytes.
pub const INQUIRY_BODY_LIMIT: usize = 4096;

fn status_for(status: InquiryStatus) -> StatusCode {
    match status {
        InquiryStatus::Ok => StatusCode::OK,
        InquiryStatus::BadRequest => StatusCode::BAD_REQUEST,
        InquiryStatus::NotFound => StatusCode::NOT_FOUND,
        InquiryStatus::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the JSON response for a rendered inquiry.
pub fn inquiry_response(rendered: &RenderedInquiry) -> HttpResponse {
    HttpResponse::build(status_for(rendered.status))
        .insert_header((header::CACHE_CONTROL, NO_STORE))
        .json(&rendered.payload)
}

/// JSON extractor limits for inquiry bodies.
///
/// Extractor failures are not turned into responses here; the handler
/// receives them and feeds them through the inquiry pipeline.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().limit(INQUIRY_BODY_LIMIT)
}
