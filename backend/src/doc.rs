//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers both inquiry endpoints, the health checks, and the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe the
//! wire payloads without coupling domain types to utoipa.
//!
//! The document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    CustomerPayloadSchema, ErrorCodeSchema, ErrorPayloadSchema, InquireRequestSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the customer inquiry API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer inquiry API",
        description = "Read-only lookup of customer master records by customer number."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::customers::get_customer,
        crate::inbound::http::customers::inquire_customer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CustomerPayloadSchema,
        ErrorPayloadSchema,
        ErrorCodeSchema,
        InquireRequestSchema
    )),
    tags(
        (name = "customers", description = "Customer inquiries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
