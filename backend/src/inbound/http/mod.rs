//! HTTP inbound adapter exposing the inquiry endpoints and health checks.

pub mod customers;
pub mod health;
pub mod response;
pub mod schemas;
pub mod state;

use actix_web::web;

/// Register the versioned inquiry routes under `/api/v1`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(response::json_config())
            .service(
                web::resource(["/customers", "/customers/"])
                    .route(web::get().to(customers::get_customer_without_number)),
            )
            .service(customers::get_customer)
            .service(customers::inquire_customer),
    );
}
