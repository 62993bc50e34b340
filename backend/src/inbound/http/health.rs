//! Liveness and readiness checks for orchestrators and load balancers.
//!
//! Readiness follows the record store: readiness stays 503 until the server
//! has bound and attached its store, and drops back to 503 whenever the store
//! reports itself unavailable (for example, no pooled database connection
//! within the checkout timeout). Liveness only reflects shutdown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::domain::ports::CustomerRecordStore;

/// Health state shared between the server and the health handlers.
pub struct HealthState {
    live: AtomicBool,
    store: OnceLock<Arc<dyn CustomerRecordStore>>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            live: AtomicBool::new(true),
            store: OnceLock::new(),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the store serving lookups. Later calls keep the first store.
    pub fn mark_ready(&self, store: Arc<dyn CustomerRecordStore>) {
        if self.store.set(store).is_err() {
            warn!("readiness store already attached");
        }
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Ready once a store is attached and it reports itself available.
    pub async fn is_ready(&self) -> bool {
        let Some(store) = self.store.get() else {
            return false;
        };
        match store.check_available().await {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "record store unavailable; reporting not ready");
                false
            }
        }
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn health_response(healthy: bool) -> HttpResponse {
    let mut response = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness check. 200 while the record store can serve lookups.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Record store is available"),
        (status = 503, description = "Server not bound yet or record store unavailable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_ready().await)
}

/// Liveness check. 200 while the process is alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_alive())
}
