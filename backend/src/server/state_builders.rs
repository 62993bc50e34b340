//! Builders for the record store and the HTTP state wrapping it.

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use customer_inquiry::domain::CustomerInquiryService;
use customer_inquiry::domain::ports::{CustomerRecordStore, FixtureCustomerRecordStore};
use customer_inquiry::inbound::http::state::HttpState;
use customer_inquiry::outbound::persistence::DieselCustomerRecordStore;
use customer_inquiry::outbound::seed_file::load_seed_store;

use super::ServerConfig;

/// Pick the record store adapter.
///
/// A database pool wins; otherwise the fixture store is seeded from the seed
/// file, or left empty when neither is configured.
pub(super) fn build_record_store(config: &ServerConfig) -> io::Result<Arc<dyn CustomerRecordStore>> {
    match (&config.db_pool, &config.seed_path) {
        (Some(pool), _) => {
            info!("serving customer lookups from PostgreSQL");
            Ok(Arc::new(DieselCustomerRecordStore::new(pool.clone())))
        }
        (None, Some(path)) => {
            let store = load_seed_store(path).map_err(io::Error::other)?;
            Ok(Arc::new(store))
        }
        (None, None) => {
            warn!("no database or seed file configured; every lookup will be not found");
            Ok(Arc::new(FixtureCustomerRecordStore::default()))
        }
    }
}

pub(super) fn build_http_state(
    config: &ServerConfig,
    store: Arc<dyn CustomerRecordStore>,
) -> web::Data<HttpState> {
    let service = CustomerInquiryService::new(store, config.lookup_timeout);
    web::Data::new(HttpState::new(Arc::new(service)))
}
