//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only see the driving
//! port, so they stay testable without a store.

use std::sync::Arc;

use crate::domain::ports::CustomerInquiry;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub inquiry: Arc<dyn CustomerInquiry>,
}

impl HttpState {
    /// Construct state around an inquiry port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use customer_inquiry::domain::CustomerInquiryService;
    /// use customer_inquiry::domain::ports::FixtureCustomerRecordStore;
    /// use customer_inquiry::inbound::http::state::HttpState;
    ///
    /// let store = Arc::new(FixtureCustomerRecordStore::default());
    /// let state = HttpState::new(Arc::new(CustomerInquiryService::with_default_timeout(store)));
    /// let _inquiry = state.inquiry.clone();
    /// ```
    pub fn new(inquiry: Arc<dyn CustomerInquiry>) -> Self {
        Self { inquiry }
    }
}
