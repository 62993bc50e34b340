//! Customer inquiry pipeline.
//!
//! `validate -> find_by_key -> classify`, in that order, once per call. An
//! invalid key short-circuits before the store is touched. The lookup runs
//! under a timeout and a panic guard so that every failure the store can
//! produce ends as [`InquiryOutcome::SystemError`].

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::{Instrument, Span, debug, error, field, info, info_span};

use crate::domain::ports::{CustomerInquiry, CustomerRecordStore, InquiryRequest};
use crate::domain::{
    CustomerKey, CustomerRecord, InquiryOutcome, SystemFault, classify_lookup,
};

/// Lookup budget applied when none is configured.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Stateless inquiry service over a record store.
///
/// Holds only shared, immutable data, so one instance serves any number of
/// concurrent requests.
pub struct CustomerInquiryService<S: ?Sized> {
    store: Arc<S>,
    lookup_timeout: Duration,
}

impl<S: ?Sized> Clone for CustomerInquiryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            lookup_timeout: self.lookup_timeout,
        }
    }
}

impl<S: ?Sized> CustomerInquiryService<S> {
    pub fn new(store: Arc<S>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// Service using [`DEFAULT_LOOKUP_TIMEOUT`].
    pub fn with_default_timeout(store: Arc<S>) -> Self {
        Self::new(store, DEFAULT_LOOKUP_TIMEOUT)
    }
}

impl<S> CustomerInquiryService<S>
where
    S: CustomerRecordStore + ?Sized,
{
    async fn guarded_lookup(&self, key: CustomerKey) -> Result<Option<CustomerRecord>, SystemFault> {
        let lookup = AssertUnwindSafe(self.store.find_by_key(key)).catch_unwind();
        match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(result)) => result.map_err(SystemFault::from),
            Ok(Err(payload)) => Err(SystemFault::Panicked {
                message: panic_message(payload.as_ref()),
            }),
            Err(_) => Err(SystemFault::Timeout {
                after_ms: u64::try_from(self.lookup_timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }

    async fn run(&self, request: InquiryRequest) -> InquiryOutcome {
        let key = match CustomerKey::validate(request.raw_key) {
            Ok(key) => key,
            Err(reason) => {
                debug!(%reason, "customer key rejected");
                return InquiryOutcome::ValidationFailure(reason);
            }
        };
        Span::current().record("customer_number", key.get());

        let outcome = classify_lookup(key, self.guarded_lookup(key).await);
        match &outcome {
            InquiryOutcome::Success(_) => info!("customer found"),
            InquiryOutcome::NotFound(_) => info!("customer not found"),
            InquiryOutcome::SystemError(fault) => error!(error = %fault, "customer lookup failed"),
            InquiryOutcome::ValidationFailure(_) => {}
        }
        outcome
    }
}

#[async_trait]
impl<S> CustomerInquiry for CustomerInquiryService<S>
where
    S: CustomerRecordStore + ?Sized,
{
    async fn inquire(&self, request: InquiryRequest) -> InquiryOutcome {
        let span = info_span!(
            "customer_inquiry",
            trace_id = request.context.trace_id.map(field::display),
            source = %request.source,
            customer_number = field::Empty,
            outcome = field::Empty,
        );
        let outcome = self.run(request).instrument(span.clone()).await;
        span.record("outcome", outcome.label());
        outcome
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
