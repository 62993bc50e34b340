//! Driving port for customer inquiries.
//!
//! Inbound adapters hand the untrusted identifier and the per-call context to
//! this port and receive a classified outcome. They never see store errors.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{InquiryOutcome, RawCustomerKey, TraceId};

/// Where the identifier was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquirySource {
    Path,
    Body,
    CommandLine,
}

impl fmt::Display for InquirySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Path => "path",
            Self::Body => "body",
            Self::CommandLine => "command_line",
        })
    }
}

/// Correlation data passed explicitly into each inquiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InquiryContext {
    pub trace_id: Option<TraceId>,
}

impl InquiryContext {
    /// Capture the trace identifier in scope for the current task.
    #[must_use]
    pub fn from_ambient() -> Self {
        Self {
            trace_id: TraceId::current(),
        }
    }
}

/// One inquiry as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryRequest {
    pub raw_key: RawCustomerKey,
    pub source: InquirySource,
    pub context: InquiryContext,
}

impl InquiryRequest {
    pub fn new(raw_key: RawCustomerKey, source: InquirySource, context: InquiryContext) -> Self {
        Self {
            raw_key,
            source,
            context,
        }
    }
}

/// Use-case port: validate, look up, classify.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerInquiry: Send + Sync {
    /// Run one inquiry to completion. Always yields exactly one outcome.
    async fn inquire(&self, request: InquiryRequest) -> InquiryOutcome;
}
