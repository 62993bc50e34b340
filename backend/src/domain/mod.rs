//! Domain primitives, ports and the inquiry pipeline.
//!
//! Purpose: hold everything that decides what an inquiry means without
//! knowing how it arrived or where records live. Adapters in `inbound` and
//! `outbound` depend on this module; it depends on neither.
//!
//! Public surface:
//! - [`CustomerKey`] and [`RawCustomerKey`] with the key validation policy.
//! - [`CustomerRecord`] and [`LedgerAmount`], the read-only record snapshot.
//! - [`InquiryOutcome`], [`classify_lookup`] and the rendered response types.
//! - [`CustomerInquiryService`], the driving-port implementation.
//! - [`ports`], the store and inquiry traits with fixture adapters.

pub mod customer;
pub mod customer_key;
pub mod inquiry_service;
pub mod ledger_amount;
pub mod outcome;
pub mod ports;
pub mod trace_id;

pub use self::customer::{CustomerRecord, CustomerRecordDraft, CustomerRecordError, PostalCode};
pub use self::customer_key::{
    CUSTOMER_KEY_MAX, CUSTOMER_KEY_MIN, CustomerKey, KeyValidationError, RawCustomerKey,
};
pub use self::inquiry_service::{CustomerInquiryService, DEFAULT_LOOKUP_TIMEOUT};
pub use self::ledger_amount::{LedgerAmount, LedgerAmountError};
pub use self::outcome::{
    CustomerPayload, ErrorCode, ErrorPayload, InquiryOutcome, InquiryPayload, InquiryStatus,
    NOT_FOUND_MESSAGE, RenderedInquiry, SYSTEM_ERROR_MESSAGE, SystemFault, classify_lookup,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
