//! Driven port for keyed customer record reads.
//!
//! The store is an external collaborator: it performs one keyed read per call
//! and reports whether a record exists. It never scans, never partially
//! matches, and never mutates.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{CustomerKey, CustomerRecord};

/// Errors raised by customer record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerRecordStoreError {
    /// The backing store could not be reached.
    #[error("customer record store connection failed: {message}")]
    Connection { message: String },
    /// The keyed read failed during execution.
    #[error("customer record store query failed: {message}")]
    Query { message: String },
    /// A stored row could not be turned into a valid record.
    #[error("customer record could not be decoded: {message}")]
    Decode { message: String },
}

impl CustomerRecordStoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Keyed read capability over the customer master.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRecordStore: Send + Sync {
    /// Fetch the record stored under `key`, or `None` when there is none.
    async fn find_by_key(
        &self,
        key: CustomerKey,
    ) -> Result<Option<CustomerRecord>, CustomerRecordStoreError>;

    /// Confirm the store can serve lookups right now. In-memory stores are
    /// always available.
    async fn check_available(&self) -> Result<(), CustomerRecordStoreError> {
        Ok(())
    }
}

/// In-memory store used when no database is configured.
///
/// The map is fixed at construction; lookups only read it.
#[derive(Debug, Default, Clone)]
pub struct FixtureCustomerRecordStore {
    records: HashMap<CustomerKey, CustomerRecord>,
}

impl FixtureCustomerRecordStore {
    /// Build a store holding `records`, keyed by their customer number.
    pub fn from_records(records: impl IntoIterator<Item = CustomerRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.key(), record))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CustomerRecordStore for FixtureCustomerRecordStore {
    async fn find_by_key(
        &self,
        key: CustomerKey,
    ) -> Result<Option<CustomerRecord>, CustomerRecordStoreError> {
        Ok(self.records.get(&key).cloned())
    }
}
