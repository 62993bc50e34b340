//! Recording record-store double and customer builders for integration tests.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use customer_inquiry::domain::ports::{CustomerRecordStore, CustomerRecordStoreError};
use customer_inquiry::domain::{CustomerKey, CustomerRecord, CustomerRecordDraft};

/// What the recording store answers with.
#[derive(Clone)]
pub(crate) enum StoreResponse {
    Records(Vec<CustomerRecord>),
    Fault(CustomerRecordStoreError),
}

/// Store double that records every key it is asked for.
#[derive(Clone)]
pub(crate) struct RecordingCustomerStore {
    calls: Arc<Mutex<Vec<u32>>>,
    response: Arc<Mutex<StoreResponse>>,
}

impl RecordingCustomerStore {
    pub(crate) fn new(response: StoreResponse) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(response)),
        }
    }

    pub(crate) fn with_records(records: Vec<CustomerRecord>) -> Self {
        Self::new(StoreResponse::Records(records))
    }

    pub(crate) fn calls(&self) -> Vec<u32> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl CustomerRecordStore for RecordingCustomerStore {
    async fn find_by_key(
        &self,
        key: CustomerKey,
    ) -> Result<Option<CustomerRecord>, CustomerRecordStoreError> {
        self.calls.lock().expect("calls lock").push(key.get());
        match self.response.lock().expect("response lock").clone() {
            StoreResponse::Records(records) => {
                Ok(records.into_iter().find(|record| record.key() == key))
            }
            StoreResponse::Fault(error) => Err(error),
        }
    }
}

/// Build a valid customer with the given number and balance.
pub(crate) fn customer(customer_number: i64, balance: &str) -> CustomerRecord {
    CustomerRecord::try_from_draft(CustomerRecordDraft {
        customer_number,
        name: "ACME Corporation".into(),
        address: "1 Industrial Way".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        postal_code: 62_701,
        phone: "217-555-0100".into(),
        balance: BigDecimal::from_str(balance).expect("balance decimal"),
        credit_limit: BigDecimal::from_str("5000.00").expect("credit limit decimal"),
        last_order_date: NaiveDate::from_ymd_opt(2024, 3, 15),
    })
    .expect("valid customer")
}
