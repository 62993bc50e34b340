//! PostgreSQL-backed `CustomerRecordStore` using Diesel.
//!
//! One `SELECT ... WHERE customer_number = $1` per lookup against the legacy
//! `customer_master` table. Rows that break the record constraints are
//! reported as [`CustomerRecordStoreError::Decode`] rather than silently
//! repaired.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CustomerRecordStore, CustomerRecordStoreError};
use crate::domain::{CustomerKey, CustomerRecord, CustomerRecordDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::CustomerMasterRow;
use super::pool::DbPool;
use super::schema::customer_master;

/// Diesel-backed implementation of the `CustomerRecordStore` port.
#[derive(Clone)]
pub struct DieselCustomerRecordStore {
    pool: DbPool,
}

impl DieselCustomerRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: CustomerMasterRow) -> Result<CustomerRecord, CustomerRecordStoreError> {
    let customer_number = row.customer_number;
    CustomerRecord::try_from_draft(CustomerRecordDraft::from(row)).map_err(|err| {
        CustomerRecordStoreError::decode(format!("customer {customer_number}: {err}"))
    })
}

#[async_trait]
impl CustomerRecordStore for DieselCustomerRecordStore {
    async fn find_by_key(
        &self,
        key: CustomerKey,
    ) -> Result<Option<CustomerRecord>, CustomerRecordStoreError> {
        let customer_number = i32::try_from(key.get())
            .map_err(|_| CustomerRecordStoreError::query("customer number out of column range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = customer_master::table
            .filter(customer_master::customer_number.eq(customer_number))
            .select(CustomerMasterRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    /// Available when a pooled connection can be checked out in time.
    async fn check_available(&self) -> Result<(), CustomerRecordStoreError> {
        self.pool.get().await.map(drop).map_err(map_pool_error)
    }
}
