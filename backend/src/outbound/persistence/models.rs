//! Internal Diesel row structs. Never exposed outside the persistence adapter.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::CustomerRecordDraft;

use super::schema::customer_master;

/// Row read from `customer_master`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer_master)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerMasterRow {
    pub customer_number: i32,
    pub customer_name: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
    pub phone: String,
    pub balance: BigDecimal,
    pub credit_limit: BigDecimal,
    pub last_order_date: Option<NaiveDate>,
}

impl From<CustomerMasterRow> for CustomerRecordDraft {
    fn from(row: CustomerMasterRow) -> Self {
        Self {
            customer_number: i64::from(row.customer_number),
            name: row.customer_name,
            address: row.address_line,
            city: row.city,
            state: row.state,
            postal_code: i64::from(row.zip_code),
            phone: row.phone,
            balance: row.balance,
            credit_limit: row.credit_limit,
            last_order_date: row.last_order_date,
        }
    }
}
