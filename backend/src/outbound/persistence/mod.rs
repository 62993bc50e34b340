//! PostgreSQL persistence adapter using Diesel.
//!
//! - **Thin adapter**: only translates `customer_master` rows into domain
//!   drafts; record validation stays in the domain.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: `bb8` pools through `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use customer_inquiry::outbound::persistence::{DbPool, DieselCustomerRecordStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/customers")).await?;
//! let store = DieselCustomerRecordStore::new(pool);
//! ```

mod diesel_customer_record_store;
mod diesel_error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_customer_record_store::DieselCustomerRecordStore;
pub use pool::{DbPool, PoolConfig, PoolError};
