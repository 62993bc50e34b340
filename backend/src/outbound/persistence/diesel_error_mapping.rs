//! Diesel and pool error mapping for the customer record store.

use tracing::debug;

use crate::domain::ports::CustomerRecordStoreError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> CustomerRecordStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CustomerRecordStoreError::connection(message)
        }
    }
}

/// Map Diesel failures onto store errors without carrying SQL text along.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> CustomerRecordStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CustomerRecordStoreError::connection("database connection error")
        }
        DieselError::DeserializationError(err) => {
            CustomerRecordStoreError::decode(format!("column could not be read: {err}"))
        }
        DieselError::QueryBuilderError(_) => CustomerRecordStoreError::query("database query error"),
        _ => CustomerRecordStoreError::query("database error"),
    }
}
