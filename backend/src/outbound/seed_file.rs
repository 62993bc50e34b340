//! JSON seed files for the in-memory customer store.
//!
//! A seed file is a JSON array of customers in the same camelCase shape the
//! API returns, with `zipCode` as a number and amounts as decimal strings:
//!
//! ```json
//! [{"customerNumber": 12345, "customerName": "ACME Corporation",
//!   "address": "1 Industrial Way", "city": "Springfield", "state": "IL",
//!   "zipCode": 62701, "phone": "217-555-0100", "balance": "1500.75",
//!   "creditLimit": "5000.00", "lastOrderDate": "2024-03-15"}]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use bigdecimal::BigDecimal;
use cap_std::{ambient_authority, fs::Dir};
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::FixtureCustomerRecordStore;
use crate::domain::{CustomerRecord, CustomerRecordDraft, CustomerRecordError};

/// Errors raised while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedFileError {
    #[error("failed to read seed file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("seed entry {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: CustomerRecordError,
    },
    #[error("customer {customer_number} appears more than once")]
    DuplicateKey { customer_number: u32 },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CustomerSeed {
    customer_number: i64,
    customer_name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    state: String,
    zip_code: i64,
    #[serde(default)]
    phone: String,
    balance: BigDecimal,
    credit_limit: BigDecimal,
    #[serde(default)]
    last_order_date: Option<NaiveDate>,
}

impl From<CustomerSeed> for CustomerRecordDraft {
    fn from(seed: CustomerSeed) -> Self {
        Self {
            customer_number: seed.customer_number,
            name: seed.customer_name,
            address: seed.address,
            city: seed.city,
            state: seed.state,
            postal_code: seed.zip_code,
            phone: seed.phone,
            balance: seed.balance,
            credit_limit: seed.credit_limit,
            last_order_date: seed.last_order_date,
        }
    }
}

/// Parse seed JSON into validated records, rejecting duplicate keys.
pub fn parse_seed(contents: &str, path: &Path) -> Result<Vec<CustomerRecord>, SeedFileError> {
    let seeds: Vec<CustomerSeed> =
        serde_json::from_str(contents).map_err(|source| SeedFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(seeds.len());
    for (index, seed) in seeds.into_iter().enumerate() {
        let record = CustomerRecord::try_from_draft(seed.into())
            .map_err(|source| SeedFileError::InvalidRecord { index, source })?;
        if !seen.insert(record.key()) {
            return Err(SeedFileError::DuplicateKey {
                customer_number: record.key().get(),
            });
        }
        records.push(record);
    }
    Ok(records)
}

fn read_seed_file(path: &Path) -> Result<String, SeedFileError> {
    let read_error = |source: std::io::Error| SeedFileError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}

/// Build a fixture store from the seed file at `path`.
pub fn load_seed_store(path: &Path) -> Result<FixtureCustomerRecordStore, SeedFileError> {
    let contents = read_seed_file(path)?;
    let records = parse_seed(&contents, path)?;
    info!(path = %path.display(), count = records.len(), "customer seed loaded");
    Ok(FixtureCustomerRecordStore::from_records(records))
}
