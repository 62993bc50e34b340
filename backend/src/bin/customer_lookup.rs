//! One-shot customer inquiry from the command line.
//!
//! Runs the same validate, look up, and render pipeline as the HTTP API and
//! prints the status code followed by the JSON payload.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use customer_inquiry::domain::ports::{
    CustomerInquiry, CustomerRecordStore, FixtureCustomerRecordStore, InquiryContext,
    InquiryRequest, InquirySource,
};
use customer_inquiry::domain::{CustomerInquiryService, RawCustomerKey, RenderedInquiry, TraceId};
use customer_inquiry::outbound::persistence::{DbPool, DieselCustomerRecordStore, PoolConfig};
use customer_inquiry::outbound::seed_file::load_seed_store;
use tokio::runtime::Builder;

/// `customer-lookup` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "customer-lookup",
    about = "Look up one customer through the inquiry pipeline",
    version
)]
struct CliArgs {
    /// Customer number to inquire about, passed through validation as typed.
    #[arg(long = "customer-number", value_name = "number", allow_hyphen_values = true)]
    customer_number: String,
    /// JSON seed file for the fixture store.
    #[arg(long = "seed", value_name = "path", conflicts_with = "database_url")]
    seed: Option<PathBuf>,
    /// Database connection URL. Falls back to `INQUIRY_DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Lookup timeout in milliseconds.
    #[arg(long = "timeout-ms", value_name = "millis", default_value_t = 5_000,
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: u64,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

/// Where lookups are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StoreSource {
    Seed(PathBuf),
    Database(String),
    Empty,
}

/// `--seed` wins, then `--database-url`, then `env_database_url`.
fn store_source(args: &CliArgs, env_database_url: Option<String>) -> StoreSource {
    if let Some(path) = &args.seed {
        return StoreSource::Seed(path.clone());
    }
    args.database_url
        .clone()
        .or(env_database_url)
        .filter(|url| !url.trim().is_empty())
        .map_or(StoreSource::Empty, StoreSource::Database)
}

async fn open_store(
    source: StoreSource,
    lookup_timeout: Duration,
) -> io::Result<Arc<dyn CustomerRecordStore>> {
    match source {
        StoreSource::Seed(path) => Ok(Arc::new(load_seed_store(&path).map_err(io::Error::other)?)),
        StoreSource::Database(database_url) => {
            let config = PoolConfig::new(database_url).with_connection_timeout(lookup_timeout);
            let pool = DbPool::new(config)
                .await
                .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
            Ok(Arc::new(DieselCustomerRecordStore::new(pool)))
        }
        StoreSource::Empty => Ok(Arc::new(FixtureCustomerRecordStore::default())),
    }
}

async fn run_lookup(
    customer_number: String,
    store: Arc<dyn CustomerRecordStore>,
    lookup_timeout: Duration,
) -> RenderedInquiry {
    let service = CustomerInquiryService::new(store, lookup_timeout);
    let context = InquiryContext {
        trace_id: Some(TraceId::generate()),
    };
    let request = InquiryRequest::new(
        RawCustomerKey::Text(customer_number),
        InquirySource::CommandLine,
        context,
    );
    service.inquire(request).await.render()
}

/// Write `status=<code>` followed by the pretty-printed payload.
fn write_report(out: &mut impl Write, rendered: &RenderedInquiry) -> io::Result<()> {
    let body = serde_json::to_string_pretty(&rendered.payload).map_err(io::Error::other)?;
    writeln!(out, "status={}", rendered.status.code())?;
    writeln!(out, "{body}")
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let lookup_timeout = Duration::from_millis(args.timeout_ms);
    let source = store_source(&args, env::var("INQUIRY_DATABASE_URL").ok());
    let store = open_store(source, lookup_timeout).await?;

    let rendered = run_lookup(args.customer_number, store, lookup_timeout).await;
    write_report(&mut io::stdout().lock(), &rendered)
}
