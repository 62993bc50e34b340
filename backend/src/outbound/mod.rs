//! Outbound adapters implementing the record store port.
//!
//! - **persistence**: PostgreSQL-backed store using Diesel.
//! - **seed_file**: JSON seed loader for the in-memory fixture store.
//!
//! Adapters only translate storage shapes into domain drafts; record
//! validation stays in the domain.

pub mod persistence;
pub mod seed_file;
