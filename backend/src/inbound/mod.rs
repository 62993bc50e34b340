//! Inbound adapters that translate external requests into inquiry calls
//! while keeping framework details at the edge.

pub mod http;
