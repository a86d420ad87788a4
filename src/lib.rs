//! route-rules: GeoIP routing-rule predicates for traffic routing engines
//!
//! This crate provides the region-classification predicate used by a routing
//! engine to decide whether a connection's source or destination address
//! belongs to a configured set of geographic region codes.
//!
//! # Features
//!
//! - **Lazy classification**: an address is resolved to a region code on
//!   first use and cached on the per-connection metadata, so later rule
//!   clauses reuse the result
//! - **Private-address sentinel**: non-public addresses classify as the
//!   region `"private"` without a database query
//! - **Failure isolation**: a failed lookup is logged and treated as a
//!   non-match; rule evaluation never sees an error
//! - **Pluggable lookup**: the geolocation database is consumed behind the
//!   [`GeoIpReader`] trait and may be absent entirely
//!
//! # Architecture
//!
//! ```text
//! Rule engine → GeoIpMatcher::matches(&mut ConnectionMeta)
//!                     ↓
//!               cached region code?  ──yes──→ set membership
//!                     ↓ no
//!               private address? → cache "private"
//!                     ↓ no
//!               GeoIpReader::lookup → cache code (lower-cased)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use std::net::IpAddr;
//! use std::sync::Arc;
//!
//! use route_rules::{
//!     ConnectionMeta, Direction, Endpoint, GeoIpError, GeoIpMatcher, GeoIpReader, RuleMatch,
//! };
//!
//! // Lookup backed by a fixed table; a real deployment wires a database here.
//! struct TableReader(HashMap<IpAddr, String>);
//!
//! impl GeoIpReader for TableReader {
//!     fn lookup(&self, addr: IpAddr) -> Result<String, GeoIpError> {
//!         self.0.get(&addr).cloned().ok_or(GeoIpError::NoRecord(addr))
//!     }
//! }
//!
//! let reader: Arc<dyn GeoIpReader> = Arc::new(TableReader(
//!     [("93.184.216.34".parse().unwrap(), "US".to_string())].into(),
//! ));
//!
//! let matcher = GeoIpMatcher::new(
//!     Some(reader),
//!     Direction::Destination,
//!     vec!["us".into(), "private".into()],
//! );
//!
//! // Public destination: classified through the reader, then cached.
//! let mut meta = ConnectionMeta::new(
//!     Endpoint::from_ip("81.2.69.142".parse().unwrap(), 52110),
//!     Endpoint::from_ip("93.184.216.34".parse().unwrap(), 443),
//! );
//! assert!(matcher.matches(&mut meta));
//! assert_eq!(meta.destination_geoip.as_deref(), Some("us"));
//!
//! // Private destination: classified as "private" without a lookup.
//! let mut meta = ConnectionMeta::new(
//!     Endpoint::from_ip("10.0.0.7".parse().unwrap(), 40022),
//!     Endpoint::from_ip("192.168.1.20".parse().unwrap(), 443),
//! );
//! assert!(matcher.matches(&mut meta));
//! assert_eq!(meta.destination_geoip.as_deref(), Some("private"));
//! ```
//!
//! # Modules
//!
//! - [`connection`]: Per-connection metadata annotated during evaluation
//! - [`error`]: Error types
//! - [`geoip`]: The consumed region-lookup capability
//! - [`net`]: Address-scope classification
//! - [`rules`]: Rule predicates and their configuration types

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod connection;
pub mod error;
pub mod geoip;
pub mod net;
pub mod rules;

// Re-export commonly used types at the crate root
pub use connection::{ConnectionMeta, Endpoint};
pub use error::GeoIpError;
pub use geoip::GeoIpReader;
pub use net::is_public_addr;
pub use rules::{Direction, GeoIpMatcher, GeoIpRuleConfig, RuleMatch};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
