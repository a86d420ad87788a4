//! Region-lookup capability consumed by geoip rules
//!
//! The geolocation database itself lives outside this crate. Rules see it
//! only through [`GeoIpReader`], so any backend works: an in-memory CIDR
//! table, an mmap'd database file, or a stub that always fails. A matcher
//! built without a reader runs in a degraded mode where only the
//! private-address classification applies.

use std::net::IpAddr;

use crate::error::GeoIpError;

/// Resolves an address to a geographic region code.
///
/// Implementations are shared read-only across all connections and must be
/// cheap to query; the matcher calls `lookup` at most once per connection
/// per direction.
pub trait GeoIpReader: Send + Sync {
    /// Resolve `addr` to a region code (e.g. a two-letter country code).
    ///
    /// The returned code is lower-cased by the caller before caching, so
    /// implementations may return codes in any case.
    ///
    /// # Errors
    ///
    /// Returns [`GeoIpError::NoRecord`] when the address has no known
    /// classification, or [`GeoIpError::Unavailable`] when the database
    /// cannot be queried.
    fn lookup(&self, addr: IpAddr) -> Result<String, GeoIpError>;
}
