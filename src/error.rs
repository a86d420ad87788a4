//! Error types for route-rules
//!
//! Exactly one error kind crosses the lookup seam: a region lookup can fail.
//! The matcher absorbs it (logged, then treated as a non-match), so rule
//! evaluation itself is error-free from the engine's perspective.

use std::net::IpAddr;

use thiserror::Error;

/// Errors returned by a [`GeoIpReader`](crate::geoip::GeoIpReader) lookup
#[derive(Debug, Error)]
pub enum GeoIpError {
    /// The database has no classification for the address
    #[error("no geoip record for {0}")]
    NoRecord(IpAddr),

    /// The database could not be queried at all
    #[error("geoip database unavailable: {0}")]
    Unavailable(String),
}

impl GeoIpError {
    /// Check if this error is recoverable (a retry may succeed)
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            // The same address will keep having no record
            Self::NoRecord(_) => false,
            // The database may come back
            Self::Unavailable(_) => true,
        }
    }

    /// Create an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}
