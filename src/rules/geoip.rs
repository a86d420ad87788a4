//! `GeoIP` region matching for routing rules
//!
//! This module provides the region-classification predicate: does the
//! connection's source or destination address belong to one of the
//! configured region codes?
//!
//! # Architecture
//!
//! Classification is lazy and memoized per connection. The first clause
//! that needs a direction's region code resolves it (through the
//! [`GeoIpReader`] for public addresses, or to the sentinel `"private"`
//! for non-routable ones) and writes it into the [`ConnectionMeta`] cache
//! field for that direction. Every later clause over the same connection
//! reads the cached code instead of querying again.
//!
//! A failed lookup is logged and treated as a non-match without writing the
//! cache, so a later clause may retry. An unresolved destination domain
//! never matches: region matching is only meaningful for concrete
//! addresses.
//!
//! # Example
//!
//! ```
//! use route_rules::rules::{Direction, GeoIpMatcher, RuleMatch};
//! use route_rules::{ConnectionMeta, Endpoint};
//!
//! let matcher = GeoIpMatcher::new(None, Direction::Destination, vec!["private".into()]);
//!
//! let mut meta = ConnectionMeta::new(
//!     Endpoint::from_ip("10.0.0.100".parse().unwrap(), 40022),
//!     Endpoint::from_ip("192.168.1.20".parse().unwrap(), 8443),
//! );
//! assert!(matcher.matches(&mut meta));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::connection::{ConnectionMeta, Endpoint};
use crate::geoip::GeoIpReader;
use crate::net::is_public_addr;
use crate::rules::types::{Direction, GeoIpRuleConfig};
use crate::rules::RuleMatch;

/// Region code recorded for addresses that are not globally routable.
pub const PRIVATE_CODE: &str = "private";

/// Region-code matcher for one direction of a connection.
///
/// Immutable after construction and shared read-only across all
/// connections; per-connection state lives in the metadata's cache fields.
pub struct GeoIpMatcher {
    /// Region lookup, if configured. Without it only the private-address
    /// classification applies.
    reader: Option<Arc<dyn GeoIpReader>>,

    /// Which endpoint to classify.
    direction: Direction,

    /// Codes as supplied, in order, for display.
    codes: Vec<String>,

    /// Lower-cased membership set.
    code_set: HashSet<String>,
}

impl GeoIpMatcher {
    /// Create a matcher for the given direction and region codes.
    ///
    /// Codes are lower-cased into the membership set; the supplied order
    /// and casing are kept for display. Duplicates collapse. An empty list
    /// is legal and never matches.
    #[must_use]
    pub fn new(
        reader: Option<Arc<dyn GeoIpReader>>,
        direction: Direction,
        codes: Vec<String>,
    ) -> Self {
        let code_set = codes.iter().map(|c| c.to_ascii_lowercase()).collect();
        Self {
            reader,
            direction,
            codes,
            code_set,
        }
    }

    /// Build a matcher from a deserialized rule clause.
    #[must_use]
    pub fn from_config(config: GeoIpRuleConfig, reader: Option<Arc<dyn GeoIpReader>>) -> Self {
        Self::new(reader, config.direction, config.codes)
    }

    /// The direction this matcher classifies.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The configured codes, in display order.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// The direction's endpoint and classification-cache slot.
    fn slot<'m>(&self, meta: &'m mut ConnectionMeta) -> (&'m Endpoint, &'m mut Option<String>) {
        match self.direction {
            Direction::Source => (&meta.source, &mut meta.source_geoip),
            Direction::Destination => (&meta.destination, &mut meta.destination_geoip),
        }
    }

    /// Membership test against the cached classification, recording the
    /// `"private"` sentinel first if the direction is still unclassified.
    ///
    /// Runs whether or not a live query happened, so a matcher without a
    /// reader still classifies non-public addresses.
    fn match_cached(&self, meta: &mut ConnectionMeta) -> bool {
        if self.direction == Direction::Destination && meta.destination.is_fqdn() {
            return false;
        }
        let (endpoint, cache) = self.slot(meta);
        if cache.is_none() {
            if let Some(addr) = endpoint.ip {
                if !is_public_addr(addr) {
                    *cache = Some(PRIVATE_CODE.to_string());
                }
            }
        }
        cache
            .as_deref()
            .is_some_and(|code| self.code_set.contains(code))
    }
}

impl RuleMatch for GeoIpMatcher {
    fn matches(&self, meta: &mut ConnectionMeta) -> bool {
        if self.direction == Direction::Destination && meta.destination.is_fqdn() {
            return false;
        }
        if let Some(reader) = &self.reader {
            let (endpoint, cache) = self.slot(meta);
            if cache.is_none() {
                // Non-public addresses are classified by match_cached
                // without touching the database.
                if let Some(addr) = endpoint.ip.filter(|addr| is_public_addr(*addr)) {
                    match reader.lookup(addr) {
                        Ok(code) => *cache = Some(code.to_ascii_lowercase()),
                        Err(e) => {
                            // Not a match, and not cached: a later clause
                            // may retry.
                            tracing::error!("query geoip for {}: {}", addr, e);
                            return false;
                        }
                    }
                }
            }
        }
        self.match_cached(meta)
    }
}

impl fmt::Display for GeoIpMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Source => f.write_str("source_geoip=")?,
            Direction::Destination => f.write_str("geoip=")?,
        }
        if self.codes.len() == 1 {
            f.write_str(&self.codes[0])
        } else if self.codes.len() > 3 {
            write!(f, "[{}...]", self.codes[..3].join(" "))
        } else {
            write!(f, "[{}]", self.codes.join(" "))
        }
    }
}

impl fmt::Debug for GeoIpMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoIpMatcher")
            .field("direction", &self.direction)
            .field("codes", &self.codes)
            .field("has_reader", &self.reader.is_some())
            .finish()
    }
}
