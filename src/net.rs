//! Address-scope classification
//!
//! Routing rules need to distinguish globally routable addresses from
//! everything that never leaves the local site: private ranges, loopback,
//! link-local, multicast, and similar. Non-public addresses are classified
//! as the sentinel region `"private"` by the geoip rule instead of being
//! sent to the database.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Check whether an address is globally routable.
///
/// Excludes the unspecified address, loopback, RFC 1918 private ranges,
/// link-local, the RFC 6598 shared range, broadcast, documentation ranges,
/// and multicast for IPv4; and the unspecified address, loopback,
/// unique-local (`fc00::/7`), link-local (`fe80::/10`), and multicast for
/// IPv6. IPv4-mapped IPv6 addresses classify as their embedded IPv4
/// address.
///
/// # Example
///
/// ```
/// use route_rules::net::is_public_addr;
///
/// assert!(is_public_addr("8.8.8.8".parse().unwrap()));
/// assert!(!is_public_addr("192.168.1.1".parse().unwrap()));
/// assert!(!is_public_addr("fe80::1".parse().unwrap()));
/// ```
#[must_use]
pub fn is_public_addr(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => is_public_v4(v4),
        IpAddr::V6(v6) => is_public_v6(v6),
    }
}

fn is_public_v4(addr: Ipv4Addr) -> bool {
    !(addr.is_unspecified()
        || addr.is_loopback()
        || addr.is_private()
        || addr.is_link_local()
        || is_shared_v4(addr)
        || addr.is_broadcast()
        || addr.is_documentation()
        || addr.is_multicast())
}

/// RFC 6598 carrier-grade NAT range, 100.64.0.0/10
const fn is_shared_v4(addr: Ipv4Addr) -> bool {
    let octets = addr.octets();
    octets[0] == 100 && (octets[1] & 0xc0) == 64
}

fn is_public_v6(addr: Ipv6Addr) -> bool {
    if let Some(v4) = addr.to_ipv4_mapped() {
        return is_public_v4(v4);
    }
    !(addr.is_unspecified()
        || addr.is_loopback()
        || addr.is_multicast()
        || is_unique_local_v6(addr)
        || is_link_local_v6(addr))
}

/// fc00::/7
const fn is_unique_local_v6(addr: Ipv6Addr) -> bool {
    (addr.segments()[0] & 0xfe00) == 0xfc00
}

/// fe80::/10
const fn is_link_local_v6(addr: Ipv6Addr) -> bool {
    (addr.segments()[0] & 0xffc0) == 0xfe80
}
