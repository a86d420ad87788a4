//! Performance benchmarks for geoip rule evaluation.
//!
//! Run with: `cargo bench`
//!
//! Performance targets:
//! - Cached classification: <100ns per evaluation
//! - Private fast path: <1us including the sentinel write
//! - Live lookup path: dominated by the reader, <1us with a table reader

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use route_rules::{
    ConnectionMeta, Direction, Endpoint, GeoIpError, GeoIpMatcher, GeoIpReader, RuleMatch,
};

/// Fixed-table reader standing in for a loaded database.
struct TableReader(HashMap<IpAddr, String>);

impl GeoIpReader for TableReader {
    fn lookup(&self, addr: IpAddr) -> Result<String, GeoIpError> {
        self.0.get(&addr).cloned().ok_or(GeoIpError::NoRecord(addr))
    }
}

fn build_reader() -> Arc<dyn GeoIpReader> {
    let table = [
        ("93.184.216.34", "US"),
        ("203.104.209.7", "JP"),
        ("81.2.69.142", "GB"),
    ]
    .iter()
    .map(|(ip, code)| (ip.parse().unwrap(), (*code).to_string()))
    .collect();
    Arc::new(TableReader(table))
}

fn build_meta(destination: &str) -> ConnectionMeta {
    ConnectionMeta::new(
        Endpoint::from_ip("81.2.69.142".parse().unwrap(), 40022),
        Endpoint::from_ip(destination.parse().unwrap(), 443),
    )
}

fn bench_cached_classification(c: &mut Criterion) {
    let matcher = GeoIpMatcher::new(
        Some(build_reader()),
        Direction::Destination,
        vec!["us".into(), "jp".into()],
    );
    let mut meta = build_meta("93.184.216.34");
    // Populate the cache once; every iteration hits the memoized path
    assert!(matcher.matches(&mut meta));

    c.bench_function("geoip_cached_hit", |b| {
        b.iter(|| matcher.matches(black_box(&mut meta)));
    });
}

fn bench_private_fast_path(c: &mut Criterion) {
    let matcher = GeoIpMatcher::new(
        Some(build_reader()),
        Direction::Destination,
        vec!["private".into()],
    );
    let meta = build_meta("192.168.1.20");

    c.bench_function("geoip_private_sentinel", |b| {
        b.iter_batched(
            || meta.clone(),
            |mut meta| matcher.matches(black_box(&mut meta)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_live_lookup(c: &mut Criterion) {
    let matcher = GeoIpMatcher::new(
        Some(build_reader()),
        Direction::Destination,
        vec!["jp".into()],
    );
    let meta = build_meta("203.104.209.7");

    c.bench_function("geoip_live_lookup", |b| {
        b.iter_batched(
            || meta.clone(),
            |mut meta| matcher.matches(black_box(&mut meta)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_cached_classification,
    bench_private_fast_path,
    bench_live_lookup
);
criterion_main!(benches);
