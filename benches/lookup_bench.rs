use countrydb::Catalogue;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn bench_code_lookup(c: &mut Criterion) {
    let catalogue = Catalogue::bundled().unwrap();

    let mut group = c.benchmark_group("code_lookup");
    group.throughput(Throughput::Elements(1));

    group.bench_function("hit", |b| {
        b.iter(|| black_box(catalogue.country_by_code(Some("BG"))));
    });

    group.bench_function("miss", |b| {
        b.iter(|| black_box(catalogue.country_by_code(Some("XX"))));
    });

    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let catalogue = Catalogue::bundled().unwrap();
    let codes = ["BG", "DE", "FR", "PL", "RO", "US", "JP"];

    let mut group = c.benchmark_group("filters");

    group.bench_function("by_codes", |b| {
        b.iter(|| black_box(catalogue.countries_by_codes(&codes)));
    });

    group.bench_function("by_name_prefix", |b| {
        b.iter(|| black_box(catalogue.countries_by_name_prefix(Some("Saint"))));
    });

    group.bench_function("region_scan", |b| {
        b.iter(|| black_box(catalogue.central_europe()));
    });

    group.finish();
}

criterion_group!(benches, bench_code_lookup, bench_filters);
criterion_main!(benches);
