#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: queryset vs url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use queryset::QueryParams;
use url::form_urlencoded;

const FLAT: &str = "name=John&age=30&city=Tokyo&country=Japan&q=rust+query+strings&page=2";
const NESTED: &str = "filter[tag][]=rust&filter[tag][]=web&filter[owner][name]=ann&sort[by]=date&sort[dir]=desc&page=2";

fn bench_parse_flat_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    group.bench_function("queryset", |b| {
        b.iter(|| QueryParams::parse_query_string(black_box(FLAT)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(FLAT).as_bytes())
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");

    group.bench_function("queryset", |b| {
        b.iter(|| QueryParams::parse_query_string(black_box(NESTED)));
    });

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_flat");

    let params = QueryParams::parse_query_string(FLAT);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(FLAT.as_bytes())
        .into_owned()
        .collect();

    group.bench_function("queryset", |b| {
        b.iter(|| black_box(&params).to_string());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_typed_getters(c: &mut Criterion) {
    let params = QueryParams::parse_query_string(FLAT);

    c.bench_function("typed_getters", |b| {
        b.iter(|| {
            black_box(params.get_as_string("name", ""));
            black_box(params.get_as_integer("age", 0));
            black_box(params.get_as_integer("page", 1));
            black_box(params.get_as_bool("missing", false));
        });
    });
}

criterion_group!(
    benches,
    bench_parse_flat_all,
    bench_parse_nested,
    bench_serialize_all,
    bench_typed_getters
);
criterion_main!(benches);
