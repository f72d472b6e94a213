//! hash benchmarks

use cnc_mix::{PackageHashType, classic_hash, crc32_hash, hash_filename};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_classic_short(c: &mut Criterion) {
    let filename = "e1.shp";

    c.bench_function("classic_short", |b| {
        b.iter(|| classic_hash(black_box(filename)));
    });
}

fn bench_classic_long(c: &mut Criterion) {
    let filename = "some_very_long_asset_name_that_never_fit_in_dos_anyway.shp";

    c.bench_function("classic_long", |b| {
        b.iter(|| classic_hash(black_box(filename)));
    });
}

fn bench_crc32_short(c: &mut Criterion) {
    let filename = "e1.shp";

    c.bench_function("crc32_short", |b| {
        b.iter(|| crc32_hash(black_box(filename)));
    });
}

fn bench_crc32_long(c: &mut Criterion) {
    let filename = "some_very_long_asset_name_that_never_fit_in_dos_anyway.shp";

    c.bench_function("crc32_long", |b| {
        b.iter(|| crc32_hash(black_box(filename)));
    });
}

fn bench_both_generations(c: &mut Criterion) {
    let filename = "conquer.mix";

    c.bench_function("both_generations", |b| {
        b.iter(|| {
            let classic = hash_filename(filename, PackageHashType::Classic);
            let crc32 = hash_filename(filename, PackageHashType::Crc32);
            black_box((classic, crc32));
        });
    });
}

fn bench_case_conversion(c: &mut Criterion) {
    let filename = "MiXeD_CaSe_FiLeNaMe.ShP";

    c.bench_function("case_conversion", |b| {
        b.iter(|| classic_hash(black_box(filename)));
    });
}

criterion_group!(
    benches,
    bench_classic_short,
    bench_classic_long,
    bench_crc32_short,
    bench_crc32_long,
    bench_both_generations,
    bench_case_conversion
);
criterion_main!(benches);
