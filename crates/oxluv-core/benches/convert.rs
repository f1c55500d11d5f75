//! Conversion Benchmarks
//!
//! Single-color conversion cost along each edge of the sRGB / XYZ / LUV
//! triangle.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use oxluv_core::math::{SRGB_TO_XYZ, multiply_vec3};
use oxluv_core::{CieLuv, CieXyz, Srgb, compand, inverse_compand};

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    let vec = [0.5, 0.3, 0.7];

    group.bench_function("transform_apply", |b| {
        b.iter(|| SRGB_TO_XYZ.apply(black_box(vec)))
    });

    group.bench_function("multiply_vec3", |b| {
        b.iter(|| multiply_vec3(black_box(SRGB_TO_XYZ.rows()), black_box(vec)))
    });

    group.finish();
}

fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma");

    group.bench_function("compand", |b| b.iter(|| compand(black_box(0.5))));
    group.bench_function("inverse_compand", |b| {
        b.iter(|| inverse_compand(black_box(0.5)))
    });

    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let rgb = Srgb::new(0.2, 0.4, 0.6);
    let xyz = rgb.to_xyz();
    let luv = rgb.to_luv();

    group.bench_function("srgb_to_xyz", |b| b.iter(|| black_box(rgb).to_xyz()));
    group.bench_function("xyz_to_srgb", |b| b.iter(|| black_box(xyz).to_srgb()));
    group.bench_function("xyz_to_luv", |b| b.iter(|| black_box(xyz).to_luv()));
    group.bench_function("luv_to_xyz", |b| b.iter(|| black_box(luv).to_xyz()));
    group.bench_function("srgb_to_luv", |b| b.iter(|| black_box(rgb).to_luv()));
    group.bench_function("luv_to_srgb", |b| b.iter(|| black_box(luv).to_srgb()));
    group.bench_function("black_shortcut", |b| {
        b.iter(|| black_box(CieXyz::BLACK).to_luv() == CieLuv::BLACK)
    });

    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");
    let rgb = Srgb::new(0.2, 0.4, 0.6);

    group.bench_function("format", |b| b.iter(|| black_box(rgb).hex()));
    group.bench_function("parse", |b| {
        b.iter(|| Srgb::from_hex(black_box("#336699")))
    });

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_gamma, bench_conversions, bench_hex);
criterion_main!(benches);
