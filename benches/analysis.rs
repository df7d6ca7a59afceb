// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Analysis benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meshmetrics::geometry::{analyze, cube, volume_and_area, Mesh};
use nalgebra::Vector3;

/// Soup of `count` translated cubes (12 triangles each)
fn cube_field(count: usize) -> Mesh {
    let mut mesh = Mesh::with_capacity(count * 12);
    for i in 0..count {
        let mut unit = cube(Vector3::new(10.0, 10.0, 10.0), true);
        unit.translate(&Vector3::new(i as f64 * 25.0, 0.0, 0.0));
        mesh.vertices.extend_from_slice(&unit.vertices);
    }
    mesh
}

fn bench_volume_and_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("volume_and_area");

    let small = cube(Vector3::new(10.0, 10.0, 10.0), true);
    group.bench_function("cube_12", |b| {
        b.iter(|| volume_and_area(black_box(&small)));
    });

    let large = cube_field(1000);
    group.bench_function("soup_12k", |b| {
        b.iter(|| volume_and_area(black_box(&large)));
    });

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    let large = cube_field(1000);
    group.bench_function("soup_12k", |b| {
        b.iter(|| {
            let mut mesh = large.clone();
            analyze(black_box(&mut mesh)).unwrap()
        });
    });

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.stl");
    meshmetrics::io::export_stl(&cube_field(1000), &path).unwrap();

    group.bench_function("stl_12k", |b| {
        b.iter(|| meshmetrics::io::load_stl_file(black_box(&path)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_volume_and_area, bench_analyze, bench_load);
criterion_main!(benches);
