//! Benchmarks for terrain-io operations.
//!
//! Run with: cargo bench -p terrain-io
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p terrain-io -- --save-baseline main
//! 2. After changes: cargo bench -p terrain-io -- --baseline main

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use terrain_io::{
    ExportOptions, ImportParams, export_obj, import_obj, parse_json, parse_obj, to_json_string,
};
use terrain_types::{Point3, TerrainMesh};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Create a rolling grid terrain of `n` x `n` samples.
fn create_terrain(n: u32) -> TerrainMesh {
    let mut mesh = TerrainMesh::with_capacity((n * n) as usize, (2 * (n - 1) * (n - 1)) as usize);

    for j in 0..n {
        for i in 0..n {
            let x = f64::from(i) * 12.5 + 1000.0;
            let y = f64::from(j) * 12.5 + 2000.0;
            let z = 300.0 + (x * 0.01).sin() * 40.0 + (y * 0.013).cos() * 25.0;
            mesh.vertices.push(Point3::new(x, y, z));
        }
    }

    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let a = j * n + i;
            mesh.faces.push([a, a + 1, a + n]);
            mesh.faces.push([a + 1, a + n + 1, a + n]);
        }
    }

    mesh
}

// =============================================================================
// Conversion Benchmarks
// =============================================================================

fn bench_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("IO");

    let terrain = create_terrain(128); // ~32k triangles
    let json = to_json_string(&terrain).expect("failed to encode JSON");
    let obj = export_obj(&terrain, &ExportOptions::default()).expect("failed to export OBJ");

    group.throughput(Throughput::Elements(terrain.faces.len() as u64));

    group.bench_function("parse_json", |b| b.iter(|| parse_json(black_box(&json))));

    group.bench_function("to_json_string", |b| {
        b.iter(|| to_json_string(black_box(&terrain)));
    });

    group.bench_function("export_obj", |b| {
        b.iter(|| export_obj(black_box(&terrain), &ExportOptions::default()));
    });

    group.bench_function("parse_obj", |b| b.iter(|| parse_obj(black_box(&obj))));

    group.bench_function("import_obj", |b| {
        b.iter(|| import_obj(black_box(&obj), &terrain, &ImportParams::default()));
    });

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_io);
criterion_main!(benches);
