// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for cadence
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Scale derivation throughput
//! - Roman numeral chord resolution
//! - Composition export

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cadence::midi::SmfWriter;
use cadence::music::{major_scale, minor_scale, resolve, theory::CHROMATIC, Mode};
use cadence::sequencer::{Composition, Track};

/// Benchmark scale derivation across all tonics
fn bench_scale_building(c: &mut Criterion) {
    c.bench_function("major_scales_all_keys", |b| {
        b.iter(|| {
            for tonic in CHROMATIC {
                black_box(major_scale(black_box(tonic)).unwrap());
            }
        })
    });

    c.bench_function("minor_scales_all_keys", |b| {
        b.iter(|| {
            for tonic in CHROMATIC {
                black_box(minor_scale(black_box(tonic)).unwrap());
            }
        })
    });
}

/// Benchmark chord resolution for different symbol shapes
fn bench_chord_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for symbol in ["I", "V7", "Imin7", "Isus2**"] {
        group.bench_with_input(BenchmarkId::from_parameter(symbol), &symbol, |b, &symbol| {
            b.iter(|| {
                black_box(
                    resolve(
                        black_box(symbol),
                        cadence::music::NoteName::C,
                        Mode::Major,
                        4,
                        0.25,
                        100,
                    )
                    .unwrap(),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark exporting a full progression to SMF events
fn bench_composition_export(c: &mut Criterion) {
    let mut track = Track::from_program(0, 120.0);
    for _ in 0..16 {
        for symbol in ["I", "IV", "V7", "I"] {
            let chord =
                resolve(symbol, cadence::music::NoteName::C, Mode::Major, 4, 0.25, 100).unwrap();
            track.push(chord);
        }
    }
    let mut composition = Composition::new();
    composition.add_track(track);

    c.bench_function("export_64_chords", |b| {
        b.iter(|| {
            let mut writer = SmfWriter::new();
            composition.export(black_box(&mut writer));
            black_box(writer)
        })
    });
}

criterion_group!(
    benches,
    bench_scale_building,
    bench_chord_resolution,
    bench_composition_export
);
criterion_main!(benches);
