// ABOUTME: Criterion benchmarks for the workout factory and report rendering
// ABOUTME: Measures package validation, calorie formulas, and text/JSON formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for training calculations.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use workout_tracker::formatters::{format_report, OutputFormat};
use workout_tracker::models::SensorPackage;
use workout_tracker::training::{try_read_package, Training};

fn bench_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory");

    for package in SensorPackage::samples() {
        group.bench_with_input(
            BenchmarkId::new("read_package", package.to_string()),
            &package,
            |b, package| b.iter(|| try_read_package(black_box(&package.code), black_box(&package.data))),
        );
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let workouts: Vec<_> = SensorPackage::samples()
        .iter()
        .filter_map(|package| try_read_package(&package.code, &package.data).ok())
        .collect();

    group.bench_function("show_training_info", |b| {
        b.iter(|| {
            for workout in &workouts {
                black_box(workout.show_training_info());
            }
        });
    });

    for format in [OutputFormat::Text, OutputFormat::Json] {
        group.bench_with_input(BenchmarkId::new("format", format), &format, |b, &format| {
            b.iter(|| {
                for workout in &workouts {
                    let _ = black_box(format_report(&workout.show_training_info(), format));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_factory, bench_report);
criterion_main!(benches);
