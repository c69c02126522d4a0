//! Performance benchmarks for the signal bridge hot paths.
//!
//! Three groups cover the cost centers of an emission:
//! - Resolution: descriptor lookup, insertion and pin sharing
//! - Conversion: single value crossings in both directions
//! - Marshal: full emissions through a connected closure

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sigil::prelude::*;

/// Benchmark descriptor resolution against a populated repository.
fn resolution_benchmarks(c: &mut Criterion) {
    let mut repo = Repository::new();
    repo.register(
        ObjectEntry::new("Button")
            .with_signal(SignalSpec::new("clicked", vec![], TypeDesc::Void)),
    )
    .unwrap();
    let button = TypeHash::from_name("Button");

    let mut group = c.benchmark_group("closure/resolution");

    // Each iteration inserts a fresh descriptor and frees it again
    group.bench_function("insert_and_release", |b| {
        b.iter(|| {
            let handle = repo
                .resolve(black_box(button), black_box("clicked"))
                .unwrap();
            repo.release(handle);
        });
    });

    // A held pin keeps the descriptor live, so each iteration only
    // touches the shared slot
    group.bench_function("shared_resolution", |b| {
        let held = repo.resolve(button, "clicked").unwrap();
        b.iter(|| {
            let handle = repo
                .resolve(black_box(button), black_box("clicked"))
                .unwrap();
            repo.release(handle);
        });
        repo.release(held);
    });

    group.bench_function("missed_resolution", |b| {
        b.iter(|| black_box(repo.resolve(black_box(button), black_box("unknown"))));
    });

    group.finish();
}

/// Benchmark single value conversions across the boundary.
fn conversion_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure/convert");

    group.bench_function("int32_to_dynamic", |b| {
        let value = NativeValue::Int32(42);
        b.iter(|| black_box(native_to_dynamic(black_box(&value), &TypeDesc::Int32).unwrap()));
    });

    group.bench_function("str_to_dynamic", |b| {
        let value = NativeValue::Str("entry-added".to_string());
        b.iter(|| black_box(native_to_dynamic(black_box(&value), &TypeDesc::Str).unwrap()));
    });

    group.bench_function("dynamic_to_int32", |b| {
        let value = Dynamic::Int(42);
        let mut slot = NativeValue::Unset;
        b.iter(|| {
            dynamic_to_native(black_box(&value), &TypeDesc::Int32, &mut slot).unwrap();
            black_box(&slot);
        });
    });

    group.finish();
}

/// Benchmark full emissions through connected closures.
fn marshal_benchmarks(c: &mut Criterion) {
    let mut repo = Repository::new();
    repo.register(
        ObjectEntry::new("Widget")
            .with_signal(SignalSpec::new("clicked", vec![], TypeDesc::Void))
            .with_signal(SignalSpec::new(
                "moved",
                vec![TypeDesc::Double, TypeDesc::Double, TypeDesc::Bool],
                TypeDesc::Void,
            ))
            .with_signal(SignalSpec::new(
                "query",
                vec![TypeDesc::Int32],
                TypeDesc::Int32,
            )),
    )
    .unwrap();
    let widget = TypeHash::from_name("Widget");

    let mut host = ScriptHost::new();
    let noop = host.register(|_, _| Ok(Dynamic::Void));
    let echo = host.register(|_, args: &[Dynamic]| Ok(args[0].clone()));

    let clicked = SignalClosure::create(&mut repo, &mut host, widget, "clicked", noop).unwrap();
    let moved = SignalClosure::create(&mut repo, &mut host, widget, "moved", noop).unwrap();
    let query = SignalClosure::create(&mut repo, &mut host, widget, "query", echo).unwrap();

    let mut group = c.benchmark_group("closure/marshal");

    group.bench_function("no_args_void", |b| {
        let mut slot = NativeValue::Unset;
        b.iter(|| {
            clicked.marshal(&repo, &mut host, &mut slot, black_box(&[]), None);
        });
    });

    group.bench_function("three_args_void", |b| {
        let params = [
            NativeValue::Double(4.0),
            NativeValue::Double(8.5),
            NativeValue::Bool(true),
        ];
        let mut slot = NativeValue::Unset;
        b.iter(|| {
            moved.marshal(&repo, &mut host, &mut slot, black_box(&params), None);
        });
    });

    group.bench_function("int_round_trip", |b| {
        let params = [NativeValue::Int32(42)];
        let mut slot = NativeValue::Unset;
        b.iter(|| {
            query.marshal(&repo, &mut host, &mut slot, black_box(&params), None);
            black_box(&slot);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    resolution_benchmarks,
    conversion_benchmarks,
    marshal_benchmarks
);

criterion_main!(benches);
