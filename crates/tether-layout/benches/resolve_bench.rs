//! Benchmarks for lazy constraint resolution.
//!
//! Run with: cargo bench -p tether-layout --bench resolve_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tether_core::{Rect, Size, XInt, YInt};
use tether_layout::dsl::{left_to, top_to};
use tether_layout::{Container, LayoutConfig, MeasureSpec, Measured};

type Node = fn(MeasureSpec, MeasureSpec) -> Measured;

fn node(w: MeasureSpec, h: MeasureSpec) -> Measured {
    Measured::new(w.apply(12), h.apply(8))
}

/// Each box starts where the previous one ends.
fn chain(len: usize) -> Container<Node> {
    let mut c = Container::new(LayoutConfig::new());
    let mut prev = None;
    for _ in 0..len {
        let id = c.add_child(node as Node);
        let x = match prev {
            Some(p) => left_to(move |s| s.right(p)),
            None => left_to(|s| s.parent().left()),
        };
        c.apply_layout(id, x, top_to(|_| Ok(YInt(0))))
            .expect("apply");
        prev = Some(id);
    }
    c
}

/// Independent boxes in a wrap-content container.
fn grid(len: usize) -> Container<Node> {
    let mut c = Container::new(LayoutConfig::new());
    c.width_wrap_content();
    c.height_wrap_content();
    for i in 0..len {
        let id = c.add_child(node as Node);
        let col = (i % 32) as i32;
        let row = (i / 32) as i32;
        c.apply_layout(
            id,
            left_to(move |_| Ok(XInt(col * 12))),
            top_to(move |_| Ok(YInt(row * 8))),
        )
        .expect("apply");
    }
    c
}

// =============================================================================
// Dependency chains
// =============================================================================

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve/chain");
    for len in [10usize, 100, 500] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut container = chain(len);
            b.iter(|| {
                container.invalidate();
                container.measure(Size::new(10_000, 100)).expect("measure");
                let mut last = Rect::default();
                container
                    .layout(|_, _, rect| last = rect)
                    .expect("layout");
                black_box(last)
            })
        });
    }
    group.finish();
}

// =============================================================================
// Wrap content
// =============================================================================

fn bench_wrap_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve/wrap_content");
    for len in [64usize, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut container = grid(len);
            b.iter(|| {
                container.invalidate();
                black_box(container.measure(Size::new(1_000, 1_000)).expect("measure"))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_wrap_content);
criterion_main!(benches);
