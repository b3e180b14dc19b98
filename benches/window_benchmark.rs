//! Window computation benchmarks.
//!
//! Window computation should stay flat as the item count grows, while the non-virtualized
//! baseline grows linearly.
//!
//! Run with: cargo bench --bench window_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use listwindow::{
    ItemGeometry, SliceRenderer, VirtualList, WindowInput, WindowOptions, compute_window,
};

const ITEM_COUNTS: [usize; 4] = [1_000, 10_000, 50_000, 1_000_000];

/// Compute a window in the middle of lists of increasing size.
fn benchmark_compute_window_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_window_scaling");

    for &count in &ITEM_COUNTS {
        let input = WindowInput {
            scroll_offset: (count as i64 / 2) * 100,
            viewport_height: 600,
            item_height: 100,
            item_count: count,
            overscan: 5,
        };
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| compute_window(black_box(input)));
        });
    }

    group.finish();
}

/// Scroll + materialize the visible slice, against rendering every item.
fn benchmark_virtual_vs_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_vs_baseline");

    for &count in &ITEM_COUNTS[..3] {
        let items: Vec<u64> = (0..count as u64).collect();
        let mut list = VirtualList::new(
            WindowOptions::new(100, 600).expect("valid geometry"),
            items.clone(),
        );

        group.bench_with_input(BenchmarkId::new("virtual", count), &count, |b, &count| {
            let mut offset = 0i64;
            b.iter(|| {
                offset = (offset + 7_919) % (count as i64 * 100);
                list.on_scroll(black_box(offset));
                black_box(list.visible().len())
            });
        });

        let renderer = SliceRenderer::new(ItemGeometry::new(100).expect("valid geometry"));
        group.bench_with_input(BenchmarkId::new("baseline", count), &items, |b, items| {
            b.iter(|| black_box(renderer.render_all(items.as_slice()).len()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compute_window_scaling,
    benchmark_virtual_vs_baseline
);
criterion_main!(benches);
