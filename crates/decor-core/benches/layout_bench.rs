// File: crates/decor-core/benches/layout_bench.rs
// Summary: Benchmark popup layout computation against single- and multi-line labels.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decor_core::{DataPoint, Recorder, ScreenPoint, SelectionPopup};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("popup_layout");
    let rec = Recorder::new(1024.0, 640.0);
    let anchor = ScreenPoint::new(512.0, 320.0);

    for &lines in &[1usize, 3, 8] {
        let label = (0..lines)
            .map(|i| format!("series {i} value {:.2}", i as f32 * 1.7))
            .collect::<Vec<_>>()
            .join("\n");
        let popup = SelectionPopup {
            label_formatter: Arc::new(move |_, _| Ok(label.clone())),
            ..SelectionPopup::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| {
                let layout = popup
                    .layout(&rec, anchor, DataPoint::new(5.0, 3.14))
                    .expect("layout");
                black_box(layout);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
