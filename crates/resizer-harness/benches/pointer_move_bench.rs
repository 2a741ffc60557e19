#![forbid(unsafe_code)]

//! Run with: `cargo bench -p resizer-harness --bench pointer_move_bench`

use criterion::{Criterion, criterion_group, criterion_main};
use resizer_core::{Handle, PointerInput};
use resizer_engine::ResizableConfig;
use resizer_harness::{Fixture, sized};
use std::hint::black_box;

fn fit_config() -> ResizableConfig {
    ResizableConfig {
        fit_parent: true,
        min_width: 40.0,
        min_height: 40.0,
        max_width: Some(300.0),
        ..sized(200.0, 120.0, 40.0, 30.0)
    }
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("resizer/pointer_move");

    group.bench_function("resize_rb_down_move_64_up", |b| {
        let fixture = Fixture::mounted(fit_config());
        let handle = fixture.handle_node(Handle::Rb);
        let doc = &fixture.doc;
        b.iter(|| {
            let mut controller = fixture.controller.clone();
            let down = controller.pointer_down(doc, &PointerInput::mouse(handle, 10.0, 10.0));
            black_box(down.log.outcome);
            for step in 0..64 {
                // Zig-zag across the parent edge so clips and carries both run.
                let x = 10.0 + f64::from((step * 7) % 160) - 40.0;
                let y = 10.0 + f64::from((step * 5) % 90);
                let moved = controller.pointer_move(doc, &PointerInput::mouse(None, x, y));
                black_box(moved.notifications.len());
            }
            let up = controller.pointer_up();
            black_box(up.log.mode_after);
        });
    });

    group.bench_function("drag_down_move_64_up", |b| {
        let mut fixture = Fixture::new(ResizableConfig {
            drag_selector: Some(".title".into()),
            ..fit_config()
        });
        fixture.mount();
        let title = Some(fixture.title);
        let doc = &fixture.doc;
        b.iter(|| {
            let mut controller = fixture.controller.clone();
            let down = controller.pointer_down(doc, &PointerInput::mouse(title, 50.0, 50.0));
            black_box(down.log.outcome);
            for step in 0..64 {
                let x = 50.0 + f64::from(step * 3);
                let y = 50.0 - f64::from(step);
                let moved = controller.pointer_move(doc, &PointerInput::mouse(None, x, y));
                black_box(moved.notifications.len());
            }
            black_box(controller.style().to_string());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pointer_move);
criterion_main!(benches);
