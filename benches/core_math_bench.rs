use criterion::{Criterion, criterion_group, criterion_main};
use range_slider_rs::api::{SliderEngine, SliderEngineConfig};
use range_slider_rs::core::{RailGeometry, ValueSource};
use range_slider_rs::interaction::Handle;
use std::hint::black_box;

fn bench_geometry_round_trip(c: &mut Criterion) {
    let geometry = RailGeometry::new(1920.0, 24.0, 121).expect("valid geometry");

    c.bench_function("geometry_round_trip", |b| {
        b.iter(|| {
            for index in 0..121 {
                let offset = geometry.index_to_offset(black_box(index));
                let _ = geometry.offset_to_index(black_box(offset));
            }
        })
    });
}

fn bench_snap_to_step(c: &mut Criterion) {
    let geometry = RailGeometry::new(1920.0, 24.0, 121).expect("valid geometry");

    c.bench_function("snap_to_step_sweep", |b| {
        b.iter(|| {
            let mut target = -12.0;
            while target < 1920.0 {
                let _ = geometry.snap_to_step(black_box(target));
                target += 1.7;
            }
        })
    });
}

fn bench_drag_sweep(c: &mut Criterion) {
    c.bench_function("drag_sweep_1k_moves", |b| {
        b.iter(|| {
            let config = SliderEngineConfig::new(ValueSource::Interval { min: 0, max: 120 })
                .with_steps(true);
            let mut engine = SliderEngine::new(config).expect("engine init");
            engine.configure_rail(1920.0, 24.0).expect("configure rail");

            engine.pointer_down(Handle::Min, 0.0);
            for step in 0..1_000 {
                engine.pointer_move(black_box(step as f64 * 1.5));
            }
            engine.pointer_up();
        })
    });
}

criterion_group!(
    benches,
    bench_geometry_round_trip,
    bench_snap_to_step,
    bench_drag_sweep
);
criterion_main!(benches);
