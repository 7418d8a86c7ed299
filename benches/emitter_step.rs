use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use explosion_fx::particles::{create_emitter_with_seed, draw_emitter, start_emitter, step_emitter};
use explosion_fx::renderer::{clear_quad_batch, create_quad_batch, texture_from_image};
use explosion_fx::{EmitterConfig, FixedStepClock, SharedDriver};
use image::DynamicImage;
use std::sync::Arc;

fn bench_step_and_draw(c: &mut Criterion) {
    let texture = texture_from_image("exp", &DynamicImage::new_rgba8(16, 16));
    let mut group = c.benchmark_group("explosion_emitter");

    for count in [64usize, 1024, 16_384] {
        let driver: SharedDriver = Arc::new(FixedStepClock::new());
        let mut emitter = create_emitter_with_seed(
            count,
            EmitterConfig::default(),
            Arc::clone(&texture),
            driver,
            7,
        )
        .expect("valid emitter");
        let mut batch = create_quad_batch(count);

        group.bench_with_input(BenchmarkId::new("step_and_draw", count), &count, |b, _| {
            b.iter(|| {
                // Rewind before the effect pauses itself
                if emitter.elapsed_ticks >= 50 || emitter.paused {
                    start_emitter(&mut emitter).expect("start");
                }
                step_emitter(&mut emitter);
                clear_quad_batch(&mut batch);
                draw_emitter(&emitter, &mut batch);
                black_box(batch.instances.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step_and_draw);
criterion_main!(benches);
