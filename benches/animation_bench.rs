#![allow(missing_docs)]

use buddy_eyes::animation::{Animator, EyeGeometry, EyePair};
use buddy_eyes::display::{Framebuffer, RecordingDisplay};
use buddy_eyes::emotion::Emotion;
use buddy_eyes::engine::RobotEyes;
use buddy_eyes::options::Profile;
use buddy_eyes::platform::{ManualClock, RngSource};
use buddy_eyes::util::easing::EasingFunction;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn animator_benchmark(c: &mut Criterion) {
    let start = EyePair::uniform(EyeGeometry::centered(38.0, 42.0));
    let target = EyePair::new(
        EyeGeometry::new(-15.0, 0.0, 57.0, 63.0),
        EyeGeometry::new(-10.0, 0.0, 19.0, 21.0),
    );
    c.bench_function("animator_advance", |b| {
        b.iter(|| {
            let mut animator = Animator::new(start, EasingFunction::CubicInOut);
            animator.start(target, 300, 0);
            for now in (0..=300).step_by(16) {
                animator.advance(black_box(now));
            }
            black_box(*animator.geometry())
        })
    });
}

fn frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for emotion in [Emotion::Neutral, Emotion::Love, Emotion::Sleep, Emotion::Scared] {
        let clock = ManualClock::new(0);
        let Ok(mut eyes) =
            RobotEyes::new(Profile::companion(), clock.clone(), RngSource::seeded(1))
        else {
            return;
        };
        eyes.begin(Framebuffer::new(128, 64));
        eyes.set_emotion(emotion);

        group.bench_function(format!("rasterize_{emotion}"), |b| {
            b.iter(|| {
                clock.advance(16);
                eyes.update();
            })
        });
    }

    let clock = ManualClock::new(0);
    if let Ok(mut eyes) =
        RobotEyes::new(Profile::companion(), clock.clone(), RngSource::seeded(1))
    {
        eyes.begin(RecordingDisplay::new());
        eyes.distracted();
        group.bench_function("record_distracted", |b| {
            b.iter(|| {
                clock.advance(16);
                eyes.update();
                if let Some(display) = eyes.display_mut() {
                    display.clear_history();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, animator_benchmark, frame_benchmark);
criterion_main!(benches);
