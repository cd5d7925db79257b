//! End-to-end expression scenarios driven through the public API with a
//! hand-stepped clock.

#![allow(clippy::unwrap_used, clippy::panic)]

use buddy_eyes::animation::{EyeGeometry, EyePair};
use buddy_eyes::display::{
    Bitmap, BitmapTable, DrawCommand, Framebuffer, RecordingDisplay,
};
use buddy_eyes::emotion::Emotion;
use buddy_eyes::engine::{DistractedPhase, RobotEyes};
use buddy_eyes::options::Profile;
use buddy_eyes::platform::{ManualClock, RngSource, SequenceRandom};
use buddy_eyes::render::SleepMouth;

fn recording(profile: Profile) -> (RobotEyes<RecordingDisplay, ManualClock, RngSource<rand::rngs::StdRng>>, ManualClock) {
    let clock = ManualClock::new(0);
    let mut eyes = RobotEyes::new(profile, clock.clone(), RngSource::seeded(99)).unwrap();
    eyes.begin(RecordingDisplay::new());
    (eyes, clock)
}

/// Step the shared clock by `step_ms` until it reaches `until_ms`,
/// ticking each time.
fn run_until<D, R>(eyes: &mut RobotEyes<D, ManualClock, R>, clock: &ManualClock, until_ms: u64, step_ms: u64)
where
    D: buddy_eyes::display::Display,
    R: buddy_eyes::platform::RandomSource,
{
    while clock_now(clock) < until_ms {
        clock.advance(step_ms);
        eyes.update();
    }
}

fn clock_now(clock: &ManualClock) -> u64 {
    use buddy_eyes::platform::Clock;
    clock.now_ms()
}

#[test]
fn happy_then_update_is_one_frame() {
    let (mut eyes, clock) = recording(Profile::companion());
    clock.set(1000);
    eyes.happy();
    eyes.update();
    let display = eyes.display().unwrap();
    assert_eq!(display.frame_count(), 1);
    assert_eq!(display.last_frame().unwrap()[0], DrawCommand::Clear);
}

#[test]
fn neutral_scared_blink_scared() {
    let (mut eyes, clock) = recording(Profile::ride_buddy());
    eyes.neutral();
    eyes.update();
    let frame = eyes.display().unwrap().last_frame().unwrap().to_vec();
    let eyes_drawn: Vec<_> = frame
        .iter()
        .filter_map(|c| match *c {
            DrawCommand::FillRoundRect { size, .. } => Some(size),
            _ => None,
        })
        .collect();
    assert_eq!(eyes_drawn, vec![glam::IVec2::new(38, 42); 2]);

    let neutral = glam::Vec2::new(38.0, 42.0);
    let scared = glam::Vec2::new(38.0 * 0.7, 42.0 * 0.7);
    clock.set(1);
    eyes.scared();
    eyes.update();
    assert_eq!(eyes.transition().start_ms, 1);
    assert_eq!(eyes.transition().target.left.size, scared);

    // Ride-buddy ticks every 50 ms; the next admitted tick is mid-transition.
    clock.set(50);
    eyes.update();
    let size = eyes.geometry().left.size;
    assert!(size.x < neutral.x && size.x > scared.x, "{size}");
    assert!(size.y < neutral.y && size.y > scared.y, "{size}");

    eyes.blink();
    assert_eq!(eyes.emotion(), Emotion::Blink);
    clock.set(200);
    eyes.update();
    assert_eq!(eyes.emotion(), Emotion::Scared);
    // Resolving a blink does not overwrite what it was covering.
    assert_eq!(eyes.previous_emotion(), Emotion::Scared);
}

#[test]
fn blink_reverts_to_the_emotion_before_it() {
    let (mut eyes, clock) = recording(Profile::companion());
    clock.set(1000);
    eyes.update();
    eyes.blink();
    clock.set(1160);
    eyes.update();
    assert_eq!(eyes.emotion(), Emotion::Neutral);

    eyes.serious();
    eyes.blink();
    clock.set(1400);
    eyes.update();
    assert_eq!(eyes.emotion(), Emotion::Serious);
}

#[test]
fn scared_shrinks_then_darts() {
    let (mut eyes, clock) = recording(Profile::companion());
    eyes.scared();
    clock.advance(1);
    eyes.update();
    // Interpolating from resting toward the reduced size.
    assert_eq!(
        eyes.transition().target,
        EyePair::uniform(EyeGeometry::centered(38.0 * 0.7, 42.0 * 0.7))
    );
    assert_eq!(
        eyes.transition().start,
        EyePair::uniform(EyeGeometry::centered(38.0, 42.0))
    );

    let mut darts = 0;
    let mut last_start = eyes.transition().start_ms;
    while clock_now(&clock) < 3000 {
        clock.advance(16);
        eyes.update();
        if eyes.transition().start_ms != last_start {
            darts += 1;
            last_start = eyes.transition().start_ms;
            let target = eyes.transition().target.left;
            assert!((-8.0..9.0).contains(&target.offset.x));
            assert!((-6.0..7.0).contains(&target.offset.y));
        }
    }
    assert!(darts > 10, "only {darts} darts");
    assert_eq!(eyes.emotion(), Emotion::Scared);
}

#[test]
fn distracted_cycles_in_order() {
    let (mut eyes, clock) = recording(Profile::companion());
    eyes.distracted();
    let mut seen = vec![eyes.distracted_phase()];
    while clock_now(&clock) < 20_000 {
        clock.advance(50);
        eyes.update();
        let phase = eyes.distracted_phase();
        if seen.last() != Some(&phase) {
            let previous = *seen.last().unwrap();
            assert_eq!(phase, previous.next());
            seen.push(phase);
        }
    }
    assert!(seen.contains(&DistractedPhase::RightHold));
    assert!(seen.iter().filter(|p| **p == DistractedPhase::LeftAnim).count() >= 2);
}

#[test]
fn sleep_snores_on_schedule() {
    let mut profile = Profile::ride_buddy();
    // Keep auto-blink out of the observed window.
    profile.timing.auto_blink_min_ms = 10_000;
    profile.timing.auto_blink_max_ms = 20_000;
    let (mut eyes, clock) = recording(profile);
    eyes.sleep();
    let mut toggles = Vec::new();
    let mut mouth = eyes.sleep_mouth();
    while clock_now(&clock) < 3000 {
        clock.advance(50);
        eyes.update();
        if eyes.sleep_mouth() != mouth {
            mouth = eyes.sleep_mouth();
            toggles.push(clock_now(&clock));
        }
    }
    assert_eq!(toggles, vec![500, 1000, 1500, 2000, 2500, 3000]);
    assert_eq!(mouth, SleepMouth::Unshaped);
}

#[test]
fn pat_returns_to_previous_emotion() {
    let (mut eyes, clock) = recording(Profile::companion());
    eyes.love();
    eyes.pat();
    run_until(&mut eyes, &clock, 1900, 20);
    assert_eq!(eyes.emotion(), Emotion::Pat);
    run_until(&mut eyes, &clock, 2100, 20);
    assert_eq!(eyes.emotion(), Emotion::Love);
}

#[test]
fn bitmap_emotions_stream_bitmap_frames() {
    let (mut eyes, clock) = recording(Profile::ride_buddy());
    eyes.cry();
    run_until(&mut eyes, &clock, 1000, 50);
    let display = eyes.display().unwrap();
    for frame in display.frames() {
        assert_eq!(frame.len(), 2);
        match frame[1] {
            DrawCommand::Bitmap { emotion, frame, .. } => {
                assert_eq!(emotion, Emotion::Crying);
                assert!(frame < 24);
            }
            other => panic!("expected bitmap, got {other:?}"),
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let script = |seed| {
        let clock = ManualClock::new(0);
        let mut eyes = RobotEyes::new(Profile::companion(), clock.clone(), RngSource::seeded(seed)).unwrap();
        eyes.begin(RecordingDisplay::new());
        for emotion in [Emotion::Neutral, Emotion::Angry, Emotion::Scared] {
            eyes.set_emotion(emotion);
            run_until(&mut eyes, &clock, clock_now(&clock) + 4000, 16);
        }
        eyes.display().unwrap().frames().to_vec()
    };
    assert_eq!(script(5), script(5));
}

#[test]
fn scripted_randomness_drives_glances() {
    let clock = ManualClock::new(0);
    // Blink and idle intervals (scheduled by `new` and again by `begin`),
    // then the glance offsets. Values are clamped into each range.
    let random = SequenceRandom::new(vec![100_000, 3000, 100_000, 3000, 5, -4]);
    let mut eyes = RobotEyes::new(Profile::companion(), clock.clone(), random).unwrap();
    eyes.begin(RecordingDisplay::new());
    run_until(&mut eyes, &clock, 3000, 20);
    assert!(eyes.is_glancing());
    let target = eyes.transition().target.left;
    assert_eq!(target.offset.x, 5.0);
    assert_eq!(target.offset.y, -4.0);
}

#[test]
fn framebuffer_shows_rasterized_eyes() {
    let clock = ManualClock::new(0);
    let mut eyes = RobotEyes::new(Profile::companion(), clock.clone(), RngSource::seeded(1)).unwrap();
    eyes.begin(Framebuffer::new(128, 64));
    eyes.update();
    let fb = eyes.display().unwrap();
    // Both eye centers are lit, the gap between them is dark.
    assert!(fb.is_on(32, 24));
    assert!(fb.is_on(96, 24));
    assert!(!fb.is_on(64, 10));
    assert_eq!(fb.presents(), 1);

    eyes.blink();
    clock.advance(20);
    eyes.update();
    let fb = eyes.display().unwrap();
    assert!(fb.is_on(32, 24));
    assert!(!fb.is_on(32, 20));
}

#[test]
fn framebuffer_blits_host_bitmaps() {
    let clock = ManualClock::new(0);
    let mut bitmaps = BitmapTable::new();
    let frame = Bitmap::from_xbm(8, 1, vec![0b0000_0011]).unwrap();
    bitmaps.insert(Emotion::Shy, vec![frame; 20]);
    let mut eyes =
        RobotEyes::new(Profile::ride_buddy(), clock.clone(), RngSource::seeded(1)).unwrap();
    eyes.begin(Framebuffer::new(128, 64).with_bitmaps(bitmaps));
    eyes.shy();
    eyes.update();
    let fb = eyes.display().unwrap();
    assert_eq!(fb.lit_count(), 2);
    assert!(fb.is_on(0, 0) && fb.is_on(1, 0));
}
