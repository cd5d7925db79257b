//! Per-tick work: geometry, blinking, per-emotion behavior, jitter, drawing.

use glam::{IVec2, Vec2};

use super::RobotEyes;
use crate::animation::EyeGeometry;
use crate::display::Display;
use crate::emotion::{Emotion, TickBehavior};
use crate::platform::{Clock, RandomSource};
use crate::render::{FrameView, SleepMouth};

impl<D: Display, C: Clock, R: RandomSource> RobotEyes<D, C, R> {
    /// Tick at the clock's current time.
    pub fn update(&mut self) {
        let now = self.clock.now_ms();
        self.update_at(now);
    }

    /// Tick at `now_ms`. Calls closer together than the frame interval are
    /// ignored, so hosts may poll freely.
    ///
    /// Order within a tick: advance geometry, resolve blinks, run the
    /// emotion's behavior, roll jitter, draw one frame.
    pub fn update_at(&mut self, now_ms: u64) {
        if !self.frame_gate.try_begin(now_ms) {
            return;
        }
        let bitmap = self.profile.is_bitmap(self.state.current);
        if !bitmap {
            self.animator.advance(now_ms);
        }

        self.tick_blink(now_ms);

        if !self.profile.is_bitmap(self.state.current) {
            match self.state.current.descriptor().behavior {
                TickBehavior::Still => {}
                TickBehavior::IdleGlance => self.tick_idle(now_ms),
                TickBehavior::Heartbeat => self.tick_heartbeat(now_ms),
                TickBehavior::Dart => self.tick_dart(now_ms),
                TickBehavior::Distracted => self.tick_distracted(now_ms),
                TickBehavior::Snore => self.tick_snore(now_ms),
                TickBehavior::Pat => self.tick_pat(now_ms),
            }
        }

        self.tick_jitter(now_ms);
        self.draw_frame(now_ms);
    }

    fn tick_blink(&mut self, now_ms: u64) {
        let timing = &self.profile.timing;
        let blink_ms = u64::from(timing.blink_duration_ms);
        if self.state.current == Emotion::Blink {
            if now_ms.saturating_sub(self.state.blink_started_ms) >= blink_ms {
                let back = self.state.previous;
                self.enter(back, now_ms);
            }
            return;
        }
        let current = self.state.current;
        let eligible = current.descriptor().auto_blink
            && (current != Emotion::Scared || timing.blink_while_scared)
            && !self.state.idle_active
            && !self.profile.is_bitmap(current);
        if eligible && now_ms >= self.state.next_blink_ms {
            let wait = self
                .random
                .random_interval(timing.auto_blink_min_ms, timing.auto_blink_max_ms);
            self.state.next_blink_ms = now_ms + blink_ms + wait;
            log::trace!("auto-blink at {now_ms} ms, next at {}", self.state.next_blink_ms);
            self.enter(Emotion::Blink, now_ms);
        }
    }

    fn tick_idle(&mut self, now_ms: u64) {
        let timing = &self.profile.timing;
        let resting = self.profile.eyes.resting();
        if !self.state.idle_active && now_ms >= self.state.next_idle_ms {
            let (x_min, x_max) = self.profile.behavior.glance_x;
            let (y_min, y_max) = self.profile.behavior.glance_y;
            let dx = self.random.random_range(x_min, x_max);
            let dy = self.random.random_range(y_min, y_max);
            self.animator.start_uniform(
                resting.with_offset(dx as f32, dy as f32),
                timing.idle_transition_ms,
                now_ms,
            );
            self.state.idle_active = true;
            self.state.idle_end_ms = now_ms
                + u64::from(timing.idle_transition_ms)
                + u64::from(timing.idle_hold_ms);
        } else if self.state.idle_active && now_ms >= self.state.idle_end_ms {
            self.animator
                .start_uniform(resting, timing.idle_transition_ms, now_ms);
            self.state.idle_active = false;
            self.state.next_idle_ms =
                now_ms + self.random.random_interval(timing.idle_min_ms, timing.idle_max_ms);
        }
    }

    fn tick_heartbeat(&mut self, now_ms: u64) {
        let behavior = &self.profile.behavior;
        let phase = now_ms as f64 * f64::from(behavior.heartbeat_speed);
        self.state.heartbeat_scale = 1.0 + behavior.heartbeat_magnitude * phase.sin() as f32;
    }

    /// A new glance every time the previous one lands, keeping the size.
    fn tick_dart(&mut self, now_ms: u64) {
        if !self.animator.is_settled() {
            return;
        }
        let behavior = &self.profile.behavior;
        let dx = self.random.random_range(behavior.glance_x.0, behavior.glance_x.1);
        let dy = self.random.random_range(behavior.glance_y.0, behavior.glance_y.1);
        let target = EyeGeometry {
            offset: Vec2::new(dx as f32, dy as f32),
            size: self.animator.geometry().left.size,
        };
        self.animator.start_uniform(target, behavior.dart_ms, now_ms);
    }

    fn tick_snore(&mut self, now_ms: u64) {
        let behavior = &self.profile.behavior;
        if now_ms.saturating_sub(self.state.last_snore_ms) < u64::from(behavior.snore_interval_ms) {
            return;
        }
        self.state.last_snore_ms = now_ms;
        self.state.sleep_mouth = self.state.sleep_mouth.toggled();
        self.state.ambient.y = match self.state.sleep_mouth {
            SleepMouth::Oval => -behavior.snore_lift,
            SleepMouth::Unshaped => 0,
        };
    }

    fn tick_pat(&mut self, now_ms: u64) {
        if now_ms >= self.state.pat_end_ms {
            let back = self.state.pat_return;
            log::debug!("pat over, back to {back}");
            self.enter(back, now_ms);
            return;
        }
        if now_ms >= self.state.next_shake_ms {
            let behavior = &self.profile.behavior;
            self.state.shake_direction = -self.state.shake_direction;
            self.state.ambient.x = self.state.shake_direction * behavior.pat_shake_magnitude;
            self.state.next_shake_ms = now_ms
                + self
                    .random
                    .random_interval(behavior.pat_shake_min_ms, behavior.pat_shake_max_ms);
        }
    }

    fn tick_jitter(&mut self, now_ms: u64) {
        let magnitude = self.state.current.descriptor().jitter;
        if magnitude <= 0 || now_ms < self.state.next_jitter_ms {
            return;
        }
        self.state.ambient = IVec2::new(
            self.random.random_range(-magnitude, magnitude + 1),
            self.random.random_range(-magnitude, magnitude + 1),
        );
        self.state.next_jitter_ms =
            now_ms + u64::from(self.profile.timing.jitter_interval_ms);
    }

    fn draw_frame(&mut self, now_ms: u64) {
        let Some(display) = self.display.as_mut() else {
            return;
        };
        let view = FrameView {
            emotion: self.state.current,
            geometry: self.animator.geometry(),
            ambient: self.state.ambient,
            heartbeat_scale: self.state.heartbeat_scale,
            sleep_mouth: self.state.sleep_mouth,
            now_ms,
        };
        let bitmap = self.profile.bitmap(self.state.current);
        self.renderer
            .render(display, &view, bitmap, &mut self.state.bitmap);
    }
}
