//! Emotion changes and the one-call shorthands.

use glam::IVec2;

use super::distracted::DistractedPhase;
use super::RobotEyes;
use crate::display::Display;
use crate::emotion::Emotion;
use crate::platform::{Clock, RandomSource};
use crate::render::SleepMouth;

impl<D: Display, C: Clock, R: RandomSource> RobotEyes<D, C, R> {
    /// Switch to `emotion` at the clock's current time.
    ///
    /// Setting the emotion already showing is a no-op, except for `Blink`,
    /// which restarts the blink.
    pub fn set_emotion(&mut self, emotion: Emotion) {
        let now = self.clock.now_ms();
        self.enter(emotion, now);
    }

    pub(super) fn enter(&mut self, emotion: Emotion, now_ms: u64) {
        let state = &mut self.state;
        if emotion == state.current && emotion != Emotion::Blink {
            return;
        }
        // A blink ending on the emotion it covered picks its timers back up.
        let resuming = state.current == Emotion::Blink && emotion == state.previous;
        if state.current != Emotion::Blink {
            state.previous = state.current;
        }
        log::debug!("emotion {} -> {emotion} at {now_ms} ms", state.current);
        state.current = emotion;
        state.idle_active = false;
        state.ambient = IVec2::ZERO;
        state.next_jitter_ms = now_ms;
        state.heartbeat_scale = 1.0;

        if !resuming {
            match emotion {
                Emotion::Blink => state.blink_started_ms = now_ms,
                Emotion::Sleep => {
                    state.sleep_mouth = SleepMouth::Unshaped;
                    state.last_snore_ms = now_ms;
                }
                Emotion::Distracted => {
                    state.distracted_phase = DistractedPhase::Init;
                    state.phase_started_ms = now_ms;
                }
                Emotion::Pat => {
                    state.pat_end_ms = now_ms + u64::from(self.profile.behavior.pat_duration_ms);
                    state.pat_return = match state.previous {
                        Emotion::Pat | Emotion::Blink => Emotion::Neutral,
                        other => other,
                    };
                    state.next_shake_ms = now_ms;
                    state.shake_direction = 1;
                }
                _ => {}
            }
        }

        if self.profile.is_bitmap(emotion) {
            self.state.bitmap.reset(now_ms);
            return;
        }

        let descriptor = emotion.descriptor();
        match descriptor.base {
            Some(base) => {
                let eyes = &self.profile.eyes;
                let target = base.geometry(eyes.width, eyes.height);
                self.animator
                    .start_uniform(target, descriptor.transition_ms, now_ms);
            }
            // Eyes freeze mid-motion and close where they are.
            None if emotion == Emotion::Blink => self.animator.cancel(),
            None => {}
        }
    }

    /// Resting eyes with idle glances.
    pub fn neutral(&mut self) {
        self.set_emotion(Emotion::Neutral);
    }

    /// Close the eyes briefly, then return to the previous emotion.
    pub fn blink(&mut self) {
        self.set_emotion(Emotion::Blink);
    }

    /// Smile.
    pub fn happy(&mut self) {
        self.set_emotion(Emotion::Happy);
    }

    /// Drooping, trembling eyes.
    pub fn sad(&mut self) {
        self.set_emotion(Emotion::Sad);
    }

    /// Crying animation.
    pub fn cry(&mut self) {
        self.set_emotion(Emotion::Crying);
    }

    /// Beating hearts.
    pub fn love(&mut self) {
        self.set_emotion(Emotion::Love);
    }

    /// Shy animation.
    pub fn shy(&mut self) {
        self.set_emotion(Emotion::Shy);
    }

    /// Slanted, shaking eyes.
    pub fn angry(&mut self) {
        self.set_emotion(Emotion::Angry);
    }

    /// Driving animation.
    pub fn driving(&mut self) {
        self.set_emotion(Emotion::Driving);
    }

    /// Look around, left then right.
    pub fn distracted(&mut self) {
        self.set_emotion(Emotion::Distracted);
    }

    /// Doze off and snore.
    pub fn sleep(&mut self) {
        self.set_emotion(Emotion::Sleep);
    }

    /// Shrink and dart around.
    pub fn scared(&mut self) {
        self.set_emotion(Emotion::Scared);
    }

    /// React to a pat, then go back to what was showing.
    pub fn pat(&mut self) {
        self.set_emotion(Emotion::Pat);
    }

    /// Half-lidded stare.
    pub fn serious(&mut self) {
        self.set_emotion(Emotion::Serious);
    }

    /// Low battery animation.
    pub fn battery(&mut self) {
        self.set_emotion(Emotion::Battery);
    }
}
