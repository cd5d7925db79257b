//! Animator drives one eased geometry transition at a time.

use super::geometry::{EyeGeometry, EyePair};
use crate::util::easing::EasingFunction;

/// An in-flight (or finished) interpolation between two eye pairs.
///
/// `duration_ms == 0` means settled: nothing is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTransition {
    /// Geometry when the transition started.
    pub start: EyePair,
    /// Geometry the transition ends on.
    pub target: EyePair,
    /// When the transition started.
    pub start_ms: u64,
    /// Total duration; 0 once complete.
    pub duration_ms: u32,
}

impl AnimationTransition {
    /// A settled transition resting on `pair`.
    #[must_use]
    pub fn settled(pair: EyePair) -> Self {
        Self {
            start: pair,
            target: pair,
            start_ms: 0,
            duration_ms: 0,
        }
    }

    /// Raw progress in [0, 1] at `now_ms`. A settled transition reports 1.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }
}

/// Owns the current eye geometry and the single active transition.
///
/// A new request always replaces the previous one, starting from wherever
/// the eyes are right now. There is no queueing or blending.
#[derive(Debug, Clone)]
pub struct Animator {
    current: EyePair,
    transition: AnimationTransition,
    easing: EasingFunction,
}

impl Animator {
    /// Animator resting on `initial`.
    #[must_use]
    pub fn new(initial: EyePair, easing: EasingFunction) -> Self {
        Self {
            current: initial,
            transition: AnimationTransition::settled(initial),
            easing,
        }
    }

    /// Current geometry of both eyes.
    #[must_use]
    pub fn geometry(&self) -> &EyePair {
        &self.current
    }

    /// The active (or last) transition.
    #[must_use]
    pub fn transition(&self) -> &AnimationTransition {
        &self.transition
    }

    /// True when nothing is in flight. This is the only completion signal.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transition.duration_ms == 0
    }

    /// Start moving both eyes toward `target` over `duration_ms`.
    ///
    /// A zero duration settles on the target immediately.
    pub fn start(&mut self, target: EyePair, duration_ms: u32, now_ms: u64) {
        self.transition = AnimationTransition {
            start: self.current,
            target,
            start_ms: now_ms,
            duration_ms,
        };
        if duration_ms == 0 {
            self.current = target;
        }
    }

    /// Start moving both eyes toward the same geometry.
    pub fn start_uniform(
        &mut self,
        target: EyeGeometry,
        duration_ms: u32,
        now_ms: u64,
    ) {
        self.start(EyePair::uniform(target), duration_ms, now_ms);
    }

    /// Freeze the eyes where they are and drop any in-flight transition.
    pub fn cancel(&mut self) {
        self.transition = AnimationTransition::settled(self.current);
    }

    /// Move the geometry to its position at `now_ms`.
    ///
    /// Reaching full progress lands exactly on the target and settles.
    pub fn advance(&mut self, now_ms: u64) {
        if self.is_settled() {
            return;
        }
        let progress = self.transition.progress(now_ms);
        if progress >= 1.0 {
            self.current = self.transition.target;
            self.transition.duration_ms = 0;
            return;
        }
        let eased = self.easing.evaluate(progress);
        self.current = self.transition.start.lerp(&self.transition.target, eased);
    }
}
