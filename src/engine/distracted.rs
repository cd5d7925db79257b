//! The distracted look-around cycle.
//!
//! ```text
//! Init → LeftAnim → LeftHold → ReturnFromLeft → NeutralHoldBeforeRight
//!      → RightAnim → RightHold → ReturnFromRight → NeutralHoldBeforeLeft
//!      → LeftAnim → …
//! ```
//!
//! Animating phases end when the transition settles, hold phases when
//! their hold time has elapsed. At most one phase edge is taken per tick.

use super::RobotEyes;
use crate::animation::{EyeGeometry, EyePair, EyeSide};
use crate::display::Display;
use crate::platform::{Clock, RandomSource};

/// Position in the distracted cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistractedPhase {
    /// Just entered; the next tick starts looking left.
    #[default]
    Init,
    /// Animating toward the left look.
    LeftAnim,
    /// Holding the left look.
    LeftHold,
    /// Animating back to center from the left.
    ReturnFromLeft,
    /// Centered, right look comes next.
    NeutralHoldBeforeRight,
    /// Animating toward the right look.
    RightAnim,
    /// Holding the right look.
    RightHold,
    /// Animating back to center from the right.
    ReturnFromRight,
    /// Centered, left look comes next.
    NeutralHoldBeforeLeft,
}

impl DistractedPhase {
    /// The phase that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Init | Self::NeutralHoldBeforeLeft => Self::LeftAnim,
            Self::LeftAnim => Self::LeftHold,
            Self::LeftHold => Self::ReturnFromLeft,
            Self::ReturnFromLeft => Self::NeutralHoldBeforeRight,
            Self::NeutralHoldBeforeRight => Self::RightAnim,
            Self::RightAnim => Self::RightHold,
            Self::RightHold => Self::ReturnFromRight,
            Self::ReturnFromRight => Self::NeutralHoldBeforeLeft,
        }
    }

    /// Whether the phase waits on a transition rather than a timer.
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(
            self,
            Self::LeftAnim
                | Self::ReturnFromLeft
                | Self::RightAnim
                | Self::ReturnFromRight
        )
    }
}

impl<D: Display, C: Clock, R: RandomSource> RobotEyes<D, C, R> {
    pub(super) fn tick_distracted(&mut self, now_ms: u64) {
        let behavior = &self.profile.behavior;
        let phase = self.state.distracted_phase;
        let elapsed = now_ms.saturating_sub(self.state.phase_started_ms);
        let done = match phase {
            DistractedPhase::Init => true,
            DistractedPhase::LeftHold | DistractedPhase::RightHold => {
                elapsed >= u64::from(behavior.distracted_side_hold_ms)
            }
            DistractedPhase::NeutralHoldBeforeRight
            | DistractedPhase::NeutralHoldBeforeLeft => {
                elapsed >= u64::from(behavior.distracted_neutral_hold_ms)
            }
            _ => self.animator.is_settled(),
        };
        if !done {
            return;
        }

        let next = phase.next();
        let duration = behavior.distracted_anim_ms;
        let target = match next {
            DistractedPhase::LeftAnim => Some(self.look_toward(EyeSide::Left)),
            DistractedPhase::RightAnim => Some(self.look_toward(EyeSide::Right)),
            DistractedPhase::ReturnFromLeft | DistractedPhase::ReturnFromRight => {
                Some(EyePair::uniform(self.profile.eyes.resting()))
            }
            _ => None,
        };
        if let Some(target) = target {
            self.animator.start(target, duration, now_ms);
        }
        log::trace!("distracted: {phase:?} -> {next:?} at {now_ms} ms");
        self.state.distracted_phase = next;
        self.state.phase_started_ms = now_ms;
    }

    /// Asymmetric glance: the eye on the `toward` side grows and moves
    /// furthest, the other shrinks and follows.
    fn look_toward(&self, toward: EyeSide) -> EyePair {
        let behavior = &self.profile.behavior;
        let eyes = &self.profile.eyes;
        let dir = toward.sign();
        let near = EyeGeometry::new(
            dir * behavior.distracted_near_offset,
            0.0,
            eyes.width * behavior.distracted_grow,
            eyes.height * behavior.distracted_grow,
        );
        let far = EyeGeometry::new(
            dir * behavior.distracted_far_offset,
            0.0,
            eyes.width * behavior.distracted_shrink,
            eyes.height * behavior.distracted_shrink,
        );
        match toward {
            EyeSide::Left => EyePair::new(near, far),
            EyeSide::Right => EyePair::new(far, near),
        }
    }
}
