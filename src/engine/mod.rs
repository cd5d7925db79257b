//! The expression state machine.
//!
//! [`RobotEyes`] owns the current emotion, the geometry animator and every
//! per-emotion timer. Hosts call [`RobotEyes::update`] as often as they like;
//! work happens at most once per frame interval.

mod distracted;
mod expression;
mod state;
mod update;

use glam::IVec2;

pub use distracted::DistractedPhase;

use self::state::EyesState;
use crate::animation::{AnimationTransition, Animator, EyePair};
use crate::display::Display;
use crate::emotion::Emotion;
use crate::error::EyesError;
use crate::options::Profile;
use crate::platform::{Clock, RandomSource};
use crate::render::{FrameRenderer, SleepMouth};
use crate::util::frame_timing::FrameGate;

/// Animated robot eyes on a monochrome display.
///
/// # Lifecycle
///
/// Build with [`new`](Self::new), hand over a display with
/// [`begin`](Self::begin), then call [`update`](Self::update) from the host
/// loop. Until a display is attached, updates still advance the state but
/// nothing is drawn.
///
/// # Emotions
///
/// [`set_emotion`](Self::set_emotion) (or one of the shorthands such as
/// [`happy`](Self::happy)) switches expression. Setting the current emotion
/// again does nothing, except for `Blink`, which restarts. Blinks and pats
/// resolve back to the emotion that was showing before them.
pub struct RobotEyes<D, C, R> {
    /// Constants for this product variant.
    profile: Profile,
    /// Host time source.
    clock: C,
    /// Host randomness.
    random: R,
    /// Output, once [`begin`](Self::begin) has been called.
    display: Option<D>,
    /// Draw-command composer laid out for the profile's screen.
    renderer: FrameRenderer,
    /// Frame pacing.
    frame_gate: FrameGate,
    /// Eye geometry and its active transition.
    animator: Animator,
    /// Emotion and behavior timers.
    state: EyesState,
}

// =============================================================================
// Construction
// =============================================================================

impl<D: Display, C: Clock, R: RandomSource> RobotEyes<D, C, R> {
    /// Eyes resting in `Neutral`.
    ///
    /// # Errors
    ///
    /// Returns [`EyesError::InvalidProfile`] if the profile fails
    /// [`Profile::validate`].
    pub fn new(profile: Profile, clock: C, random: R) -> Result<Self, EyesError> {
        profile.validate()?;
        let now = clock.now_ms();
        let resting = EyePair::uniform(profile.eyes.resting());
        let mut eyes = Self {
            renderer: FrameRenderer::new(&profile),
            frame_gate: FrameGate::new(u64::from(profile.timing.frame_interval_ms)),
            animator: Animator::new(resting, profile.timing.easing),
            state: EyesState::new(now),
            display: None,
            profile,
            clock,
            random,
        };
        eyes.schedule_timers(now);
        Ok(eyes)
    }

    /// Attach the display and restart the blink and idle schedules.
    pub fn begin(&mut self, display: D) {
        let now = self.clock.now_ms();
        self.display = Some(display);
        self.schedule_timers(now);
        log::info!(
            "Eyes started: profile '{}', {}x{} screen, {} ms frames",
            self.profile.name,
            self.profile.screen.width,
            self.profile.screen.height,
            self.profile.timing.frame_interval_ms,
        );
    }

    fn schedule_timers(&mut self, now_ms: u64) {
        let timing = &self.profile.timing;
        self.state.next_blink_ms = now_ms
            + self
                .random
                .random_interval(timing.auto_blink_min_ms, timing.auto_blink_max_ms);
        self.state.next_idle_ms =
            now_ms + self.random.random_interval(timing.idle_min_ms, timing.idle_max_ms);
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<D, C, R> RobotEyes<D, C, R> {
    /// Emotion currently showing.
    #[must_use]
    pub fn emotion(&self) -> Emotion {
        self.state.current
    }

    /// Emotion a blink or pat returns to. Never `Blink`.
    #[must_use]
    pub fn previous_emotion(&self) -> Emotion {
        self.state.previous
    }

    /// Current eye geometry.
    #[must_use]
    pub fn geometry(&self) -> &EyePair {
        self.animator.geometry()
    }

    /// Active (or last) geometry transition.
    #[must_use]
    pub fn transition(&self) -> &AnimationTransition {
        self.animator.transition()
    }

    /// Whether a geometry transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animator.is_settled()
    }

    /// Whether the current emotion is drawn from a bitmap set.
    #[must_use]
    pub fn is_bitmap(&self) -> bool {
        self.profile.is_bitmap(self.state.current)
    }

    /// Position in the distracted cycle. Meaningful while distracted.
    #[must_use]
    pub fn distracted_phase(&self) -> DistractedPhase {
        self.state.distracted_phase
    }

    /// Sleep mouth shape. Meaningful while sleeping.
    #[must_use]
    pub fn sleep_mouth(&self) -> SleepMouth {
        self.state.sleep_mouth
    }

    /// Bitmap frame index. Meaningful for bitmap emotions.
    #[must_use]
    pub fn bitmap_frame(&self) -> usize {
        self.state.bitmap.frame()
    }

    /// Pixel offset applied to everything drawn: jitter, snore bob or pat
    /// shake.
    #[must_use]
    pub fn ambient_offset(&self) -> IVec2 {
        self.state.ambient
    }

    /// Heart size multiplier.
    #[must_use]
    pub fn heartbeat_scale(&self) -> f32 {
        self.state.heartbeat_scale
    }

    /// Whether a neutral idle glance is under way.
    #[must_use]
    pub fn is_glancing(&self) -> bool {
        self.state.idle_active
    }

    /// Number of ticks that did work.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frame_gate.frames()
    }

    /// Active profile.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Attached display.
    #[must_use]
    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    /// Attached display, mutably.
    pub fn display_mut(&mut self) -> Option<&mut D> {
        self.display.as_mut()
    }
}
