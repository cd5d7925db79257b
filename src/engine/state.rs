//! Mutable per-emotion state owned by [`RobotEyes`](super::RobotEyes).

use glam::IVec2;

use super::distracted::DistractedPhase;
use crate::emotion::Emotion;
use crate::render::{BitmapCursor, SleepMouth};

/// Timers and flags the tick behaviors read and write. Geometry lives in
/// the animator.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct EyesState {
    pub(super) current: Emotion,
    /// Never `Blink`.
    pub(super) previous: Emotion,

    // Blinking
    pub(super) blink_started_ms: u64,
    pub(super) next_blink_ms: u64,

    // Idle glances (Neutral only)
    pub(super) idle_active: bool,
    pub(super) next_idle_ms: u64,
    pub(super) idle_end_ms: u64,

    /// Jitter, snore bob or pat shake. Cleared on every emotion change.
    pub(super) ambient: IVec2,
    pub(super) next_jitter_ms: u64,
    pub(super) heartbeat_scale: f32,

    pub(super) distracted_phase: DistractedPhase,
    pub(super) phase_started_ms: u64,

    pub(super) sleep_mouth: SleepMouth,
    pub(super) last_snore_ms: u64,

    pub(super) pat_end_ms: u64,
    /// Where the pat goes back to, fixed when it starts.
    pub(super) pat_return: Emotion,
    pub(super) next_shake_ms: u64,
    pub(super) shake_direction: i32,

    pub(super) bitmap: BitmapCursor,
}

impl EyesState {
    pub(super) fn new(now_ms: u64) -> Self {
        Self {
            current: Emotion::Neutral,
            previous: Emotion::Neutral,
            blink_started_ms: now_ms,
            next_blink_ms: now_ms,
            idle_active: false,
            next_idle_ms: now_ms,
            idle_end_ms: now_ms,
            ambient: IVec2::ZERO,
            next_jitter_ms: now_ms,
            heartbeat_scale: 1.0,
            distracted_phase: DistractedPhase::Init,
            phase_started_ms: now_ms,
            sleep_mouth: SleepMouth::Unshaped,
            last_snore_ms: now_ms,
            pat_end_ms: now_ms,
            pat_return: Emotion::Neutral,
            next_shake_ms: now_ms,
            shake_direction: 1,
            bitmap: BitmapCursor::default(),
        }
    }
}
