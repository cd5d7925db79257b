use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Constants of the per-emotion continuous behaviors.
///
/// Ranges are half-open: `[min, max)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Behavior", inline)]
#[serde(default)]
pub struct BehaviorOptions {
    /// Horizontal glance offset range (idle and scared darting).
    pub glance_x: (i32, i32),
    /// Vertical glance offset range (idle and scared darting).
    pub glance_y: (i32, i32),
    /// Duration of each scared dart.
    pub dart_ms: u32,
    /// Distracted: duration of each look transition.
    pub distracted_anim_ms: u32,
    /// Distracted: how long a side look is held.
    pub distracted_side_hold_ms: u32,
    /// Distracted: how long the eyes rest centered between sides.
    pub distracted_neutral_hold_ms: u32,
    /// Distracted: horizontal offset of the enlarged eye.
    pub distracted_near_offset: f32,
    /// Distracted: horizontal offset of the shrunken eye.
    pub distracted_far_offset: f32,
    /// Distracted: size factor of the enlarged eye.
    pub distracted_grow: f32,
    /// Distracted: size factor of the shrunken eye.
    pub distracted_shrink: f32,
    /// Sleep: mouth toggle interval.
    pub snore_interval_ms: u32,
    /// Sleep: vertical face lift while the mouth is oval.
    pub snore_lift: i32,
    /// Love: heartbeat angular speed in radians per millisecond.
    pub heartbeat_speed: f32,
    /// Love: heartbeat scale amplitude.
    pub heartbeat_magnitude: f32,
    /// Pat: how long the pat lasts before reverting.
    pub pat_duration_ms: u32,
    /// Pat: lower bound of the shake interval.
    pub pat_shake_min_ms: u32,
    /// Pat: upper bound (exclusive) of the shake interval.
    pub pat_shake_max_ms: u32,
    /// Pat: horizontal shake magnitude in pixels.
    pub pat_shake_magnitude: i32,
}

impl Default for BehaviorOptions {
    fn default() -> Self {
        Self {
            glance_x: (-8, 9),
            glance_y: (-6, 7),
            dart_ms: 100,
            distracted_anim_ms: 300,
            distracted_side_hold_ms: 2000,
            distracted_neutral_hold_ms: 3000,
            distracted_near_offset: 15.0,
            distracted_far_offset: 10.0,
            distracted_grow: 1.5,
            distracted_shrink: 0.5,
            snore_interval_ms: 500,
            snore_lift: 2,
            heartbeat_speed: 0.005,
            heartbeat_magnitude: 0.2,
            pat_duration_ms: 2000,
            pat_shake_min_ms: 60,
            pat_shake_max_ms: 140,
            pat_shake_magnitude: 3,
        }
    }
}
