use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Frame pacing, blink and idle scheduling. All values in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
pub struct TimingOptions {
    /// Minimum spacing between processed ticks.
    pub frame_interval_ms: u32,
    /// Easing curve for every geometry transition.
    pub easing: EasingFunction,
    /// How long a blink stays closed.
    pub blink_duration_ms: u32,
    /// Lower bound of the gap between automatic blinks.
    pub auto_blink_min_ms: u32,
    /// Upper bound (exclusive) of the gap between automatic blinks.
    pub auto_blink_max_ms: u32,
    /// Whether auto-blink interrupts the darting scared eyes.
    pub blink_while_scared: bool,
    /// Lower bound of the gap between idle glances.
    pub idle_min_ms: u32,
    /// Upper bound (exclusive) of the gap between idle glances.
    pub idle_max_ms: u32,
    /// How long an idle glance is held.
    pub idle_hold_ms: u32,
    /// Duration of the glance transition, each way.
    pub idle_transition_ms: u32,
    /// How often jitter offsets are re-rolled.
    pub jitter_interval_ms: u32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            frame_interval_ms: 50,
            easing: EasingFunction::CubicInOut,
            blink_duration_ms: 150,
            auto_blink_min_ms: 2500,
            auto_blink_max_ms: 7000,
            blink_while_scared: true,
            idle_min_ms: 3000,
            idle_max_ms: 6000,
            idle_hold_ms: 1000,
            idle_transition_ms: 400,
            jitter_interval_ms: 50,
        }
    }
}
