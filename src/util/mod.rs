//! Shared utilities: easing curves and frame gating.

pub mod easing;
pub mod frame_timing;
