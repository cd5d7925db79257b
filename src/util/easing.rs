//! Easing functions for eye-geometry interpolation.
//!
//! Every curve maps normalized progress in [0, 1] to eased progress in
//! [0, 1], starts at 0, ends at 1 and never decreases. The two in-out curves
//! are symmetric around (0.5, 0.5).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in-out: `2t²` below the midpoint, mirrored above.
    QuadraticInOut,
    /// Cubic ease-in-out: `4t³` below the midpoint, `1 - (-2t+2)³/2` above.
    CubicInOut,
}

impl EasingFunction {
    /// Default curve, used by the ride-buddy profile.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 3] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticInOut,
        EasingFunction::CubicInOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?} at 0");
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_midpoint_is_half() {
        for easing in ALL {
            assert!((easing.evaluate(0.5) - 0.5).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        for easing in ALL {
            let mut prev = easing.evaluate(0.0);
            for step in 1..=1000 {
                let value = easing.evaluate(step as f32 / 1000.0);
                assert!(
                    value >= prev,
                    "{easing:?} decreased at step {step}: {prev} -> {value}"
                );
                prev = value;
            }
        }
    }

    #[test]
    fn test_continuous_at_midpoint() {
        for easing in ALL {
            let below = easing.evaluate(0.5 - 1e-4);
            let above = easing.evaluate(0.5);
            assert!((above - below).abs() < 1e-3, "{easing:?} jumps at 0.5");
        }
    }

    #[test]
    fn test_cubic_shape() {
        let cubic = EasingFunction::CubicInOut;
        // Slow start: 4 * 0.25³ = 0.0625
        assert!((cubic.evaluate(0.25) - 0.0625).abs() < 1e-6);
        // Symmetric slow finish
        assert!((cubic.evaluate(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_shape() {
        let quad = EasingFunction::QuadraticInOut;
        assert!((quad.evaluate(0.25) - 0.125).abs() < 1e-6);
        assert!((quad.evaluate(0.75) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        for easing in ALL {
            assert_eq!(easing.evaluate(-0.5), 0.0);
            assert!((easing.evaluate(1.5) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_default_is_cubic() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }
}
