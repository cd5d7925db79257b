use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ScreenOptions;
use crate::animation::{EyeGeometry, EyeSide};

/// Default eye shape and placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Eyes", inline)]
#[serde(default)]
pub struct EyeOptions {
    /// Resting eye width.
    pub width: f32,
    /// Resting eye height.
    pub height: f32,
    /// Corner radius of rounded-rectangle eyes.
    pub corner_radius: f32,
    /// How far the eye anchors sit above the vertical center.
    pub anchor_lift: f32,
}

impl Default for EyeOptions {
    fn default() -> Self {
        Self {
            width: 38.0,
            height: 42.0,
            corner_radius: 12.0,
            anchor_lift: 8.0,
        }
    }
}

impl EyeOptions {
    /// Resting geometry: centered at the default size.
    #[must_use]
    pub fn resting(&self) -> EyeGeometry {
        EyeGeometry::centered(self.width, self.height)
    }

    /// Fixed screen anchor of one eye: a quarter of the way in from its edge.
    #[must_use]
    pub fn anchor(&self, screen: &ScreenOptions, side: EyeSide) -> Vec2 {
        let quarter = (screen.width / 4) as f32;
        let x = match side {
            EyeSide::Left => quarter,
            EyeSide::Right => quarter * 3.0,
        };
        Vec2::new(x, (screen.height / 2) as f32 - self.anchor_lift)
    }
}
