use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// A full-frame bitmap set that replaces procedural drawing for an emotion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct BitmapAnimation {
    /// Emotion rendered by this set.
    pub emotion: Emotion,
    /// Number of frames in the host's asset table. 1 = static image.
    pub frame_count: usize,
    /// Time between frames.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u32,
}

fn default_frame_ms() -> u32 {
    33
}

impl BitmapAnimation {
    /// Animated set at ~30 fps.
    #[must_use]
    pub fn animated(emotion: Emotion, frame_count: usize) -> Self {
        Self {
            emotion,
            frame_count,
            frame_ms: default_frame_ms(),
        }
    }

    /// Single static image.
    #[must_use]
    pub fn still(emotion: Emotion) -> Self {
        Self::animated(emotion, 1)
    }

    /// Whether the set is a single image. Static images pick up the
    /// emotion's jitter; animated sets are drawn at the origin.
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.frame_count <= 1
    }
}
