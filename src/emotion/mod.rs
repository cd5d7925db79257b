//! The closed set of expressions and their behavior descriptors.

mod descriptor;

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use descriptor::{
    BaseShape, BrowMask, Decoration, EmotionDescriptor, EyeShape, Extent,
    TickBehavior,
};

/// One mutually exclusive expressive state.
///
/// Serde uses `snake_case` names so profiles stay readable:
/// ```toml
/// [[bitmaps]]
/// emotion = "crying"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Resting eyes with occasional glances.
    #[default]
    Neutral,
    /// Transient closed eyes; resolves back to the previous emotion.
    Blink,
    /// Smiling `^` eyes.
    Happy,
    /// Drooping brows with a slight tremble.
    Sad,
    /// Slanted brows with a strong tremble.
    Angry,
    /// Beating hearts.
    Love,
    /// Small ringed eyes darting around.
    Scared,
    /// Closed `U` eyes, snoring.
    Sleep,
    /// Looking off to one side, then the other.
    Distracted,
    /// Driving animation.
    Driving,
    /// Shy animation.
    Shy,
    /// Crying animation.
    Crying,
    /// Being patted: `><` eyes shaking side to side.
    Pat,
    /// Half-lidded stare.
    Serious,
    /// Low battery animation.
    Battery,
}

impl Emotion {
    /// Every emotion.
    pub const ALL: [Emotion; 15] = [
        Emotion::Neutral,
        Emotion::Blink,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Love,
        Emotion::Scared,
        Emotion::Sleep,
        Emotion::Distracted,
        Emotion::Driving,
        Emotion::Shy,
        Emotion::Crying,
        Emotion::Pat,
        Emotion::Serious,
        Emotion::Battery,
    ];

    /// Static behavior descriptor used when the emotion is drawn
    /// procedurally.
    #[must_use]
    pub fn descriptor(self) -> &'static EmotionDescriptor {
        match self {
            Emotion::Neutral => &descriptor::NEUTRAL,
            Emotion::Blink => &descriptor::BLINK,
            Emotion::Happy => &descriptor::HAPPY,
            Emotion::Sad => &descriptor::SAD,
            Emotion::Angry => &descriptor::ANGRY,
            Emotion::Love => &descriptor::LOVE,
            Emotion::Scared => &descriptor::SCARED,
            Emotion::Sleep => &descriptor::SLEEP,
            Emotion::Distracted => &descriptor::DISTRACTED,
            Emotion::Pat => &descriptor::PAT,
            Emotion::Serious => &descriptor::SERIOUS,
            Emotion::Driving
            | Emotion::Shy
            | Emotion::Crying
            | Emotion::Battery => &descriptor::BITMAP_FALLBACK,
        }
    }

    /// Lowercase name, matching the serde form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Blink => "blink",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Love => "love",
            Emotion::Scared => "scared",
            Emotion::Sleep => "sleep",
            Emotion::Distracted => "distracted",
            Emotion::Driving => "driving",
            Emotion::Shy => "shy",
            Emotion::Crying => "crying",
            Emotion::Pat => "pat",
            Emotion::Serious => "serious",
            Emotion::Battery => "battery",
        }
    }

    /// Parse a lowercase name. Accepts `cry` as an alias of `crying`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "cry" {
            return Some(Emotion::Crying);
        }
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
