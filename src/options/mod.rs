//! Tunable constants grouped into profiles, with TOML preset support.
//!
//! A [`Profile`] is one product variant: screen size, eye geometry, timings,
//! behavior constants, and which emotions are drawn from bitmap sets instead
//! of procedurally. Two profiles are built in; others can be loaded from TOML.

mod behavior;
mod bitmaps;
mod eyes;
mod screen;
mod timing;

use std::path::Path;

pub use behavior::BehaviorOptions;
pub use bitmaps::BitmapAnimation;
pub use eyes::EyeOptions;
use schemars::JsonSchema;
pub use screen::ScreenOptions;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::emotion::Emotion;
use crate::error::EyesError;
use crate::util::easing::EasingFunction;

/// Top-level profile. All sub-structs use `#[serde(default)]` so partial TOML
/// files (e.g. only overriding `[timing]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Profile {
    /// Profile name, for logs.
    pub name: String,
    /// Screen dimensions.
    pub screen: ScreenOptions,
    /// Default eye geometry.
    pub eyes: EyeOptions,
    /// Frame pacing and scheduling.
    pub timing: TimingOptions,
    /// Behavior constants.
    pub behavior: BehaviorOptions,
    /// Emotions drawn from bitmap sets.
    pub bitmaps: Vec<BitmapAnimation>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::ride_buddy()
    }
}

impl Profile {
    /// Handlebar companion: 20 fps, cubic easing, bitmap sets for crying,
    /// shy, driving, happy and battery plus static angry and love images.
    #[must_use]
    pub fn ride_buddy() -> Self {
        Self {
            name: "ride_buddy".to_owned(),
            screen: ScreenOptions::default(),
            eyes: EyeOptions::default(),
            timing: TimingOptions::default(),
            behavior: BehaviorOptions::default(),
            bitmaps: vec![
                BitmapAnimation::animated(Emotion::Crying, 24),
                BitmapAnimation::animated(Emotion::Shy, 20),
                BitmapAnimation::animated(Emotion::Driving, 16),
                BitmapAnimation::animated(Emotion::Happy, 18),
                BitmapAnimation::animated(Emotion::Battery, 12),
                BitmapAnimation::still(Emotion::Angry),
                BitmapAnimation::still(Emotion::Love),
            ],
        }
    }

    /// Desk companion: ~60 fps, quadratic easing, procedural happy, love and
    /// angry faces. Scared eyes dart without blinking.
    #[must_use]
    pub fn companion() -> Self {
        Self {
            name: "companion".to_owned(),
            timing: TimingOptions {
                frame_interval_ms: 16,
                easing: EasingFunction::QuadraticInOut,
                jitter_interval_ms: 48,
                blink_while_scared: false,
                ..TimingOptions::default()
            },
            bitmaps: vec![
                BitmapAnimation::animated(Emotion::Crying, 24),
                BitmapAnimation::animated(Emotion::Shy, 20),
                BitmapAnimation::animated(Emotion::Driving, 16),
                BitmapAnimation::animated(Emotion::Battery, 12),
            ],
            ..Self::ride_buddy()
        }
    }

    /// Built-in profile by name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "ride_buddy" | "ride-buddy" => Some(Self::ride_buddy()),
            "companion" => Some(Self::companion()),
            _ => None,
        }
    }

    /// Bitmap set for `emotion`, if this profile draws it from bitmaps.
    #[must_use]
    pub fn bitmap(&self, emotion: Emotion) -> Option<&BitmapAnimation> {
        self.bitmaps.iter().find(|b| b.emotion == emotion)
    }

    /// Whether `emotion` is drawn from a bitmap set.
    #[must_use]
    pub fn is_bitmap(&self, emotion: Emotion) -> bool {
        self.bitmap(emotion).is_some()
    }

    /// Check values the state machine relies on.
    ///
    /// # Errors
    ///
    /// [`EyesError::InvalidProfile`] on a zero frame interval, an empty
    /// screen, an empty random range, a bitmap set without frames, or a
    /// bitmap set for blink.
    pub fn validate(&self) -> Result<(), EyesError> {
        let t = &self.timing;
        let b = &self.behavior;
        if t.frame_interval_ms == 0 {
            return Err(invalid("frame_interval_ms must be positive"));
        }
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(invalid("screen must be non-empty"));
        }
        for (what, min, max) in [
            ("auto_blink", t.auto_blink_min_ms, t.auto_blink_max_ms),
            ("idle", t.idle_min_ms, t.idle_max_ms),
            ("pat_shake", b.pat_shake_min_ms, b.pat_shake_max_ms),
        ] {
            if min >= max {
                return Err(invalid(&format!(
                    "{what} range is empty: {min}..{max}"
                )));
            }
        }
        for (what, (min, max)) in [("glance_x", b.glance_x), ("glance_y", b.glance_y)] {
            if min >= max {
                return Err(invalid(&format!(
                    "{what} range is empty: {min}..{max}"
                )));
            }
        }
        if let Some(empty) = self.bitmaps.iter().find(|b| b.frame_count == 0) {
            return Err(invalid(&format!(
                "bitmap set for {} has no frames",
                empty.emotion
            )));
        }
        if let Some(blink) = self.bitmaps.iter().find(|b| b.emotion == Emotion::Blink) {
            return Err(invalid(&format!(
                "{} cannot be drawn from bitmaps",
                blink.emotion
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML profile. Missing fields use the ride-buddy
    /// defaults.
    ///
    /// # Errors
    ///
    /// [`EyesError::ProfileParse`] for malformed TOML, or any error from
    /// [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, EyesError> {
        let profile: Self = toml::from_str(content)
            .map_err(|e| EyesError::ProfileParse(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the profile is invalid.
    pub fn load(path: &Path) -> Result<Self, EyesError> {
        let content = std::fs::read_to_string(path).map_err(EyesError::Io)?;
        let profile = Self::from_toml_str(&content)?;
        log::info!("Loaded profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    /// Save the profile to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), EyesError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EyesError::ProfileParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EyesError::Io)?;
        }
        std::fs::write(path, content).map_err(EyesError::Io)
    }

    /// Generate JSON Schema describing the profile format.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Profile)
    }
}

fn invalid(msg: &str) -> EyesError {
    EyesError::InvalidProfile(msg.to_owned())
}
