//! Static behavior descriptors, one per emotion.
//!
//! Both the update path and the renderer read these tables instead of
//! switching on the emotion themselves.

use crate::animation::EyeGeometry;

/// A length expressed as a fraction of the profile's default eye size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Fraction of the default eye width.
    Width(f32),
    /// Fraction of the default eye height.
    Height(f32),
}

impl Extent {
    /// Resolve against the default eye size.
    #[must_use]
    pub fn resolve(self, eye_width: f32, eye_height: f32) -> f32 {
        match self {
            Extent::Width(f) => eye_width * f,
            Extent::Height(f) => eye_height * f,
        }
    }
}

/// Centered target size an emotion animates toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseShape {
    /// Target width.
    pub width: Extent,
    /// Target height.
    pub height: Extent,
}

impl BaseShape {
    /// Default-size eye.
    pub const DEFAULT: BaseShape = BaseShape::scaled(1.0, 1.0);

    /// Width and height as fractions of the default width and height.
    #[must_use]
    pub const fn scaled(width: f32, height: f32) -> Self {
        Self {
            width: Extent::Width(width),
            height: Extent::Height(height),
        }
    }

    /// Centered geometry for a profile's default eye size.
    #[must_use]
    pub fn geometry(&self, eye_width: f32, eye_height: f32) -> EyeGeometry {
        EyeGeometry::centered(
            self.width.resolve(eye_width, eye_height),
            self.height.resolve(eye_width, eye_height),
        )
    }
}

/// How one eye is drawn procedurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeShape {
    /// Filled rounded rectangle.
    RoundedRect,
    /// Rounded rectangle with its lower half masked off.
    HalfLidded,
    /// White disc, black inner disc, white pupil.
    Ring,
    /// Horizontal line across the eye's width.
    Line,
    /// Two discs and a triangle, scaled by the heartbeat.
    Heart,
    /// Thick `>` on the left eye and `<` on the right.
    Cross,
    /// Thick `^`.
    Chevron,
    /// Ring with its upper half boxed out, leaving a `U`.
    SleepyArc,
}

/// Triangular black mask cut from the top of each eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowMask {
    /// Drooping toward the outer corners.
    Sad,
    /// Slanting down toward the nose.
    Angry,
}

/// Face features drawn after both eyes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Nothing.
    None,
    /// Half-ellipse smile under the eyes.
    Mouth,
    /// Raised eyebrows and a small round mouth.
    ScaredFace,
    /// Toggling mouth and sleep bubbles.
    SleepFace,
}

/// Continuous per-tick behavior while the emotion is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickBehavior {
    /// No continuous motion.
    Still,
    /// Periodic small glances away and back.
    IdleGlance,
    /// Sinusoidal scale pulse.
    Heartbeat,
    /// New quick glance whenever the previous one settles.
    Dart,
    /// The left/neutral/right phase cycle.
    Distracted,
    /// Mouth toggle with a small vertical bob.
    Snore,
    /// Timed side-to-side shake, then revert.
    Pat,
}

/// Everything the state machine and renderer need to know about an emotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionDescriptor {
    /// Geometry to animate toward on entry. `None` keeps the eyes as they are.
    pub base: Option<BaseShape>,
    /// Entry transition duration (0 = instant).
    pub transition_ms: u32,
    /// Procedural eye shape.
    pub shape: EyeShape,
    /// Optional brow mask cut from each eye.
    pub brow: Option<BrowMask>,
    /// Face decoration.
    pub decoration: Decoration,
    /// Continuous behavior.
    pub behavior: TickBehavior,
    /// Whether auto-blink may interrupt this emotion when it is drawn
    /// procedurally.
    pub auto_blink: bool,
    /// Jitter magnitude in pixels (0 = none).
    pub jitter: i32,
}

impl EmotionDescriptor {
    const fn plain(transition_ms: u32) -> Self {
        Self {
            base: Some(BaseShape::DEFAULT),
            transition_ms,
            shape: EyeShape::RoundedRect,
            brow: None,
            decoration: Decoration::None,
            behavior: TickBehavior::Still,
            auto_blink: true,
            jitter: 0,
        }
    }
}

pub(super) static NEUTRAL: EmotionDescriptor = EmotionDescriptor {
    decoration: Decoration::Mouth,
    behavior: TickBehavior::IdleGlance,
    ..EmotionDescriptor::plain(150)
};

pub(super) static BLINK: EmotionDescriptor = EmotionDescriptor {
    base: None,
    transition_ms: 0,
    shape: EyeShape::Line,
    auto_blink: false,
    ..EmotionDescriptor::plain(0)
};

pub(super) static HAPPY: EmotionDescriptor = EmotionDescriptor {
    shape: EyeShape::Chevron,
    decoration: Decoration::Mouth,
    ..EmotionDescriptor::plain(200)
};

pub(super) static SAD: EmotionDescriptor = EmotionDescriptor {
    base: Some(BaseShape::scaled(1.0, 0.8)),
    brow: Some(BrowMask::Sad),
    jitter: 1,
    ..EmotionDescriptor::plain(300)
};

pub(super) static ANGRY: EmotionDescriptor = EmotionDescriptor {
    base: Some(BaseShape::scaled(1.0, 0.8)),
    brow: Some(BrowMask::Angry),
    jitter: 2,
    ..EmotionDescriptor::plain(300)
};

pub(super) static LOVE: EmotionDescriptor = EmotionDescriptor {
    shape: EyeShape::Heart,
    behavior: TickBehavior::Heartbeat,
    jitter: 1,
    ..EmotionDescriptor::plain(300)
};

pub(super) static SCARED: EmotionDescriptor = EmotionDescriptor {
    base: Some(BaseShape::scaled(0.7, 0.7)),
    shape: EyeShape::Ring,
    decoration: Decoration::ScaredFace,
    behavior: TickBehavior::Dart,
    ..EmotionDescriptor::plain(150)
};

pub(super) static SLEEP: EmotionDescriptor = EmotionDescriptor {
    base: Some(BaseShape {
        width: Extent::Width(1.0),
        height: Extent::Width(0.5),
    }),
    shape: EyeShape::SleepyArc,
    decoration: Decoration::SleepFace,
    behavior: TickBehavior::Snore,
    ..EmotionDescriptor::plain(200)
};

pub(super) static DISTRACTED: EmotionDescriptor = EmotionDescriptor {
    base: None,
    behavior: TickBehavior::Distracted,
    auto_blink: false,
    ..EmotionDescriptor::plain(0)
};

pub(super) static PAT: EmotionDescriptor = EmotionDescriptor {
    shape: EyeShape::Cross,
    behavior: TickBehavior::Pat,
    ..EmotionDescriptor::plain(150)
};

pub(super) static SERIOUS: EmotionDescriptor = EmotionDescriptor {
    base: Some(BaseShape::scaled(1.0, 0.8)),
    shape: EyeShape::HalfLidded,
    ..EmotionDescriptor::plain(250)
};

/// Driving, Shy, Crying and Battery are bitmap-only in both built-in
/// profiles. Without assets they fall back to plain eyes.
pub(super) static BITMAP_FALLBACK: EmotionDescriptor =
    EmotionDescriptor::plain(150);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_height_follows_width() {
        let g = SLEEP.base.map(|b| b.geometry(38.0, 42.0));
        assert_eq!(g, Some(EyeGeometry::centered(38.0, 19.0)));
    }

    #[test]
    fn scared_is_reduced() {
        let g = SCARED.base.map(|b| b.geometry(38.0, 42.0));
        assert_eq!(g, Some(EyeGeometry::centered(38.0 * 0.7, 42.0 * 0.7)));
    }

    #[test]
    fn blink_keeps_geometry() {
        assert!(BLINK.base.is_none());
        assert!(!BLINK.auto_blink);
    }
}
