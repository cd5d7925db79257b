//! Per-eye geometry: offset from the eye's screen anchor plus size.

use std::ops::{Index, IndexMut};

use glam::Vec2;

/// Which eye. Left is index 0, right is index 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeSide {
    /// Viewer's left eye.
    Left,
    /// Viewer's right eye.
    Right,
}

impl EyeSide {
    /// Both sides in draw order.
    pub const ALL: [EyeSide; 2] = [EyeSide::Left, EyeSide::Right];

    /// Array index of this side.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            EyeSide::Left => 0,
            EyeSide::Right => 1,
        }
    }

    /// -1 for the left eye, +1 for the right. Mirrors per-eye decorations.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            EyeSide::Left => -1.0,
            EyeSide::Right => 1.0,
        }
    }
}

/// Rendered shape of one eye relative to its fixed anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeGeometry {
    /// Offset from the anchor (x right, y down).
    pub offset: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl EyeGeometry {
    /// Geometry from raw components.
    #[must_use]
    pub fn new(x_offset: f32, y_offset: f32, width: f32, height: f32) -> Self {
        Self {
            offset: Vec2::new(x_offset, y_offset),
            size: Vec2::new(width, height),
        }
    }

    /// Centered on the anchor with the given size.
    #[must_use]
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Same size, different offset.
    #[must_use]
    pub fn with_offset(self, x_offset: f32, y_offset: f32) -> Self {
        Self {
            offset: Vec2::new(x_offset, y_offset),
            ..self
        }
    }

    /// Component-wise linear interpolation. `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f32) -> Self {
        Self {
            offset: self.offset.lerp(target.offset, t),
            size: self.size.lerp(target.size, t),
        }
    }

    /// Size with negative components clamped to zero.
    #[must_use]
    pub fn drawable_size(&self) -> Vec2 {
        self.size.max(Vec2::ZERO)
    }
}

/// Geometry of both eyes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyePair {
    /// Left eye.
    pub left: EyeGeometry,
    /// Right eye.
    pub right: EyeGeometry,
}

impl EyePair {
    /// Both eyes identical.
    #[must_use]
    pub fn uniform(eye: EyeGeometry) -> Self {
        Self {
            left: eye,
            right: eye,
        }
    }

    /// Distinct left and right geometry.
    #[must_use]
    pub fn new(left: EyeGeometry, right: EyeGeometry) -> Self {
        Self { left, right }
    }

    /// Interpolate each eye independently.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f32) -> Self {
        Self {
            left: self.left.lerp(&target.left, t),
            right: self.right.lerp(&target.right, t),
        }
    }
}

impl Index<EyeSide> for EyePair {
    type Output = EyeGeometry;

    fn index(&self, side: EyeSide) -> &EyeGeometry {
        match side {
            EyeSide::Left => &self.left,
            EyeSide::Right => &self.right,
        }
    }
}

impl IndexMut<EyeSide> for EyePair {
    fn index_mut(&mut self, side: EyeSide) -> &mut EyeGeometry {
        match side {
            EyeSide::Left => &mut self.left,
            EyeSide::Right => &mut self.right,
        }
    }
}
