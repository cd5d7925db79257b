//! Eye geometry and the eased transitions that move it.

mod animator;
mod geometry;

pub use animator::{AnimationTransition, Animator};
pub use geometry::{EyeGeometry, EyePair, EyeSide};
