//! Frame composition: turns the current expression into draw commands.
//!
//! Every frame is `Clear`, then either one bitmap or the procedural eyes
//! (shape, brow mask) followed by the face decoration, then `present`.
//! Procedural drawing is table-driven through
//! [`EmotionDescriptor`](crate::emotion::EmotionDescriptor).

mod bitmap;
mod eyes;
mod face;

use glam::{IVec2, Vec2};

pub use bitmap::BitmapCursor;
pub use face::SleepMouth;

use crate::animation::{EyeGeometry, EyePair, EyeSide};
use crate::display::{Display, DrawCommand};
use crate::emotion::Emotion;
use crate::options::{BitmapAnimation, Profile};

/// Snapshot of everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Emotion being drawn.
    pub emotion: Emotion,
    /// Current interpolated geometry.
    pub geometry: &'a EyePair,
    /// Jitter, snore bob and pat shake, added to every eye and mouth.
    pub ambient: IVec2,
    /// Heart size multiplier.
    pub heartbeat_scale: f32,
    /// Sleep mouth shape.
    pub sleep_mouth: SleepMouth,
    /// Tick time, for bitmap frame pacing.
    pub now_ms: u64,
}

/// Draws frames for one profile's screen and eye layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRenderer {
    screen: IVec2,
    anchors: [Vec2; 2],
    eye_height: f32,
    corner_radius: f32,
}

impl FrameRenderer {
    /// Renderer laid out for `profile`.
    #[must_use]
    pub fn new(profile: &Profile) -> Self {
        let anchor = |side| profile.eyes.anchor(&profile.screen, side);
        Self {
            screen: IVec2::new(
                profile.screen.width as i32,
                profile.screen.height as i32,
            ),
            anchors: [anchor(EyeSide::Left), anchor(EyeSide::Right)],
            eye_height: profile.eyes.height,
            corner_radius: profile.eyes.corner_radius,
        }
    }

    /// Fixed screen anchor of one eye.
    #[must_use]
    pub fn anchor(&self, side: EyeSide) -> Vec2 {
        self.anchors[side.index()]
    }

    /// Pixel center of one eye after offsets.
    #[must_use]
    pub fn eye_center(&self, side: EyeSide, eye: &EyeGeometry, ambient: IVec2) -> IVec2 {
        (self.anchor(side) + eye.offset + ambient.as_vec2())
            .round()
            .as_ivec2()
    }

    /// Draw one full frame and present it.
    ///
    /// When `bitmap` is set the frame is a single bitmap command and
    /// `cursor` advances at the set's frame rate.
    pub fn render<D: Display + ?Sized>(
        &self,
        display: &mut D,
        view: &FrameView<'_>,
        bitmap: Option<&BitmapAnimation>,
        cursor: &mut BitmapCursor,
    ) {
        display.draw(&DrawCommand::Clear);
        match bitmap {
            Some(animation) => {
                cursor.advance(view.now_ms, animation.frame_count, animation.frame_ms);
                // Still images tremble with the emotion's jitter.
                let origin = if animation.is_still() {
                    view.ambient
                } else {
                    IVec2::ZERO
                };
                display.draw(&DrawCommand::Bitmap {
                    emotion: view.emotion,
                    frame: cursor.frame(),
                    origin,
                });
            }
            None => self.draw_procedural(display, view),
        }
        display.present();
    }

    fn draw_procedural<D: Display + ?Sized>(&self, display: &mut D, view: &FrameView<'_>) {
        let descriptor = view.emotion.descriptor();
        for side in EyeSide::ALL {
            let eye = &view.geometry[side];
            let center = self.eye_center(side, eye, view.ambient);
            let size = eye.drawable_size().round().as_ivec2();
            eyes::draw_eye(
                display,
                descriptor.shape,
                side,
                center,
                size,
                self.corner_radius,
                view.heartbeat_scale,
            );
            if let Some(brow) = descriptor.brow {
                eyes::draw_brow(display, brow, side, center, size);
            }
        }
        face::draw_decoration(display, descriptor.decoration, self, view);
    }
}
