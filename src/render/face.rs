//! Mouths, eyebrows and sleep bubbles drawn after the eyes.

use glam::{IVec2, Vec2};

use super::{FrameRenderer, FrameView};
use crate::animation::EyeSide;
use crate::display::{Color, Display, DrawCommand};
use crate::emotion::Decoration;

const MOUTH_SIZE: IVec2 = IVec2::new(20, 8);
const MOUTH_GAP: f32 = 8.0;
const SCARED_MOUTH_GAP: f32 = 12.0;
const SCARED_MOUTH_RADIUS: i32 = 5;
const SLEEP_MOUTH_LIFT: i32 = 6;

/// Sleep mouth shape, alternated by snoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SleepMouth {
    /// Small relaxed mouth.
    #[default]
    Unshaped,
    /// Wide flat oval, drawn lifted.
    Oval,
}

impl SleepMouth {
    /// The other shape.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SleepMouth::Unshaped => SleepMouth::Oval,
            SleepMouth::Oval => SleepMouth::Unshaped,
        }
    }

    /// Mouth bounding box.
    #[must_use]
    pub fn size(self) -> IVec2 {
        match self {
            SleepMouth::Unshaped => MOUTH_SIZE,
            SleepMouth::Oval => IVec2::new(28, 6),
        }
    }
}

pub(super) fn draw_decoration<D: Display + ?Sized>(
    display: &mut D,
    decoration: Decoration,
    renderer: &FrameRenderer,
    view: &FrameView<'_>,
) {
    match decoration {
        Decoration::None => {}
        Decoration::Mouth => {
            let shift = view.geometry[EyeSide::Left].offset + view.ambient.as_vec2();
            let center = mouth_anchor(renderer, MOUTH_GAP) + shift;
            lower_half_ellipse(display, center.round().as_ivec2(), MOUTH_SIZE);
        }
        Decoration::ScaredFace => scared_face(display, renderer, view),
        Decoration::SleepFace => {
            let center = IVec2::new(
                renderer.screen.x / 2,
                renderer.screen.y - SLEEP_MOUTH_LIFT + view.ambient.y,
            );
            lower_half_ellipse(display, center, view.sleep_mouth.size());
            for (dx, dy, radius) in [(15, -10, 8), (25, -20, 4)] {
                display.draw(&DrawCommand::Circle {
                    center: center + IVec2::new(dx, dy),
                    radius,
                    color: Color::On,
                });
            }
        }
    }
}

/// Screen-centered point `gap` pixels below the default eye bottom.
fn mouth_anchor(renderer: &FrameRenderer, gap: f32) -> Vec2 {
    Vec2::new(
        (renderer.screen.x / 2) as f32,
        renderer.anchor(EyeSide::Left).y + renderer.eye_height / 2.0 + gap,
    )
}

/// Filled ellipse with its upper half boxed out.
fn lower_half_ellipse<D: Display + ?Sized>(display: &mut D, center: IVec2, size: IVec2) {
    let radii = size / 2;
    display.draw(&DrawCommand::FillEllipse {
        center,
        radii,
        color: Color::On,
    });
    display.draw(&DrawCommand::FillRect {
        top_left: center - radii,
        size: IVec2::new(size.x + 1, radii.y),
        color: Color::Off,
    });
}

fn scared_face<D: Display + ?Sized>(display: &mut D, renderer: &FrameRenderer, view: &FrameView<'_>) {
    let max = renderer.screen - IVec2::ONE;
    let clamp = |p: IVec2| p.max(IVec2::ZERO).min(max);
    for side in EyeSide::ALL {
        let eye = &view.geometry[side];
        let center = renderer.eye_center(side, eye, view.ambient);
        let half = eye.drawable_size().round().as_ivec2() / 2;
        let sign = side.sign() as i32;
        let top = center.y - half.y;
        display.draw(&DrawCommand::Line {
            from: clamp(IVec2::new(center.x + sign * (half.x - 5), top - 5)),
            to: clamp(IVec2::new(center.x - sign * 5, top - 13)),
            color: Color::On,
        });
    }
    let center = mouth_anchor(renderer, SCARED_MOUTH_GAP) + view.geometry[EyeSide::Left].offset;
    display.draw(&DrawCommand::FillDisc {
        center: center.round().as_ivec2(),
        radius: SCARED_MOUTH_RADIUS,
        color: Color::On,
    });
}
