//! Procedural eye shapes and brow masks.

use glam::IVec2;

use crate::animation::EyeSide;
use crate::display::{Color, Display, DrawCommand};
use crate::emotion::{BrowMask, EyeShape};

const SLEEPY_ARC_THICKNESS: i32 = 3;

/// Corner radius clamped to the box, so thin eyes stay drawable.
pub(super) fn rounded_radius(corner_radius: f32, size: IVec2) -> i32 {
    (corner_radius.round() as i32)
        .min(size.x / 2)
        .min(size.y / 2)
        .max(0)
}

pub(super) fn draw_eye<D: Display + ?Sized>(
    display: &mut D,
    shape: EyeShape,
    side: EyeSide,
    center: IVec2,
    size: IVec2,
    corner_radius: f32,
    heartbeat_scale: f32,
) {
    let top_left = center - size / 2;
    match shape {
        EyeShape::RoundedRect => {
            rounded_box(display, top_left, size, corner_radius);
        }
        EyeShape::HalfLidded => {
            rounded_box(display, top_left, size, corner_radius);
            display.draw(&DrawCommand::FillRect {
                top_left: IVec2::new(top_left.x, center.y),
                size: IVec2::new(size.x, size.y - size.y / 2),
                color: Color::Off,
            });
        }
        EyeShape::Ring => {
            let outer = size.x / 2;
            let inner = (outer - 2).max(1);
            for (radius, color) in [(outer, Color::On), (inner, Color::Off), (inner / 2, Color::On)] {
                display.draw(&DrawCommand::FillDisc { center, radius, color });
            }
        }
        EyeShape::Line => display.draw(&DrawCommand::HLine {
            start: IVec2::new(top_left.x, center.y),
            width: size.x,
            color: Color::On,
        }),
        EyeShape::Heart => heart(display, center, size.x, heartbeat_scale),
        EyeShape::Cross => {
            let half = size / 3;
            // Arms on the outer side, tip toward the nose: `>` then `<`.
            let arm_x = center.x + side_sign(side) * half.x;
            let tip_x = center.x - side_sign(side) * half.x;
            thick_polyline(
                display,
                &[
                    IVec2::new(arm_x, center.y - half.y),
                    IVec2::new(tip_x, center.y),
                    IVec2::new(arm_x, center.y + half.y),
                ],
            );
        }
        EyeShape::Chevron => {
            let half = size / 3;
            thick_polyline(
                display,
                &[
                    IVec2::new(center.x - half.x, center.y + half.y / 2),
                    IVec2::new(center.x, center.y - half.y / 2),
                    IVec2::new(center.x + half.x, center.y + half.y / 2),
                ],
            );
        }
        EyeShape::SleepyArc => {
            let radius = (size.x / 2).max(2);
            display.draw(&DrawCommand::FillDisc {
                center,
                radius,
                color: Color::On,
            });
            display.draw(&DrawCommand::FillDisc {
                center,
                radius: (radius - SLEEPY_ARC_THICKNESS).max(0),
                color: Color::Off,
            });
            display.draw(&DrawCommand::FillRect {
                top_left: center - IVec2::splat(radius),
                size: IVec2::new(2 * radius + 1, radius + 1),
                color: Color::Off,
            });
        }
    }
}

/// Black triangle over the top corner of one eye.
pub(super) fn draw_brow<D: Display + ?Sized>(
    display: &mut D,
    brow: BrowMask,
    side: EyeSide,
    center: IVec2,
    size: IVec2,
) {
    let top = center.y - size.y / 2 - 1;
    let depth = size.y * 2 / 5;
    let left = center.x - size.x / 2 - 1;
    let right = center.x + size.x / 2 + 1;
    let (outer_x, inner_x) = match side {
        EyeSide::Left => (left, right),
        EyeSide::Right => (right, left),
    };
    let low_x = match brow {
        BrowMask::Sad => outer_x,
        BrowMask::Angry => inner_x,
    };
    display.draw(&DrawCommand::FillTriangle {
        points: [
            IVec2::new(outer_x, top),
            IVec2::new(inner_x, top),
            IVec2::new(low_x, top + depth),
        ],
        color: Color::Off,
    });
}

fn rounded_box<D: Display + ?Sized>(display: &mut D, top_left: IVec2, size: IVec2, corner_radius: f32) {
    display.draw(&DrawCommand::FillRoundRect {
        top_left,
        size,
        radius: rounded_radius(corner_radius, size),
        color: Color::On,
    });
}

fn heart<D: Display + ?Sized>(display: &mut D, center: IVec2, width: i32, scale: f32) {
    let span = (width as f32 * scale).round() as i32;
    if span <= 0 {
        return;
    }
    let r = (span / 4).max(1);
    let lobe_y = center.y - r / 2;
    for x in [center.x - r, center.x + r] {
        display.draw(&DrawCommand::FillDisc {
            center: IVec2::new(x, lobe_y),
            radius: r,
            color: Color::On,
        });
    }
    display.draw(&DrawCommand::FillTriangle {
        points: [
            IVec2::new(center.x - 2 * r, lobe_y),
            IVec2::new(center.x + 2 * r, lobe_y),
            IVec2::new(center.x, lobe_y + 2 * r),
        ],
        color: Color::On,
    });
}

/// Three-pixel-thick strokes through consecutive points.
fn thick_polyline<D: Display + ?Sized>(display: &mut D, points: &[IVec2]) {
    for pair in points.windows(2) {
        for dy in -1..=1 {
            let shift = IVec2::new(0, dy);
            display.draw(&DrawCommand::Line {
                from: pair[0] + shift,
                to: pair[1] + shift,
                color: Color::On,
            });
        }
    }
}

fn side_sign(side: EyeSide) -> i32 {
    side.sign() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;

    fn shape(shape: EyeShape, side: EyeSide, size: IVec2) -> Vec<DrawCommand> {
        let mut display = RecordingDisplay::new();
        draw_eye(&mut display, shape, side, IVec2::new(32, 24), size, 12.0, 1.0);
        display.pending().to_vec()
    }

    #[test]
    fn radius_never_exceeds_half_side() {
        assert_eq!(rounded_radius(12.0, IVec2::new(38, 42)), 12);
        assert_eq!(rounded_radius(12.0, IVec2::new(38, 8)), 4);
        assert_eq!(rounded_radius(12.0, IVec2::new(6, 42)), 3);
        assert_eq!(rounded_radius(12.0, IVec2::ZERO), 0);
    }

    #[test]
    fn ring_is_three_discs() {
        let commands = shape(EyeShape::Ring, EyeSide::Left, IVec2::new(27, 29));
        let radii: Vec<(i32, Color)> = commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillDisc { radius, color, .. } => Some((radius, color)),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![(13, Color::On), (11, Color::Off), (5, Color::On)]);
    }

    #[test]
    fn line_spans_eye_width() {
        let commands = shape(EyeShape::Line, EyeSide::Right, IVec2::new(38, 42));
        assert_eq!(
            commands,
            vec![DrawCommand::HLine {
                start: IVec2::new(13, 24),
                width: 38,
                color: Color::On,
            }]
        );
    }

    #[test]
    fn sleepy_arc_boxes_out_upper_half() {
        let commands = shape(EyeShape::SleepyArc, EyeSide::Left, IVec2::new(38, 19));
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::FillRect {
                top_left: IVec2::new(32 - 19, 24 - 19),
                size: IVec2::new(39, 20),
                color: Color::Off,
            })
        );
    }

    #[test]
    fn cross_points_toward_the_nose() {
        let tip = |side| {
            shape(EyeShape::Cross, side, IVec2::new(38, 42))
                .iter()
                .find_map(|c| match *c {
                    DrawCommand::Line { to, .. } if to.y == 24 => Some(to.x),
                    _ => None,
                })
        };
        assert_eq!(tip(EyeSide::Left), Some(32 + 12));
        assert_eq!(tip(EyeSide::Right), Some(32 - 12));
    }

    #[test]
    fn heart_scales_with_heartbeat() {
        let width_at = |scale| {
            let mut display = RecordingDisplay::new();
            draw_eye(
                &mut display,
                EyeShape::Heart,
                EyeSide::Left,
                IVec2::new(32, 24),
                IVec2::new(38, 42),
                12.0,
                scale,
            );
            display.pending().iter().find_map(|c| match *c {
                DrawCommand::FillDisc { radius, .. } => Some(radius),
                _ => None,
            })
        };
        assert!(width_at(1.2) > width_at(0.8));
    }

    #[test]
    fn brow_masks_mirror_between_eyes() {
        let low_corner = |brow, side| {
            let mut display = RecordingDisplay::new();
            draw_brow(&mut display, brow, side, IVec2::new(32, 24), IVec2::new(38, 34));
            match display.pending().first() {
                Some(DrawCommand::FillTriangle { points, color: Color::Off }) => points[2].x,
                other => panic!("unexpected {other:?}"),
            }
        };
        // Sad droops at the outer corners, angry at the inner ones.
        assert_eq!(low_corner(BrowMask::Sad, EyeSide::Left), 32 - 19 - 1);
        assert_eq!(low_corner(BrowMask::Sad, EyeSide::Right), 32 + 19 + 1);
        assert_eq!(low_corner(BrowMask::Angry, EyeSide::Left), 32 + 19 + 1);
        assert_eq!(low_corner(BrowMask::Angry, EyeSide::Right), 32 - 19 - 1);
    }
}
