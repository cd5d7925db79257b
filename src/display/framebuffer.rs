//! Software 1-bit framebuffer.
//!
//! Double-buffered: commands draw into the back buffer and
//! [`present`](Display::present) copies it to the front. Everything is
//! clipped to the screen, so off-screen coordinates are harmless.

use std::fmt::Write as _;

use glam::IVec2;

use super::{BitmapTable, Color, Display, DrawCommand};
use crate::emotion::Emotion;

/// In-memory monochrome display.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    back: Vec<bool>,
    front: Vec<bool>,
    bitmaps: BitmapTable,
    presents: u64,
}

impl Framebuffer {
    /// Blank framebuffer of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width: width as i32,
            height: height as i32,
            back: vec![false; len],
            front: vec![false; len],
            bitmaps: BitmapTable::new(),
            presents: 0,
        }
    }

    /// Attach bitmap frames used for [`DrawCommand::Bitmap`].
    #[must_use]
    pub fn with_bitmaps(mut self, bitmaps: BitmapTable) -> Self {
        self.bitmaps = bitmaps;
        self
    }

    /// Screen width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Screen height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// How many times the buffer was presented.
    #[must_use]
    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// Whether a presented pixel is lit. Out-of-range reads are dark.
    #[must_use]
    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.front[i])
    }

    /// Number of lit pixels on screen.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.front.iter().filter(|&&on| on).count()
    }

    /// Presented frame as text, `#` for lit and `.` for dark.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.front.len() + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.is_on(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// One-line summary, for logs.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "{}x{} frame #{}: {} lit",
            self.width,
            self.height,
            self.presents,
            self.lit_count()
        );
        out
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.back[i] = color == Color::On;
        }
    }

    fn fill_rect(&mut self, top_left: IVec2, size: IVec2, color: Color) {
        let x0 = top_left.x.max(0);
        let y0 = top_left.y.max(0);
        let x1 = (top_left.x + size.x).min(self.width);
        let y1 = (top_left.y + size.y).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, color);
            }
        }
    }

    fn fill_round_rect(
        &mut self,
        top_left: IVec2,
        size: IVec2,
        radius: i32,
        color: Color,
    ) {
        let r = radius.min(size.x.min(size.y) / 2).max(0);
        let left_center = top_left.x + r;
        let right_center = top_left.x + size.x - 1 - r;
        let top_center = top_left.y + r;
        let bottom_center = top_left.y + size.y - 1 - r;
        for y in top_left.y..top_left.y + size.y {
            for x in top_left.x..top_left.x + size.x {
                let dx = if x < left_center {
                    left_center - x
                } else if x > right_center {
                    x - right_center
                } else {
                    0
                };
                let dy = if y < top_center {
                    top_center - y
                } else if y > bottom_center {
                    y - bottom_center
                } else {
                    0
                };
                if dx * dx + dy * dy <= r * r {
                    self.set(x, y, color);
                }
            }
        }
    }

    fn fill_disc(&mut self, center: IVec2, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Midpoint circle outline.
    fn circle(&mut self, center: IVec2, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        let (mut x, mut y) = (radius, 0);
        let mut err = 1 - radius;
        while x >= y {
            for (px, py) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.set(center.x + px, center.y + py, color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Bresenham line, endpoints inclusive.
    fn line(&mut self, from: IVec2, to: IVec2, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);
        loop {
            self.set(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_triangle(&mut self, points: [IVec2; 3], color: Color) {
        let [a, b, c] = points;
        let edge = |p: IVec2, q: IVec2, r: IVec2| {
            (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
        };
        let area = edge(a, b, c);
        if area == 0 {
            self.line(a, b, color);
            self.line(b, c, color);
            return;
        }
        let min = a.min(b).min(c);
        let max = a.max(b).max(c);
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let p = IVec2::new(x, y);
                let w0 = edge(b, c, p);
                let w1 = edge(c, a, p);
                let w2 = edge(a, b, p);
                let inside = if area > 0 {
                    w0 >= 0 && w1 >= 0 && w2 >= 0
                } else {
                    w0 <= 0 && w1 <= 0 && w2 <= 0
                };
                if inside {
                    self.set(x, y, color);
                }
            }
        }
    }

    fn fill_ellipse(&mut self, center: IVec2, radii: IVec2, color: Color) {
        let rx = i64::from(radii.x.max(0));
        let ry = i64::from(radii.y.max(0));
        let limit = rx * rx * ry * ry;
        for dy in -ry..=ry {
            for dx in -rx..=rx {
                if dx * dx * ry * ry + dy * dy * rx * rx <= limit {
                    self.set(
                        center.x + dx as i32,
                        center.y + dy as i32,
                        color,
                    );
                }
            }
        }
    }

    fn blit(&mut self, emotion: Emotion, frame: usize, origin: IVec2) {
        let Some(bitmap) = self.bitmaps.frame(emotion, frame) else {
            log::trace!("no bitmap for {emotion} frame {frame}");
            return;
        };
        let mut lit = Vec::new();
        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                if bitmap.is_set(x, y) {
                    lit.push(IVec2::new(origin.x + x as i32, origin.y + y as i32));
                }
            }
        }
        for p in lit {
            self.set(p.x, p.y, Color::On);
        }
    }
}

impl Display for Framebuffer {
    fn draw(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Clear => self.back.fill(false),
            DrawCommand::FillRect {
                top_left,
                size,
                color,
            } => self.fill_rect(top_left, size, color),
            DrawCommand::FillRoundRect {
                top_left,
                size,
                radius,
                color,
            } => self.fill_round_rect(top_left, size, radius, color),
            DrawCommand::FillDisc {
                center,
                radius,
                color,
            } => self.fill_disc(center, radius, color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => self.circle(center, radius, color),
            DrawCommand::HLine {
                start,
                width,
                color,
            } => {
                for x in start.x..start.x + width.max(0) {
                    self.set(x, start.y, color);
                }
            }
            DrawCommand::Line { from, to, color } => self.line(from, to, color),
            DrawCommand::FillTriangle { points, color } => {
                self.fill_triangle(points, color);
            }
            DrawCommand::FillEllipse {
                center,
                radii,
                color,
            } => self.fill_ellipse(center, radii, color),
            DrawCommand::Bitmap {
                emotion,
                frame,
                origin,
            } => self.blit(emotion, frame, origin),
        }
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.presents += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Bitmap;

    fn draw_and_present(fb: &mut Framebuffer, command: DrawCommand) {
        fb.draw(&DrawCommand::Clear);
        fb.draw(&command);
        fb.present();
    }

    #[test]
    fn nothing_shows_before_present() {
        let mut fb = Framebuffer::new(16, 8);
        fb.draw(&DrawCommand::FillRect {
            top_left: IVec2::ZERO,
            size: IVec2::new(4, 4),
            color: Color::On,
        });
        assert_eq!(fb.lit_count(), 0);
        fb.present();
        assert_eq!(fb.lit_count(), 16);
        assert_eq!(fb.presents(), 1);
    }

    #[test]
    fn rects_are_clipped() {
        let mut fb = Framebuffer::new(8, 8);
        draw_and_present(
            &mut fb,
            DrawCommand::FillRect {
                top_left: IVec2::new(-4, 6),
                size: IVec2::new(8, 8),
                color: Color::On,
            },
        );
        assert_eq!(fb.lit_count(), 4 * 2);
    }

    #[test]
    fn off_color_cuts_masks() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw(&DrawCommand::FillRect {
            top_left: IVec2::ZERO,
            size: IVec2::new(8, 8),
            color: Color::On,
        });
        fb.draw(&DrawCommand::FillRect {
            top_left: IVec2::ZERO,
            size: IVec2::new(8, 4),
            color: Color::Off,
        });
        fb.present();
        assert_eq!(fb.lit_count(), 32);
        assert!(!fb.is_on(0, 0));
        assert!(fb.is_on(0, 7));
    }

    #[test]
    fn round_rect_trims_corners() {
        let mut fb = Framebuffer::new(20, 20);
        draw_and_present(
            &mut fb,
            DrawCommand::FillRoundRect {
                top_left: IVec2::new(0, 0),
                size: IVec2::new(20, 20),
                radius: 6,
                color: Color::On,
            },
        );
        assert!(!fb.is_on(0, 0));
        assert!(fb.is_on(10, 0));
        assert!(fb.is_on(10, 10));
        assert!(fb.lit_count() < 400);
    }

    #[test]
    fn disc_and_circle() {
        let mut fb = Framebuffer::new(32, 32);
        draw_and_present(
            &mut fb,
            DrawCommand::FillDisc {
                center: IVec2::new(16, 16),
                radius: 5,
                color: Color::On,
            },
        );
        assert!(fb.is_on(16, 16));
        assert!(fb.is_on(21, 16));
        assert!(!fb.is_on(22, 16));

        draw_and_present(
            &mut fb,
            DrawCommand::Circle {
                center: IVec2::new(16, 16),
                radius: 5,
                color: Color::On,
            },
        );
        assert!(!fb.is_on(16, 16));
        assert!(fb.is_on(21, 16));
        assert!(fb.is_on(16, 11));
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut fb = Framebuffer::new(16, 16);
        draw_and_present(
            &mut fb,
            DrawCommand::Line {
                from: IVec2::new(1, 2),
                to: IVec2::new(12, 9),
                color: Color::On,
            },
        );
        assert!(fb.is_on(1, 2));
        assert!(fb.is_on(12, 9));
    }

    #[test]
    fn triangle_fills_either_winding() {
        for points in [
            [IVec2::new(0, 0), IVec2::new(10, 0), IVec2::new(0, 10)],
            [IVec2::new(0, 0), IVec2::new(0, 10), IVec2::new(10, 0)],
        ] {
            let mut fb = Framebuffer::new(16, 16);
            draw_and_present(
                &mut fb,
                DrawCommand::FillTriangle {
                    points,
                    color: Color::On,
                },
            );
            assert!(fb.is_on(2, 2));
            assert!(!fb.is_on(9, 9));
        }
    }

    #[test]
    fn ellipse_respects_radii() {
        let mut fb = Framebuffer::new(32, 32);
        draw_and_present(
            &mut fb,
            DrawCommand::FillEllipse {
                center: IVec2::new(16, 16),
                radii: IVec2::new(10, 4),
                color: Color::On,
            },
        );
        assert!(fb.is_on(26, 16));
        assert!(!fb.is_on(16, 21));
        assert!(fb.is_on(16, 20));
    }

    #[test]
    fn hline_draws_width_pixels() {
        let mut fb = Framebuffer::new(16, 4);
        draw_and_present(
            &mut fb,
            DrawCommand::HLine {
                start: IVec2::new(2, 1),
                width: 5,
                color: Color::On,
            },
        );
        assert_eq!(fb.lit_count(), 5);
        assert!(fb.is_on(6, 1));
        assert!(!fb.is_on(7, 1));
    }

    #[test]
    fn bitmap_blit_uses_table() {
        let frame = Bitmap::from_xbm(8, 2, vec![0b0000_0011, 0]).unwrap();
        let table = BitmapTable::new().with(Emotion::Shy, vec![frame]);
        let mut fb = Framebuffer::new(16, 16).with_bitmaps(table);
        draw_and_present(
            &mut fb,
            DrawCommand::Bitmap {
                emotion: Emotion::Shy,
                frame: 0,
                origin: IVec2::new(3, 4),
            },
        );
        assert_eq!(fb.lit_count(), 2);
        assert!(fb.is_on(3, 4));
        assert!(fb.is_on(4, 4));

        // Missing frames draw nothing.
        draw_and_present(
            &mut fb,
            DrawCommand::Bitmap {
                emotion: Emotion::Crying,
                frame: 0,
                origin: IVec2::ZERO,
            },
        );
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn ascii_dump_has_one_row_per_line() {
        let mut fb = Framebuffer::new(4, 2);
        draw_and_present(
            &mut fb,
            DrawCommand::HLine {
                start: IVec2::new(0, 0),
                width: 2,
                color: Color::On,
            },
        );
        assert_eq!(fb.to_ascii(), "##..\n....\n");
        assert!(fb.summary().contains("2 lit"));
    }
}
