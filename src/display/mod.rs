//! Display backend seam: primitive draw commands and buffer presentation.
//!
//! The renderer never touches pixels. It emits [`DrawCommand`]s into a
//! [`Display`] and calls [`Display::present`] once per frame. Hardware
//! drivers implement the trait; [`Framebuffer`] rasterizes in software and
//! [`RecordingDisplay`] keeps the command stream for inspection.

mod bitmap;
mod framebuffer;
mod recording;

use glam::IVec2;

pub use bitmap::{Bitmap, BitmapTable};
pub use framebuffer::Framebuffer;
pub use recording::RecordingDisplay;

use crate::emotion::Emotion;

/// Monochrome draw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Lit pixel.
    On,
    /// Dark pixel, used to cut masks out of lit shapes.
    Off,
}

/// One drawing primitive.
///
/// Coordinates are screen pixels, x right and y down. Sizes and radii are
/// never negative when emitted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Clear the back buffer to [`Color::Off`].
    Clear,
    /// Filled axis-aligned box.
    FillRect {
        /// Top-left corner.
        top_left: IVec2,
        /// Width and height.
        size: IVec2,
        /// Fill color.
        color: Color,
    },
    /// Filled box with rounded corners.
    FillRoundRect {
        /// Top-left corner.
        top_left: IVec2,
        /// Width and height.
        size: IVec2,
        /// Corner radius, at most half the smaller side.
        radius: i32,
        /// Fill color.
        color: Color,
    },
    /// Filled circle.
    FillDisc {
        /// Center point.
        center: IVec2,
        /// Radius.
        radius: i32,
        /// Fill color.
        color: Color,
    },
    /// Circle outline.
    Circle {
        /// Center point.
        center: IVec2,
        /// Radius.
        radius: i32,
        /// Stroke color.
        color: Color,
    },
    /// Horizontal line starting at `start` and extending right.
    HLine {
        /// Leftmost pixel.
        start: IVec2,
        /// Length in pixels.
        width: i32,
        /// Stroke color.
        color: Color,
    },
    /// One-pixel line between two points, inclusive.
    Line {
        /// First endpoint.
        from: IVec2,
        /// Second endpoint.
        to: IVec2,
        /// Stroke color.
        color: Color,
    },
    /// Filled triangle.
    FillTriangle {
        /// Vertices in any winding.
        points: [IVec2; 3],
        /// Fill color.
        color: Color,
    },
    /// Filled axis-aligned ellipse.
    FillEllipse {
        /// Center point.
        center: IVec2,
        /// Horizontal and vertical radii.
        radii: IVec2,
        /// Fill color.
        color: Color,
    },
    /// Full-frame bitmap from the host's asset table.
    Bitmap {
        /// Animation set the frame belongs to.
        emotion: Emotion,
        /// Frame index, always below the set's frame count.
        frame: usize,
        /// Where the bitmap's top-left corner lands.
        origin: IVec2,
    },
}

/// A monochrome display that executes draw commands.
pub trait Display {
    /// Execute one command against the back buffer.
    fn draw(&mut self, command: &DrawCommand);

    /// Show the back buffer.
    fn present(&mut self);
}

impl<D: Display + ?Sized> Display for &mut D {
    fn draw(&mut self, command: &DrawCommand) {
        (**self).draw(command);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn draw(&mut self, command: &DrawCommand) {
        (**self).draw(command);
    }

    fn present(&mut self) {
        (**self).present();
    }
}
