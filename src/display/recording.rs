//! Display that records command streams instead of drawing.

use super::{Display, DrawCommand};

/// Keeps every presented frame as a list of commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pending: Vec<DrawCommand>,
    frames: Vec<Vec<DrawCommand>>,
}

impl RecordingDisplay {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of presented frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Commands of the most recently presented frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// All presented frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    /// Commands drawn since the last present.
    #[must_use]
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Drop recorded frames, keeping pending commands.
    pub fn clear_history(&mut self) {
        self.frames.clear();
    }
}

impl Display for RecordingDisplay {
    fn draw(&mut self, command: &DrawCommand) {
        self.pending.push(*command);
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_moves_pending_into_a_frame() {
        let mut display = RecordingDisplay::new();
        display.draw(&DrawCommand::Clear);
        assert_eq!(display.pending().len(), 1);
        display.present();
        assert!(display.pending().is_empty());
        assert_eq!(display.frame_count(), 1);
        assert_eq!(display.last_frame(), Some(&[DrawCommand::Clear][..]));
    }

    #[test]
    fn empty_frames_are_still_frames() {
        let mut display = RecordingDisplay::new();
        display.present();
        display.present();
        assert_eq!(display.frame_count(), 2);
        display.clear_history();
        assert_eq!(display.frame_count(), 0);
    }
}
