//! Frame cursor for bitmap-driven emotions.

/// Which frame of a bitmap set is showing, and since when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitmapCursor {
    frame: usize,
    last_frame_ms: u64,
}

impl BitmapCursor {
    /// Restart at frame 0.
    pub fn reset(&mut self, now_ms: u64) {
        self.frame = 0;
        self.last_frame_ms = now_ms;
    }

    /// Current frame index.
    #[must_use]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// When the current frame started.
    #[must_use]
    pub fn last_frame_ms(&self) -> u64 {
        self.last_frame_ms
    }

    /// Step one frame if `frame_ms` has elapsed, wrapping at `frame_count`.
    pub fn advance(&mut self, now_ms: u64, frame_count: usize, frame_ms: u32) {
        if frame_count == 0 {
            self.frame = 0;
            return;
        }
        if now_ms.saturating_sub(self.last_frame_ms) < u64::from(frame_ms) {
            self.frame %= frame_count;
            return;
        }
        self.last_frame_ms = now_ms;
        self.frame = (self.frame + 1) % frame_count;
    }
}
