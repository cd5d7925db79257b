//! Frame pacing for the polled update loop.

/// Fixed-interval frame gate for the cooperative update loop.
///
/// The gate is the only scheduling primitive: callers poll as often as they
/// like and the gate admits at most one frame per interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGate {
    /// Minimum spacing between admitted frames, in milliseconds
    interval_ms: u64,
    /// Timestamp of the last admitted frame (None before the first one)
    last_frame_ms: Option<u64>,
    /// Number of admitted frames
    frames: u64,
}

impl FrameGate {
    /// Create a gate admitting one frame every `interval_ms` (0 = every call).
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_frame_ms: None,
            frames: 0,
        }
    }

    /// Returns true and records the frame if enough time has passed.
    /// The first call is always admitted.
    pub fn try_begin(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_frame_ms {
            if now_ms.saturating_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_frame_ms = Some(now_ms);
        self.frames += 1;
        true
    }

    /// Timestamp of the last admitted frame.
    #[must_use]
    pub fn last_frame_ms(&self) -> Option<u64> {
        self.last_frame_ms
    }

    /// Number of frames admitted so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
