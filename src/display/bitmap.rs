//! Host-supplied bitmap frames in XBM layout.

use rustc_hash::FxHashMap;

use crate::emotion::Emotion;
use crate::error::EyesError;

/// One monochrome image in XBM layout: rows padded to whole bytes, least
/// significant bit is the leftmost pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl Bitmap {
    /// Wrap XBM data, checking the byte count against the size.
    ///
    /// # Errors
    ///
    /// [`EyesError::InvalidBitmap`] when `bits` is not exactly
    /// `ceil(width / 8) * height` bytes.
    pub fn from_xbm(
        width: u32,
        height: u32,
        bits: Vec<u8>,
    ) -> Result<Self, EyesError> {
        let expected = Self::stride(width) * height as usize;
        if bits.len() != expected {
            return Err(EyesError::InvalidBitmap(format!(
                "{width}x{height} needs {expected} bytes, got {}",
                bits.len()
            )));
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    fn stride(width: u32) -> usize {
        (width as usize).div_ceil(8)
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is set. Out-of-range reads are unset.
    #[must_use]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.bits[y as usize * Self::stride(self.width) + x as usize / 8];
        byte & (1 << (x % 8)) != 0
    }
}

/// Bitmap frames per emotion, resolved by the display when it receives a
/// [`DrawCommand::Bitmap`](super::DrawCommand::Bitmap).
#[derive(Debug, Clone, Default)]
pub struct BitmapTable {
    frames: FxHashMap<Emotion, Vec<Bitmap>>,
}

impl BitmapTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the frames for an emotion, replacing any earlier set.
    pub fn insert(&mut self, emotion: Emotion, frames: Vec<Bitmap>) {
        let _replaced = self.frames.insert(emotion, frames);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, emotion: Emotion, frames: Vec<Bitmap>) -> Self {
        self.insert(emotion, frames);
        self
    }

    /// Frame `index` for `emotion`, if present.
    #[must_use]
    pub fn frame(&self, emotion: Emotion, index: usize) -> Option<&Bitmap> {
        self.frames.get(&emotion)?.get(index)
    }

    /// Number of frames registered for `emotion`.
    #[must_use]
    pub fn frame_count(&self, emotion: Emotion) -> usize {
        self.frames.get(&emotion).map_or(0, Vec::len)
    }
}
