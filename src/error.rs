//! Crate-level error types.
//!
//! The animation core is infallible; errors only come from loading profiles
//! and bitmap assets.

use std::fmt;

/// Errors produced by the buddy-eyes crate.
#[derive(Debug)]
pub enum EyesError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML profile parsing/serialization failure.
    ProfileParse(String),
    /// A profile parsed but its values are unusable.
    InvalidProfile(String),
    /// Bitmap data does not match its declared size.
    InvalidBitmap(String),
}

impl fmt::Display for EyesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ProfileParse(msg) => {
                write!(f, "profile parse error: {msg}")
            }
            Self::InvalidProfile(msg) => write!(f, "invalid profile: {msg}"),
            Self::InvalidBitmap(msg) => write!(f, "invalid bitmap: {msg}"),
        }
    }
}

impl std::error::Error for EyesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EyesError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
