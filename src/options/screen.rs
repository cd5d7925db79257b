use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Physical screen dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Screen", inline)]
#[serde(default)]
pub struct ScreenOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
        }
    }
}
