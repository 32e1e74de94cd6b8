use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_SIZE: u32 = 128;
pub const DEFAULT_ROUNDED: u32 = 0;

fn default_size() -> u32 {
    DEFAULT_SIZE
}

/// What to draw. `name` seeds the gradient and the accessibility label,
/// `text` is the caption (empty for none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarOptions {
    pub name: String,
    pub text: String,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default)]
    pub rounded: u32,
}

impl AvatarOptions {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            size: DEFAULT_SIZE,
            rounded: DEFAULT_ROUNDED,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_rounded(mut self, rounded: u32) -> Self {
        self.rounded = rounded;
        self
    }

    /// Parses a JSON options object, e.g. `{"name": "John Doe", "text": "JD"}`.
    /// Negative or fractional sizes fail here.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Any `rounded` is fine; SVG clamps radii to half the canvas.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidSize(self.size));
        }
        Ok(())
    }
}
