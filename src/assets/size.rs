use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AssetError;

/// Pre-rendered variants, by maximum width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSize {
    Thumbnail,
    Small,
    Medium,
    Large,
}

impl AssetSize {
    pub const ALL: [AssetSize; 4] = [Self::Thumbnail, Self::Small, Self::Medium, Self::Large];

    pub fn name(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn width(self) -> u32 {
        match self {
            Self::Thumbnail => 300,
            Self::Small => 600,
            Self::Medium => 1200,
            Self::Large => 1920,
        }
    }
}

impl fmt::Display for AssetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetSize {
    type Err = AssetError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(text))
            .ok_or_else(|| AssetError::UnknownSize(text.to_string()))
    }
}
