/*
[INPUT]:  Flickr permission levels and image size suffixes
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access a user grants to the application during web authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Delete,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Delete => "delete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static image sizes served by Flickr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "s")]
    SmallSquare,
    #[serde(rename = "t")]
    Thumbnail,
    #[serde(rename = "m")]
    Small,
    /// 500 px on the longest side; the unsuffixed default
    #[serde(rename = "-")]
    Medium500,
    #[serde(rename = "z")]
    Medium640,
    #[serde(rename = "b")]
    Large,
    #[serde(rename = "o")]
    Original,
}

impl ImageSize {
    /// Suffix appended to the image file name, if any
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            ImageSize::SmallSquare => Some("s"),
            ImageSize::Thumbnail => Some("t"),
            ImageSize::Small => Some("m"),
            ImageSize::Medium500 => None,
            ImageSize::Medium640 => Some("z"),
            ImageSize::Large => Some("b"),
            ImageSize::Original => Some("o"),
        }
    }
}
