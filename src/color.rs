use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CanvasError;

/// An opaque RGB color, stored and persisted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Color32);

impl HexColor {
    /// Light green, the palette's primary swatch
    pub const PRIMARY: HexColor = HexColor(Color32::from_rgb(0x74, 0xe7, 0x87));
    /// Blue, the default left-click color
    pub const SECONDARY: HexColor = HexColor(Color32::from_rgb(0x66, 0xb3, 0xff));
    /// Red, the default right-click color
    pub const TERTIARY: HexColor = HexColor(Color32::from_rgb(0xff, 0x66, 0x66));

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Color32::from_rgb(r, g, b))
    }

    pub fn color32(&self) -> Color32 {
        self.0
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.0.r(), self.0.g(), self.0.b()]
    }
}

impl From<Color32> for HexColor {
    fn from(color: Color32) -> Self {
        // Alpha is dropped, drawing colors are always opaque
        Self(Color32::from_rgb(color.r(), color.g(), color.b()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for HexColor {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.starts_with('#') || !matches!(trimmed.len(), 4 | 7) {
            return Err(CanvasError::StorageUnavailable(format!(
                "not a #rgb or #rrggbb color: {s:?}"
            )));
        }
        Color32::from_hex(trimmed)
            .map(HexColor::from)
            .map_err(|e| CanvasError::StorageUnavailable(format!("bad color {s:?}: {e:?}")))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
