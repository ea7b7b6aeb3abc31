use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::view::ZoomLimits;

/// Tunables for drawing and navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct CanvasConfig {
    /// Width of pen strokes and lines, in logical units
    pub pen_width: f32,
    /// Width of erase strokes, independent of the pen width
    pub eraser_width: f32,
    pub zoom: ZoomLimits,
    /// Image drawn beneath every layer
    pub base_map: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            pen_width: 6.0,
            eraser_width: 64.0,
            zoom: ZoomLimits::default(),
            base_map: PathBuf::from("battlemap.png"),
        }
    }
}

impl CanvasConfig {
    /// Reads a JSON config, falling back to defaults if it is missing or malformed
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) => {
                log::info!("No config at {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parses and sanitizes a JSON config. Never fails.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed config: {e}");
                Self::default()
            }
        }
    }

    /// Replaces out-of-range settings with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.zoom.is_valid() {
            log::warn!("Invalid zoom limits {:?}, using {:?}", self.zoom, defaults.zoom);
            self.zoom = defaults.zoom;
        }
        if !(self.pen_width.is_finite() && self.pen_width > 0.0) {
            log::warn!("Invalid pen width {}, using {}", self.pen_width, defaults.pen_width);
            self.pen_width = defaults.pen_width;
        }
        if !(self.eraser_width.is_finite() && self.eraser_width > 0.0) {
            log::warn!("Invalid eraser width {}, using {}", self.eraser_width, defaults.eraser_width);
            self.eraser_width = defaults.eraser_width;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: CanvasConfig = serde_json::from_str(r#"{ "pen_width": 3.0 }"#).unwrap();
        assert_eq!(config.pen_width, 3.0);
        assert_eq!(config.eraser_width, 64.0);
        assert_eq!(config.zoom, ZoomLimits::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = CanvasConfig::load(Path::new("/definitely/not/here/stratmap.json"));
        assert_eq!(config, CanvasConfig::default());
    }

    #[test]
    fn test_inverted_zoom_limits_fall_back() {
        let config = CanvasConfig::from_json(r#"{ "zoom": { "min": 5.0, "max": 0.2, "step": 0.1 } }"#);
        assert_eq!(config.zoom, ZoomLimits::default());
    }

    #[test]
    fn test_zero_step_falls_back_but_keeps_other_fields() {
        let config = CanvasConfig::from_json(r#"{ "pen_width": 4.0, "zoom": { "step": 0.0 } }"#);
        assert_eq!(config.zoom, ZoomLimits::default());
        assert_eq!(config.pen_width, 4.0);
    }

    #[test]
    fn test_bad_widths_fall_back() {
        let config = CanvasConfig::from_json(r#"{ "pen_width": -1.0, "eraser_width": 0.0 }"#);
        assert_eq!(config.pen_width, 6.0);
        assert_eq!(config.eraser_width, 64.0);
    }

    #[test]
    fn test_malformed_json_gives_defaults() {
        assert_eq!(CanvasConfig::from_json("{ not json"), CanvasConfig::default());
    }
}
