//! The two-slot (left/right button) palette and its persisted preferences.

use std::collections::HashMap;

use crate::color::HexColor;
use crate::error::{CanvasError, CanvasResult};

pub const LEFT_COLOR_KEY: &str = "leftClickColor";
pub const RIGHT_COLOR_KEY: &str = "rightClickColor";
pub const CUSTOM_COLORS_KEY: &str = "customColors";

/// Best-effort string key-value store for user preferences
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
}

impl PreferenceStore for dyn eframe::Storage + '_ {
    fn get_string(&self, key: &str) -> Option<String> {
        eframe::Storage::get_string(self, key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        eframe::Storage::set_string(self, key, value);
    }
}

/// In-memory store, used when no persistent storage is available
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }
}

/// Which mouse button a palette slot is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Left,
    Right,
}

impl ColorSlot {
    pub fn from_button(button: egui::PointerButton) -> Option<Self> {
        match button {
            egui::PointerButton::Primary => Some(ColorSlot::Left),
            egui::PointerButton::Secondary => Some(ColorSlot::Right),
            _ => None,
        }
    }

    /// What a slot falls back to when its color goes away
    fn fallback(&self) -> HexColor {
        match self {
            ColorSlot::Left => HexColor::PRIMARY,
            ColorSlot::Right => HexColor::TERTIARY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    left: HexColor,
    right: HexColor,
    custom: Vec<HexColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            left: HexColor::SECONDARY,
            right: HexColor::TERTIARY,
            custom: Vec::new(),
        }
    }
}

fn read_color<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> CanvasResult<Option<HexColor>> {
    store.get_string(key).map(|value| value.parse()).transpose()
}

fn read_custom<S: PreferenceStore + ?Sized>(store: &S) -> CanvasResult<Vec<HexColor>> {
    match store.get_string(CUSTOM_COLORS_KEY) {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| CanvasError::StorageUnavailable(format!("{CUSTOM_COLORS_KEY}: {e}"))),
        None => Ok(Vec::new()),
    }
}

impl Palette {
    /// Loads the palette, taking the default for any entry that is absent or malformed
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let defaults = Self::default();
        let color_or = |key: &str, default: HexColor| match read_color(store, key) {
            Ok(color) => color.unwrap_or(default),
            Err(e) => {
                log::warn!("{e}, using {default}");
                default
            }
        };
        let custom = read_custom(store).unwrap_or_else(|e| {
            log::warn!("{e}, starting without custom colors");
            Vec::new()
        });
        Self {
            left: color_or(LEFT_COLOR_KEY, defaults.left),
            right: color_or(RIGHT_COLOR_KEY, defaults.right),
            custom,
        }
    }

    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) {
        store.set_string(LEFT_COLOR_KEY, self.left.to_string());
        store.set_string(RIGHT_COLOR_KEY, self.right.to_string());
        match serde_json::to_string(&self.custom) {
            Ok(json) => store.set_string(CUSTOM_COLORS_KEY, json),
            Err(e) => log::warn!("Could not encode custom colors: {e}"),
        }
    }

    pub fn color(&self, slot: ColorSlot) -> HexColor {
        match slot {
            ColorSlot::Left => self.left,
            ColorSlot::Right => self.right,
        }
    }

    pub fn custom(&self) -> &[HexColor] {
        &self.custom
    }

    /// Assigns a color to a slot (the palette UI's `colorSelected` event)
    pub fn color_selected(&mut self, slot: ColorSlot, color: HexColor) {
        log::info!("Palette: {slot:?} slot set to {color}");
        match slot {
            ColorSlot::Left => self.left = color,
            ColorSlot::Right => self.right = color,
        }
    }

    /// Adds a custom color; returns false if it was already present
    pub fn add_custom(&mut self, color: HexColor) -> bool {
        if self.custom.contains(&color) {
            return false;
        }
        self.custom.push(color);
        true
    }

    /// Removes a custom color. Slots holding it fall back to their defaults.
    pub fn remove_custom(&mut self, index: usize) -> Option<HexColor> {
        if index >= self.custom.len() {
            return None;
        }
        let removed = self.custom.remove(index);
        for slot in [ColorSlot::Left, ColorSlot::Right] {
            if self.color(slot) == removed {
                self.color_selected(slot, slot.fallback());
            }
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_gives_defaults() {
        let palette = Palette::load(&MemoryStore::default());
        assert_eq!(palette.color(ColorSlot::Left), HexColor::SECONDARY);
        assert_eq!(palette.color(ColorSlot::Right), HexColor::TERTIARY);
        assert!(palette.custom().is_empty());
    }

    #[test]
    fn test_malformed_entries_fall_back_individually() {
        let mut store = MemoryStore::default();
        store.set_string(LEFT_COLOR_KEY, "not a color".into());
        store.set_string(RIGHT_COLOR_KEY, "#00ff00".into());
        store.set_string(CUSTOM_COLORS_KEY, "[broken".into());
        let palette = Palette::load(&store);
        assert_eq!(palette.color(ColorSlot::Left), HexColor::SECONDARY);
        assert_eq!(palette.color(ColorSlot::Right), HexColor::from_rgb(0, 255, 0));
        assert!(palette.custom().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut palette = Palette::default();
        palette.color_selected(ColorSlot::Right, HexColor::PRIMARY);
        palette.add_custom(HexColor::from_rgb(1, 2, 3));
        let mut store = MemoryStore::default();
        palette.save(&mut store);
        assert_eq!(store.get_string(CUSTOM_COLORS_KEY).unwrap(), r##"["#010203"]"##);
        assert_eq!(Palette::load(&store), palette);
    }

    #[test]
    fn test_remove_custom_resets_slots() {
        let custom = HexColor::from_rgb(10, 20, 30);
        let mut palette = Palette::default();
        assert!(palette.add_custom(custom));
        assert!(!palette.add_custom(custom));
        palette.color_selected(ColorSlot::Left, custom);
        palette.color_selected(ColorSlot::Right, custom);

        assert_eq!(palette.remove_custom(0), Some(custom));
        assert_eq!(palette.color(ColorSlot::Left), HexColor::PRIMARY);
        assert_eq!(palette.color(ColorSlot::Right), HexColor::TERTIARY);
        assert_eq!(palette.remove_custom(0), None);
    }
}
