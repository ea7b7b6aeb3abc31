use std::fmt;
use uuid::Uuid;

use crate::drawing::{DrawingObject, DrawingRef};
use crate::error::{CanvasError, CanvasResult};

/// Size of the layer bank. Layers are selected with the digit keys 1-9.
pub const LAYER_COUNT: usize = 9;

/// A unique identifier for a layer slot in the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub usize);

impl LayerId {
    /// Creates a new LayerId from an index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Gets the underlying index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shown to the user 1-based, matching the shortcut keys
        write!(f, "{}", self.0 + 1)
    }
}

/// An ordered sequence of drawing objects, replayed in commit order
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Unique identifier for the layer, stable for the session
    pub id: Uuid,
    /// Display name of the layer
    pub name: String,
    objects: Vec<DrawingRef>,
}

impl Layer {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            objects: Vec::new(),
        }
    }

    pub fn objects(&self) -> &[DrawingRef] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Copy of the object sequence, suitable for a history entry
    pub fn snapshot(&self) -> Vec<DrawingRef> {
        self.objects.clone()
    }
}

/// Owns the fixed bank of layers and tracks which one is active.
///
/// Mutation is limited to appending a committed object, clearing, or
/// replacing a whole layer's contents from a snapshot.
#[derive(Debug, Clone)]
pub struct LayerStore {
    layers: Vec<Layer>,
    active: usize,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore {
    pub fn new() -> Self {
        let layers = (0..LAYER_COUNT)
            .map(|i| Layer::new(&format!("Layer {}", LayerId::new(i))))
            .collect();
        Self { layers, active: 0 }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.index())
    }

    pub fn active_id(&self) -> LayerId {
        LayerId::new(self.active)
    }

    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    pub fn switch_to(&mut self, id: LayerId) -> CanvasResult<()> {
        if id.index() >= self.layers.len() {
            return Err(CanvasError::OutOfRange {
                index: id.index(),
                count: self.layers.len(),
            });
        }
        self.active = id.index();
        Ok(())
    }

    /// Replaces the active layer's contents with `snapshot`
    pub fn set_active_layer(&mut self, snapshot: Vec<DrawingRef>) {
        self.layers[self.active].objects = snapshot;
    }

    /// Replaces the contents of layer `id` with `snapshot`
    pub fn restore(&mut self, id: LayerId, snapshot: Vec<DrawingRef>) -> CanvasResult<()> {
        let count = self.layers.len();
        let layer = self.layers.get_mut(id.index()).ok_or(CanvasError::OutOfRange {
            index: id.index(),
            count,
        })?;
        layer.objects = snapshot;
        Ok(())
    }

    /// Appends a committed object to the active layer
    pub fn push(&mut self, object: DrawingObject) -> DrawingRef {
        let object = DrawingRef::new(object);
        self.layers[self.active].objects.push(object.clone());
        object
    }

    /// Empties the active layer
    pub fn clear(&mut self) {
        self.layers[self.active].objects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::drawing::LineSegment;
    use egui::pos2;

    fn line() -> DrawingObject {
        LineSegment::new(HexColor::PRIMARY, 6.0, pos2(0.0, 0.0), pos2(1.0, 1.0)).into()
    }

    #[test]
    fn test_fixed_bank() {
        let store = LayerStore::new();
        assert_eq!(store.layer_count(), LAYER_COUNT);
        assert_eq!(store.active_id(), LayerId::new(0));
        assert!(store.layers().iter().all(Layer::is_empty));
        assert_eq!(store.layers()[8].name, "Layer 9");
    }

    #[test]
    fn test_switch_out_of_range() {
        let mut store = LayerStore::new();
        store.switch_to(LayerId::new(4)).unwrap();
        let err = store.switch_to(LayerId::new(9)).unwrap_err();
        assert_eq!(err, CanvasError::OutOfRange { index: 9, count: 9 });
        assert_eq!(store.active_id(), LayerId::new(4));
    }

    #[test]
    fn test_push_and_clear_only_touch_active() {
        let mut store = LayerStore::new();
        store.switch_to(LayerId::new(2)).unwrap();
        store.push(line());
        store.push(line());
        assert_eq!(store.active_layer().len(), 2);
        assert!(store.layer(LayerId::new(0)).unwrap().is_empty());

        store.clear();
        assert!(store.active_layer().is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = LayerStore::new();
        store.push(line());
        let snapshot = store.active_layer().snapshot();
        store.push(line());
        assert_eq!(snapshot.len(), 1);

        store.set_active_layer(snapshot);
        assert_eq!(store.active_layer().len(), 1);
    }

    #[test]
    fn test_layer_ids_are_unique_and_survive_restore() {
        let mut store = LayerStore::new();
        let ids: std::collections::HashSet<_> = store.layers().iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), LAYER_COUNT);

        let before = store.active_layer().id;
        store.push(line());
        store.restore(LayerId::new(0), Vec::new()).unwrap();
        store.clear();
        assert_eq!(store.active_layer().id, before);
    }
}
