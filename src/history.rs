use std::fmt;

use crate::color::HexColor;
use crate::drawing::DrawingRef;
use crate::error::{CanvasError, CanvasResult};
use crate::layer::{LayerId, LayerStore};

/// What produced a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// Seeded first entry, the empty layer
    Start,
    /// Pen stroke or straight line
    Line,
    Erase,
    Clear,
}

impl HistoryAction {
    pub fn label(&self) -> &'static str {
        match self {
            HistoryAction::Start => "Start",
            HistoryAction::Line => "Line",
            HistoryAction::Erase => "Erase",
            HistoryAction::Clear => "Clear",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action together with the layer contents right after it
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub action: HistoryAction,
    pub snapshot: Vec<DrawingRef>,
}

impl HistoryEntry {
    /// Color of the most recent pen or line in the snapshot, used to tint the entry
    pub fn accent_color(&self) -> Option<HexColor> {
        if self.action != HistoryAction::Line {
            return None;
        }
        self.snapshot.iter().rev().find_map(|object| object.color())
    }
}

/// Per-layer linear undo history of full-layer snapshots.
///
/// Every layer's sequence starts with a `Start` entry holding the empty
/// layer; that entry is never popped. Depth is unbounded.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    layers: Vec<Vec<HistoryEntry>>,
    active: usize,
}

impl HistoryStack {
    pub fn new(layer_count: usize) -> Self {
        let seed = || {
            vec![HistoryEntry {
                action: HistoryAction::Start,
                snapshot: Vec::new(),
            }]
        };
        Self {
            layers: (0..layer_count).map(|_| seed()).collect(),
            active: 0,
        }
    }

    pub fn active_layer(&self) -> LayerId {
        LayerId::new(self.active)
    }

    /// Retargets subsequent record/undo/jump calls; no sequence is modified
    pub fn set_layer(&mut self, id: LayerId) -> CanvasResult<()> {
        if id.index() >= self.layers.len() {
            return Err(CanvasError::OutOfRange {
                index: id.index(),
                count: self.layers.len(),
            });
        }
        self.active = id.index();
        Ok(())
    }

    /// Entries of the active layer, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.layers[self.active]
    }

    pub fn entries_for(&self, id: LayerId) -> Option<&[HistoryEntry]> {
        self.layers.get(id.index()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.len() > 1
    }

    pub fn record(&mut self, action: HistoryAction, snapshot: Vec<DrawingRef>) {
        log::debug!(
            "History: layer {} records {} ({} objects)",
            self.active_layer(),
            action,
            snapshot.len()
        );
        self.layers[self.active].push(HistoryEntry { action, snapshot });
    }

    /// Drops the newest entry and restores the one before it.
    ///
    /// Returns false, leaving everything untouched, when only the seed entry is left.
    pub fn undo(&mut self, layers: &mut LayerStore) -> CanvasResult<bool> {
        let history = &mut self.layers[self.active];
        if history.len() <= 1 {
            return Ok(false);
        }
        history.pop();
        let snapshot = history
            .last()
            .map(|entry| entry.snapshot.clone())
            .unwrap_or_default();
        layers.restore(LayerId::new(self.active), snapshot)?;
        Ok(true)
    }

    /// Restores entry `index` and discards every entry after it
    pub fn jump_to(&mut self, index: usize, layers: &mut LayerStore) -> CanvasResult<()> {
        let history = &mut self.layers[self.active];
        let Some(entry) = history.get(index) else {
            return Err(CanvasError::IndexOutOfRange {
                index,
                len: history.len(),
            });
        };
        layers.restore(LayerId::new(self.active), entry.snapshot.clone())?;
        history.truncate(index + 1);
        Ok(())
    }
}
