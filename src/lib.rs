#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod base_map;
pub mod color;
pub mod components;
pub mod config;
pub mod drawing;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod layer;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod tools;
pub mod view;

pub use app::StratMapApp;
pub use base_map::{BaseMap, PendingMap};
pub use color::HexColor;
pub use config::CanvasConfig;
pub use drawing::{DrawingObject, DrawingRef, EraseStroke, LineSegment, PenStroke};
pub use error::{CanvasError, CanvasResult};
pub use history::{HistoryAction, HistoryEntry, HistoryStack};
pub use input::{InputEvent, InputHandler, ShortcutAction};
pub use layer::{LAYER_COUNT, Layer, LayerId, LayerStore};
pub use palette::{ColorSlot, Palette, PreferenceStore};
pub use renderer::{Renderer, SurfaceSize};
pub use tools::{ControllerState, StrokeBuilder, ToolController, ToolKind};
pub use view::{ViewTransform, ZoomDirection, ZoomLimits};
