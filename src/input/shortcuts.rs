use egui::{Key, Modifiers};

use crate::layer::LayerId;
use crate::tools::ToolKind;

/// What a keyboard shortcut asks the canvas to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectTool(ToolKind),
    OpenColorPicker,
    ClearLayer,
    ReloadMap,
    Undo,
    SelectLayer(LayerId),
}

impl ShortcutAction {
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.command {
            return (key == Key::Z).then_some(ShortcutAction::Undo);
        }
        let action = match key {
            Key::Q => ShortcutAction::SelectTool(ToolKind::Select),
            Key::W => ShortcutAction::SelectTool(ToolKind::Pen),
            Key::E => ShortcutAction::SelectTool(ToolKind::Eraser),
            Key::R => ShortcutAction::SelectTool(ToolKind::Line),
            Key::T => ShortcutAction::OpenColorPicker,
            Key::Y => ShortcutAction::ClearLayer,
            Key::A => ShortcutAction::ReloadMap,
            Key::Num1 => ShortcutAction::SelectLayer(LayerId::new(0)),
            Key::Num2 => ShortcutAction::SelectLayer(LayerId::new(1)),
            Key::Num3 => ShortcutAction::SelectLayer(LayerId::new(2)),
            Key::Num4 => ShortcutAction::SelectLayer(LayerId::new(3)),
            Key::Num5 => ShortcutAction::SelectLayer(LayerId::new(4)),
            Key::Num6 => ShortcutAction::SelectLayer(LayerId::new(5)),
            Key::Num7 => ShortcutAction::SelectLayer(LayerId::new(6)),
            Key::Num8 => ShortcutAction::SelectLayer(LayerId::new(7)),
            Key::Num9 => ShortcutAction::SelectLayer(LayerId::new(8)),
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_keys() {
        assert_eq!(
            ShortcutAction::from_key(Key::W, Modifiers::NONE),
            Some(ShortcutAction::SelectTool(ToolKind::Pen))
        );
        assert_eq!(
            ShortcutAction::from_key(Key::R, Modifiers::SHIFT),
            Some(ShortcutAction::SelectTool(ToolKind::Line))
        );
    }

    #[test]
    fn test_undo_needs_command() {
        assert_eq!(ShortcutAction::from_key(Key::Z, Modifiers::NONE), None);
        assert_eq!(
            ShortcutAction::from_key(Key::Z, Modifiers::COMMAND),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(ShortcutAction::from_key(Key::W, Modifiers::COMMAND), None);
    }

    #[test]
    fn test_digits_select_layers() {
        assert_eq!(
            ShortcutAction::from_key(Key::Num1, Modifiers::NONE),
            Some(ShortcutAction::SelectLayer(LayerId::new(0)))
        );
        assert_eq!(
            ShortcutAction::from_key(Key::Num9, Modifiers::NONE),
            Some(ShortcutAction::SelectLayer(LayerId::new(8)))
        );
        assert_eq!(ShortcutAction::from_key(Key::Num0, Modifiers::NONE), None);
    }
}
