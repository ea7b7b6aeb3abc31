use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::view::ZoomDirection;

mod shortcuts;
pub use shortcuts::ShortcutAction;

/// Canvas-level input, already filtered to the canvas rect
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over the canvas
    PointerDown { pos: Pos2, button: PointerButton },
    /// Pointer moved while over the canvas
    PointerMove { pos: Pos2 },
    /// Mouse button was released while over the canvas
    PointerUp { pos: Pos2, button: PointerButton },
    /// Pointer left the canvas rect or the window
    PointerLeave { last_known_pos: Pos2 },
    /// One mouse-wheel notch over the canvas
    Zoom(ZoomDirection),
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Pointer position if it is currently over the canvas
    pub fn hover_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// `canvas_has_pointer` is whether the canvas widget owns the pointer this
    /// frame. It is false while a window or popup covers the canvas under the
    /// pointer, which then counts as leaving the canvas.
    pub fn process_input(&mut self, ctx: &Context, canvas_has_pointer: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let inside = input
                .pointer
                .hover_pos()
                .filter(|pos| canvas_has_pointer && self.canvas_rect.contains(*pos));

            match (self.last_pointer_pos, inside) {
                (Some(last), None) => {
                    events.push(InputEvent::PointerLeave {
                        last_known_pos: input.pointer.hover_pos().unwrap_or(last),
                    });
                }
                (last, Some(pos)) if last != Some(pos) => {
                    events.push(InputEvent::PointerMove { pos });
                }
                _ => {}
            }
            self.last_pointer_pos = inside;

            if let Some(pos) = inside {
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown { pos, button });
                    }
                }
                for button in BUTTONS {
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp { pos, button });
                    }
                }

                let scroll = input.raw_scroll_delta.y;
                if scroll > 0.0 {
                    events.push(InputEvent::Zoom(ZoomDirection::In));
                } else if scroll < 0.0 {
                    events.push(InputEvent::Zoom(ZoomDirection::Out));
                }
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{RawInput, pos2, vec2};

    fn frame(ctx: &Context, handler: &mut InputHandler, owned: bool, events: Vec<egui::Event>) -> Vec<InputEvent> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0))),
            events,
            ..Default::default()
        };
        let mut out = Vec::new();
        let _ = ctx.run(input, |ctx| out = handler.process_input(ctx, owned));
        out
    }

    fn press(pos: Pos2) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_press_on_canvas() {
        let ctx = Context::default();
        let mut handler = InputHandler::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0)));
        let pos = pos2(50.0, 60.0);
        let events = frame(&ctx, &mut handler, true, vec![egui::Event::PointerMoved(pos), press(pos)]);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { pos },
                InputEvent::PointerDown {
                    pos,
                    button: PointerButton::Primary,
                },
            ]
        );
        assert_eq!(handler.hover_pos(), Some(pos));
    }

    #[test]
    fn test_covered_canvas_ignores_presses() {
        let ctx = Context::default();
        let mut handler = InputHandler::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0)));
        let pos = pos2(50.0, 60.0);
        frame(&ctx, &mut handler, true, vec![egui::Event::PointerMoved(pos)]);

        // A window now sits over the canvas under the pointer
        let events = frame(&ctx, &mut handler, false, vec![press(pos)]);
        assert_eq!(events, vec![InputEvent::PointerLeave { last_known_pos: pos }]);
        assert_eq!(handler.hover_pos(), None);
    }

    #[test]
    fn test_wheel_zooms_only_over_canvas() {
        let ctx = Context::default();
        let mut handler = InputHandler::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(200.0, 300.0)));
        let wheel = |pos| {
            vec![
                egui::Event::PointerMoved(pos),
                egui::Event::MouseWheel {
                    unit: egui::MouseWheelUnit::Line,
                    delta: vec2(0.0, 1.0),
                    modifiers: Modifiers::NONE,
                },
            ]
        };
        let over = frame(&ctx, &mut handler, true, wheel(pos2(100.0, 100.0)));
        assert!(over.contains(&InputEvent::Zoom(ZoomDirection::In)));

        let outside = frame(&ctx, &mut handler, true, wheel(pos2(300.0, 100.0)));
        assert!(!outside.iter().any(|e| matches!(e, InputEvent::Zoom(_))));
    }
}
