use std::cell::RefCell;

use crate::event::{CanvasEvent, EventHandler};

/// A simple event bus for broadcasting canvas events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers.
    ///
    /// An emit from inside a handler is dropped rather than delivered re-entrantly.
    pub fn emit(&self, event: CanvasEvent) {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            log::warn!("EventBus: dropping re-entrant {event:?}");
            return;
        };
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecordingEventHandler;
    use crate::layer::LayerId;

    #[test]
    fn test_every_handler_sees_every_event() {
        let bus = EventBus::new();
        let first = RecordingEventHandler::new();
        let second = RecordingEventHandler::new();
        bus.subscribe(Box::new(first.clone()));
        bus.subscribe(Box::new(second.clone()));

        let event = CanvasEvent::LayerCleared {
            layer: LayerId::new(4),
        };
        bus.emit(event.clone());

        assert_eq!(first.take(), vec![event.clone()]);
        assert_eq!(second.take(), vec![event]);
        assert!(first.take().is_empty());
    }
}
