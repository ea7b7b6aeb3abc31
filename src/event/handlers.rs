use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{CanvasEvent, EventHandler};

/// Writes every event to the log
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &CanvasEvent) {
        match event {
            CanvasEvent::ViewChanged { .. } => log::debug!("{event:?}"),
            _ => log::info!("{event:?}"),
        }
    }
}

/// Keeps a shared list of received events, for inspection by the subscriber
#[derive(Debug, Default, Clone)]
pub struct RecordingEventHandler {
    events: Rc<RefCell<Vec<CanvasEvent>>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the events received so far
    pub fn take(&self) -> Vec<CanvasEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl EventHandler for RecordingEventHandler {
    fn handle_event(&mut self, event: &CanvasEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
