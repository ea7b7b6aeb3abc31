mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::CanvasEvent;
pub use handlers::{LogEventHandler, RecordingEventHandler};

/// Receives notifications from the tool controller
pub trait EventHandler {
    fn handle_event(&mut self, event: &CanvasEvent);
}
