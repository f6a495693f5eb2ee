mod bus;
mod events;

pub use bus::EventBus;
pub use events::ToolEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &ToolEvent);
}
