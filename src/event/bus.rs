use std::cell::RefCell;
use crate::event::{EventHandler, ToolEvent};

/// Fan-out of toolbox notifications (tool switches, cursor writes, resizes).
///
/// Lives inside the toolbox on the UI thread. Handlers must not emit from
/// `handle_event`: the handler list is borrowed for the whole dispatch.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        // Subscribers belong to one toolbox; a cloned toolbox starts unobserved
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handler_count())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Register an observer, e.g. a status bar or a test recorder
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Deliver `event` to every observer in subscription order
    pub fn emit(&self, event: ToolEvent) {
        log::trace!("Tool event: {:?}", event);
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}
