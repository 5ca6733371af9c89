//! # Farekit Events
//!
//! One-to-many notification registry: callback handles invoked synchronously
//! in registration order. Registration order is the only ordering guarantee.
//!
//! The registry is single-threaded by design — there is no interior locking,
//! and notification never re-enters the registry.

use tracing::debug;

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Registry of callbacks for events of type `E`.
pub struct Notifier<E> {
    next_id: u64,
    handlers: Vec<(u64, Box<dyn Fn(&E)>)>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    /// Register a handler. Handlers fire in registration order.
    pub fn subscribe<F>(&mut self, handler: F) -> Subscription
    where
        F: Fn(&E) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        Subscription(id)
    }

    /// Remove a handler. Returns true when it was registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != subscription.0);
        self.handlers.len() != before
    }

    /// Invoke every live handler with `event`, synchronously and in
    /// registration order.
    pub fn notify(&self, event: &E) {
        debug!(handlers = self.handlers.len(), "dispatching event");
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
