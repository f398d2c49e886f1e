//! Observer/subject broadcast.
//!
//! A subject keeps an ordered list of observers and notifies all of them
//! when something happens. Plain synchronous broadcast: observers run on
//! the notifying thread, in attachment order.

use std::fmt;

use tracing::trace;

/// Receives notifications from a [`Subject`].
pub trait Observer: Send {
    fn on_notify(&self, message: &str);
}

/// Any `Fn(&str)` closure works as an observer.
impl<F> Observer for F
where
    F: Fn(&str) + Send,
{
    fn on_notify(&self, message: &str) {
        self(message);
    }
}

/// Handle identifying an attached observer, used to detach it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Maintains a list of observers and broadcasts messages to them.
pub struct Subject {
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
}

impl Subject {
    /// Create a subject with no observers.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Attach an observer. Returns a handle for detaching it.
    pub fn attach(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Detach the observer behind `id`. Returns whether one was removed;
    /// detaching an unknown id is a no-op.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(attached, _)| *attached != id);
        self.observers.len() != before
    }

    /// Number of currently attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Notify every attached observer, in attachment order.
    pub fn notify(&self, message: &str) {
        trace!(observers = self.observers.len(), message, "notifying");
        for (_, observer) in &self.observers {
            observer.on_notify(message);
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish()
    }
}
