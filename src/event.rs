//! Work items held by the queue.
//!
//! An event is an opaque, owned, no-argument no-result unit of deferred
//! computation. Ownership flows producer → queue → executing thread; the
//! event is consumed by execution. An optional label travels with the event
//! so drains can name what they ran (or what panicked) in the log stream.

use std::fmt;

/// A deferred unit of work.
pub struct Event {
    label: Option<String>,
    run: Box<dyn FnOnce() + Send>,
}

impl Event {
    /// Wrap a closure as an unlabeled event.
    pub fn new<F>(run: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            label: None,
            run: Box::new(run),
        }
    }

    /// Wrap a closure as a labeled event. The label only feeds diagnostics.
    pub fn named<F>(label: impl Into<String>, run: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            label: Some(label.into()),
            run: Box::new(run),
        }
    }

    /// Diagnostic label, if one was attached.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Split into label and callable. Consumes the event; the callable can
    /// only run once.
    pub(crate) fn into_parts(self) -> (Option<String>, Box<dyn FnOnce() + Send>) {
        (self.label, self.run)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
