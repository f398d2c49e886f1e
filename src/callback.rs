//! Single-slot stored callback.
//!
//! Holds at most one closure; triggering invokes it if present. Triggering
//! an empty slot is a no-op, not an error.

use std::fmt;

/// A slot holding at most one callback.
pub struct Callback {
    callback: Option<Box<dyn FnMut() + Send>>,
}

impl Callback {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self { callback: None }
    }

    /// Install a callback, replacing any previous one.
    pub fn set<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Remove the stored callback. Returns whether one was present.
    pub fn clear(&mut self) -> bool {
        self.callback.take().is_some()
    }

    /// Whether a callback is currently installed.
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the stored callback, if any. Returns whether one ran.
    pub fn trigger(&mut self) -> bool {
        match self.callback.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("is_set", &self.is_set())
            .finish()
    }
}
