//! Thread-safe FIFO queue of deferred work.
//!
//! The queue is the handoff point between producers of deferred work and the
//! consumer that executes it. Any number of threads may enqueue concurrently;
//! a drain call removes and runs everything it observes, in FIFO order.
//!
//! The one invariant everything here hangs on: the lock is never held while
//! an event executes. Removal happens under the lock, execution happens
//! after it is released, so an event that re-entrantly enqueues more work
//! cannot deadlock — and its new work is picked up by the same drain if it
//! lands before the queue is observed empty.

use std::any::Any;
use std::collections::VecDeque;
use std::panic::{AssertUnwindSafe, catch_unwind};

use parking_lot::Mutex;
use tracing::{debug, error, trace};

use crate::event::Event;

/// A thread-safe FIFO queue of deferred work items.
///
/// Unbounded: there is no capacity limit and no backpressure. The queue has
/// no shutdown state; its lifetime is bound to its owner's. Independent
/// instances are fully isolated from one another.
pub struct EventQueue {
    events: Mutex<VecDeque<Event>>,
}

/// Tally of one `drain()` call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrainReport {
    /// Events that ran to completion.
    pub executed: usize,
    /// Events whose execution panicked. The panic was captured and the
    /// drain continued.
    pub panicked: usize,
}

impl DrainReport {
    /// True when every drained event ran without panicking.
    pub fn all_succeeded(&self) -> bool {
        self.panicked == 0
    }
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Enqueue a closure as deferred work.
    ///
    /// Appends to the tail and returns immediately; the work is never
    /// executed by this call. Safe to call from any number of threads.
    /// Submission order is preserved per producer; the interleaving of
    /// racing producers is unspecified. An event may itself enqueue further
    /// events, recursively.
    pub fn enqueue<F>(&self, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.enqueue_event(Event::new(work));
    }

    /// Enqueue an already-wrapped event (e.g. a labeled one).
    pub fn enqueue_event(&self, event: Event) {
        trace!(label = event.label(), "event enqueued");
        self.events.lock().push_back(event);
    }

    /// Remove and execute queued events until the queue is observed empty.
    ///
    /// Events present at drain start run in FIFO order. Events enqueued
    /// while the drain is running — by other producers or re-entrantly by a
    /// running event — are executed by this call if they arrive before the
    /// empty observation, and stay queued for a later drain otherwise;
    /// either way they are never lost.
    ///
    /// A panicking event is captured, reported, and counted in the returned
    /// [`DrainReport`]; the drain continues with the remaining events. A
    /// failed event is not re-queued.
    ///
    /// Concurrent `drain()` calls are not serialized here; the per-call FIFO
    /// guarantee is only meaningful while a single logical drain runs at a
    /// time, and that discipline belongs to the caller.
    pub fn drain(&self) -> DrainReport {
        let mut report = DrainReport::default();

        loop {
            // Remove the head under the lock, then release it. The lock must
            // not be held while the event runs.
            let next = self.events.lock().pop_front();
            let Some(event) = next else {
                break;
            };

            let (label, run) = event.into_parts();
            match catch_unwind(AssertUnwindSafe(run)) {
                Ok(()) => report.executed += 1,
                Err(payload) => {
                    report.panicked += 1;
                    error!(
                        label = label.as_deref(),
                        panic = panic_message(payload.as_ref()),
                        "event panicked during drain; continuing"
                    );
                }
            }
        }

        debug!(
            executed = report.executed,
            panicked = report.panicked,
            "drain complete"
        );
        report
    }

    /// Point-in-time emptiness snapshot.
    ///
    /// Producers may be enqueueing concurrently, so a `false` can be
    /// immediately followed by an empty observation; never treat this as a
    /// strict precondition for other operations.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Point-in-time count of pending events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort extraction of a human-readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
