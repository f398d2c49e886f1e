//! # eventq
//!
//! In-process deferred work queue: a thread-safe FIFO handoff point between
//! any number of producer threads and a consumer that drains and executes
//! the queued work.
//!
//! Companion modules provide a single-slot callback, an observer/subject
//! broadcaster, and leveled logging via tracing.

pub mod callback;
pub mod error;
pub mod event;
pub mod notify;
pub mod queue;
pub mod telemetry;
