//! eventq CLI — demo driver for the deferred work queue.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use clap::{Parser, Subcommand};
use eventq::event::Event;
use eventq::notify::{Observer, Subject};
use eventq::queue::EventQueue;
use eventq::telemetry::{self, LogLevel};
use tracing::info;

#[derive(Parser)]
#[command(name = "eventq", about = "Deferred work queue demos")]
struct Cli {
    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enqueue a handful of events and drain them in FIFO order
    Demo,
    /// Hammer the queue from concurrent producer threads, then drain
    Stress {
        /// Number of producer threads
        #[arg(long, default_value_t = 5)]
        producers: usize,
        /// Events enqueued by each producer
        #[arg(long, default_value_t = 10)]
        events: usize,
    },
    /// Broadcast a message to registered observers
    Notify {
        /// Message to broadcast
        #[arg(default_value = "something interesting happened")]
        message: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level: LogLevel = cli.log_level.parse()?;
    telemetry::init(level)?;

    match cli.command {
        Command::Demo => cmd_demo(),
        Command::Stress { producers, events } => cmd_stress(producers, events),
        Command::Notify { message } => cmd_notify(&message),
    }
}

/// Single-threaded walkthrough: enqueue, drain, verify empty.
fn cmd_demo() -> anyhow::Result<()> {
    let queue = EventQueue::new();

    queue.enqueue_event(Event::named("greet", || {
        info!("hello from the first event");
    }));
    queue.enqueue_event(Event::named("explain", || {
        info!("events run in the order they were enqueued");
    }));
    queue.enqueue_event(Event::named("chain", || {
        info!("an event may enqueue more work on a queue it holds");
    }));

    println!("queued {} event(s), draining...", queue.len());
    let report = queue.drain();
    println!(
        "drained: {} executed, {} panicked, queue empty: {}",
        report.executed,
        report.panicked,
        queue.is_empty()
    );

    Ok(())
}

/// Concurrent producers, one drain. Every enqueued event must run exactly once.
fn cmd_stress(producers: usize, events: usize) -> anyhow::Result<()> {
    let queue = Arc::new(EventQueue::new());
    let counter = Arc::new(AtomicUsize::new(0));
    let started = Instant::now();

    let handles: Vec<_> = (0..producers)
        .map(|p| {
            let queue = Arc::clone(&queue);
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..events {
                    let counter = Arc::clone(&counter);
                    queue.enqueue(move || {
                        counter.fetch_add(1, Ordering::Relaxed);
                    });
                }
                info!(producer = p, events, "producer finished");
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("producer thread panicked"))?;
    }

    let report = queue.drain();
    let executed = counter.load(Ordering::Relaxed);
    let expected = producers * events;

    println!(
        "{executed}/{expected} events executed in {:?} ({} producer(s) x {} event(s))",
        started.elapsed(),
        producers,
        events
    );

    anyhow::ensure!(report.executed == expected, "drain lost events");
    anyhow::ensure!(queue.is_empty(), "queue not empty after drain");
    Ok(())
}

/// Observer broadcast: attach, notify, detach, notify again.
fn cmd_notify(message: &str) -> anyhow::Result<()> {
    struct ConsoleObserver {
        name: &'static str,
    }

    impl Observer for ConsoleObserver {
        fn on_notify(&self, message: &str) {
            println!("[{}] {message}", self.name);
        }
    }

    let mut subject = Subject::new();
    let first = subject.attach(Box::new(ConsoleObserver { name: "console-1" }));
    subject.attach(Box::new(ConsoleObserver { name: "console-2" }));
    subject.attach(Box::new(|message: &str| {
        info!(message, "closure observer notified");
    }));

    subject.notify(message);

    subject.detach(first);
    println!("detached console-1, notifying again");
    subject.notify(message);

    Ok(())
}
