//! Test fixtures: handlers that count their calls and subscribers that
//! record what they receive.

use authflow::chain::Handler;
use authflow::notifier::Subscriber;
use authflow::shared::{Request, SubscriberError, ValidationError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Handler with a fixed verdict that counts how often it was asked
pub struct CountingHandler {
    name: String,
    verdict: Option<ValidationError>,
    calls: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Returns the handler plus a shared view of its call counter
    pub fn with_counter(name: &str, verdict: Option<ValidationError>) -> (Box<dyn Handler>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = Self {
            name: name.to_string(),
            verdict,
            calls: Arc::clone(&calls),
        };
        (Box::new(handler), calls)
    }
}

impl Handler for CountingHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, _request: &Request) -> Option<ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict
    }
}

/// Read a call counter
pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

/// Ordered log shared by several recorders
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Subscriber that appends `label:event` to a shared log
pub struct Recorder {
    label: String,
    log: EventLog,
}

impl Recorder {
    pub fn new(label: &str, log: &EventLog) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            log: Arc::clone(log),
        })
    }
}

impl<E: std::fmt::Display> Subscriber<E> for Recorder {
    fn name(&self) -> &str {
        &self.label
    }

    fn receive(&self, event: &E) -> Result<(), SubscriberError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.label, event));
        Ok(())
    }
}

/// Snapshot of a log
pub fn entries(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
