/**
 * Notifier
 *
 * This module implements the subscriber registry and broadcast loop.
 *
 * # Registry
 *
 * Subscribers are registered as `Arc` and stored as `Weak`, so the notifier
 * never keeps a subscriber alive. Registration order is delivery order. The
 * same subscriber may be registered more than once; each registration gets
 * its own `SubscriptionId` and its own delivery.
 *
 * # Publishing
 *
 * `publish` copies the registry under its lock, releases the lock and then
 * calls every live subscriber in order on the caller's thread. Registry
 * changes made during a cycle (including by subscribers) apply from the next
 * event. Registrations whose subscriber was dropped are pruned.
 *
 * A subscriber returning an error or panicking is recorded in the
 * `PublishReport`; the remaining subscribers still receive the event.
 *
 * # Re-entrancy
 *
 * A `publish` issued by a subscriber while its own thread is dispatching
 * on this notifier is queued. That thread's dispatch loop drains the queue
 * in FIFO order before it returns, and folds those deliveries into its own
 * report. The queued call returns at once with `deferred` set.
 *
 * Publishes from other threads are not queued: each thread dispatches its
 * own events to completion, from its own snapshot, before returning.
 */
use crate::notifier::subscriber::Subscriber;
use crate::shared::SubscriberError;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};
use uuid::Uuid;

/// Identity of one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One subscriber that failed during a publish cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub subscription: SubscriptionId,
    pub subscriber: String,
    pub error: SubscriberError,
}

/// Outcome of a `publish` call
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Events dispatched by this call, including drained nested publishes
    pub events: usize,
    /// Successful deliveries
    pub delivered: usize,
    /// Deliveries that returned an error or panicked
    pub failures: Vec<DeliveryFailure>,
    /// The event was queued behind an active dispatch instead of sent here
    pub deferred: bool,
}

impl PublishReport {
    fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    /// No subscriber failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: PublishReport) {
        self.events += other.events;
        self.delivered += other.delivered;
        self.failures.extend(other.failures);
        self.deferred |= other.deferred;
    }
}

struct Registration<E> {
    id: SubscriptionId,
    name: String,
    subscriber: Weak<dyn Subscriber<E>>,
}

impl<E> Clone for Registration<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            subscriber: Weak::clone(&self.subscriber),
        }
    }
}

/// Pending nested publishes, keyed by the thread that is dispatching
type DispatchState<E> = HashMap<ThreadId, VecDeque<E>>;

/// Broadcasts events to registered subscribers
pub struct Notifier<E> {
    registry: Mutex<Vec<Registration<E>>>,
    dispatch: Mutex<DispatchState<E>>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Vec::new()),
            dispatch: Mutex::new(HashMap::new()),
        }
    }

    /// Append `subscriber` to the registry
    ///
    /// The notifier keeps only a weak reference; dropping the last `Arc`
    /// ends the subscription.
    pub fn subscribe<S>(&self, subscriber: &Arc<S>) -> SubscriptionId
    where
        S: Subscriber<E> + 'static,
    {
        let id = SubscriptionId::new();
        let name = subscriber.name().to_string();
        let weak: Weak<S> = Arc::downgrade(subscriber);
        let weak: Weak<dyn Subscriber<E>> = weak;
        let mut registry = lock(&self.registry);
        registry.push(Registration {
            id,
            name: name.clone(),
            subscriber: weak,
        });
        tracing::debug!(
            "[Notifier] Subscribed {} as {} ({} registrations)",
            name,
            id,
            registry.len()
        );
        id
    }

    /// Remove one registration
    ///
    /// # Returns
    /// `true` if the registration existed; removing twice is a no-op
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = lock(&self.registry);
        let before = registry.len();
        registry.retain(|registration| registration.id != id);
        let removed = registry.len() != before;
        if removed {
            tracing::debug!("[Notifier] Unsubscribed {}", id);
        }
        removed
    }

    /// Remove every registration of `subscriber`
    ///
    /// # Returns
    /// Number of registrations removed (0 if it was not registered)
    pub fn unsubscribe_subscriber<S>(&self, subscriber: &Arc<S>) -> usize
    where
        S: Subscriber<E> + 'static,
    {
        let target = Arc::as_ptr(subscriber) as *const ();
        let mut registry = lock(&self.registry);
        let before = registry.len();
        registry.retain(|registration| Weak::as_ptr(&registration.subscriber) as *const () != target);
        let removed = before - registry.len();
        if removed > 0 {
            tracing::debug!(
                "[Notifier] Removed {} registrations of {}",
                removed,
                subscriber.name()
            );
        }
        removed
    }

    /// Registrations whose subscriber is still alive
    pub fn len(&self) -> usize {
        lock(&self.registry)
            .iter()
            .filter(|registration| registration.subscriber.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registration ids in delivery order
    pub fn subscriptions(&self) -> Vec<SubscriptionId> {
        lock(&self.registry)
            .iter()
            .map(|registration| registration.id)
            .collect()
    }

    /// Deliver `event` to every registered subscriber in registration order
    ///
    /// # Returns
    /// A report of deliveries and failures for this event and any publishes
    /// queued while it was being dispatched
    pub fn publish(&self, event: E) -> PublishReport {
        let current = thread::current().id();
        {
            let mut state = lock(&self.dispatch);
            if let Some(pending) = state.get_mut(&current) {
                pending.push_back(event);
                tracing::debug!(
                    "[Notifier] Dispatch in progress, queued event ({} pending)",
                    pending.len()
                );
                return PublishReport::deferred();
            }
            state.insert(current, VecDeque::new());
        }

        let mut report = PublishReport::default();
        let mut next = Some(event);
        while let Some(event) = next {
            self.deliver(&event, &mut report);
            let mut state = lock(&self.dispatch);
            next = state.get_mut(&current).and_then(VecDeque::pop_front);
            if next.is_none() {
                state.remove(&current);
            }
        }

        if report.is_clean() {
            tracing::debug!(
                "[Notifier] Published {} events, {} deliveries",
                report.events,
                report.delivered
            );
        } else {
            tracing::warn!(
                "[Notifier] Published {} events, {} deliveries, {} failures",
                report.events,
                report.delivered,
                report.failures.len()
            );
        }
        report
    }

    fn deliver(&self, event: &E, report: &mut PublishReport) {
        let snapshot: Vec<Registration<E>> = lock(&self.registry).clone();
        let mut dropped = Vec::new();

        for registration in &snapshot {
            let Some(subscriber) = registration.subscriber.upgrade() else {
                dropped.push(registration.id);
                continue;
            };
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| subscriber.receive(event)));
            let error = match outcome {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(error)) => error,
                Err(payload) => SubscriberError::panicked(panic_message(&*payload)),
            };
            tracing::warn!(
                "[Notifier] Subscriber {} ({}) failed: {}",
                registration.name,
                registration.id,
                error
            );
            report.failures.push(DeliveryFailure {
                subscription: registration.id,
                subscriber: registration.name.clone(),
                error,
            });
        }
        report.events += 1;

        if !dropped.is_empty() {
            tracing::debug!("[Notifier] Pruning {} dropped subscribers", dropped.len());
            lock(&self.registry).retain(|registration| !dropped.contains(&registration.id));
        }
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = lock(&self.registry)
            .iter()
            .map(|registration| registration.name.clone())
            .collect();
        f.debug_struct("Notifier").field("subscribers", &names).finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
